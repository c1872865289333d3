// =============================================================================
// SUGGESTIONS.RS — Editing hints for sprite pairs that look too alike
//
// Hints come from a fixed, ordered list of rules:
// - region:  horizontal bands that barely differ
// - density: both sprites carry about the same amount of ink
// - shape:   left and right sides both barely differ
// - general: generic ideas, only when none of the above fired
// - tools:   editor shortcuts, always last
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::compare::{analyze_regional_differences, Region, RegionalDifferences};
use crate::config::ComparatorConfig;
use crate::sprite::{analyze_density, Density, Sprite};

// ── Suggestion ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Region,
    Density,
    Shape,
    General,
    Tools,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One user-facing hint, serialized the way the sprite editor renders it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

impl Suggestion {
    fn new(
        kind: SuggestionKind,
        priority: Priority,
        icon: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        actions: &[&str],
    ) -> Self {
        Self {
            kind,
            priority,
            icon: icon.to_owned(),
            title: title.into(),
            description: description.into(),
            actions: actions.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

// ── Rule pipeline ─────────────────────────────────────────────────────────────

/// Everything the rules look at, computed once per pair.
struct Analysis<'a> {
    regions: RegionalDifferences,
    character: Density,
    obstacle: Density,
    config: &'a ComparatorConfig,
}

type Rule = fn(&Analysis<'_>) -> Option<Suggestion>;

/// Targeted rules, in evaluation order.  Each adds at most one hint.
const TARGETED_RULES: [Rule; 3] = [region_rule, density_rule, shape_rule];

/// Hints for a character/obstacle pair using the default thresholds.
///
/// The result is never empty: the editor-tools hint is always appended.
pub fn generate_smart_suggestions(character: &Sprite, obstacle: &Sprite) -> Vec<Suggestion> {
    generate(character, obstacle, &ComparatorConfig::default())
}

pub(crate) fn generate(
    character: &Sprite,
    obstacle: &Sprite,
    config: &ComparatorConfig,
) -> Vec<Suggestion> {
    let analysis = Analysis {
        regions: analyze_regional_differences(character, obstacle),
        character: analyze_density(character),
        obstacle: analyze_density(obstacle),
        config,
    };

    let mut out: Vec<Suggestion> = TARGETED_RULES
        .iter()
        .filter_map(|rule| rule(&analysis))
        .collect();

    if out.is_empty() {
        out.push(general_suggestion());
    }
    out.push(tools_suggestion());

    tracing::debug!(count = out.len(), "generated sprite suggestions");
    out
}

fn region_rule(a: &Analysis<'_>) -> Option<Suggestion> {
    let low: Vec<Region> = Region::HORIZONTAL
        .into_iter()
        .filter(|&r| a.regions[r].percentage < a.config.region_threshold)
        .collect();
    let first = low.first()?.label();
    let joined = low.iter().map(|r| r.label()).collect::<Vec<_>>().join(", ");

    Some(Suggestion::new(
        SuggestionKind::Region,
        Priority::High,
        "🎯",
        format!("Poca diferencia en la zona {first}"),
        format!(
            "Las zonas {joined} del personaje y del obstáculo son casi iguales. \
             Cambia los píxeles de la zona {first} para que se distingan mejor."
        ),
        &[
            "Modifica los píxeles de la zona con menos diferencia",
            "Prueba una silueta distinta en esa franja",
            "Compara ambos sprites fila por fila",
        ],
    ))
}

fn density_rule(a: &Analysis<'_>) -> Option<Suggestion> {
    let c = a.character.percentage;
    let o = a.obstacle.percentage;
    if (c - o).abs() >= a.config.density_gap_threshold {
        return None;
    }

    let suggestion = if c > a.config.dense_sprite_threshold {
        Suggestion::new(
            SuggestionKind::Density,
            Priority::Medium,
            "⚖️",
            "Densidad de píxeles similar",
            format!(
                "El personaje ocupa el {c:.0}% de la cuadrícula y el obstáculo el {o:.0}%. \
                 Aligera el personaje para que no parezca un bloque."
            ),
            &[
                "Elimina píxeles del contorno",
                "Deja huecos internos en la figura",
            ],
        )
    } else {
        Suggestion::new(
            SuggestionKind::Density,
            Priority::Medium,
            "⚖️",
            "Densidad de píxeles similar",
            format!(
                "El personaje ocupa el {c:.0}% de la cuadrícula y el obstáculo el {o:.0}%. \
                 Dale más cuerpo al personaje."
            ),
            &[
                "Añade píxeles para engrosar la figura",
                "Rellena la cabeza o el torso",
            ],
        )
    };
    Some(suggestion)
}

fn shape_rule(a: &Analysis<'_>) -> Option<Suggestion> {
    let left = a.regions[Region::Left].percentage;
    let right = a.regions[Region::Right].percentage;
    let limit = a.config.lateral_threshold;
    if left >= limit || right >= limit {
        return None;
    }

    Some(Suggestion::new(
        SuggestionKind::Shape,
        Priority::High,
        "↔️",
        "Laterales demasiado parecidos",
        format!(
            "Los lados izquierdo ({left:.0}%) y derecho ({right:.0}%) apenas cambian entre \
             los dos sprites. Una silueta asimétrica hace al personaje más reconocible."
        ),
        &[
            "Añade un brazo o una extremidad en un solo lado",
            "Desplaza la figura hacia un lateral",
        ],
    ))
}

fn general_suggestion() -> Suggestion {
    Suggestion::new(
        SuggestionKind::General,
        Priority::Medium,
        "💡",
        "Ideas para diferenciar los sprites",
        "Prueba alguna de estas técnicas para que el personaje y el obstáculo se distingan a simple vista.",
        &[
            "Usa formas redondeadas para el personaje y angulosas para el obstáculo",
            "Dale al personaje ojos o una cara reconocible",
            "Cambia el tamaño relativo de las figuras",
        ],
    )
}

fn tools_suggestion() -> Suggestion {
    Suggestion::new(
        SuggestionKind::Tools,
        Priority::Low,
        "🛠️",
        "Herramientas del editor",
        "Las herramientas del editor permiten probar variantes rápidamente.",
        &[
            "Invertir: intercambia píxeles encendidos y apagados",
            "Limpiar: empieza desde una cuadrícula vacía",
            "Rellenar: enciende todos los píxeles",
        ],
    )
}
