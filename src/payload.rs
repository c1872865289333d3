use serde::Serialize;
use serde_json::{Map, Value};

use crate::compare::{DifferenceResult, SpriteComparator};
use crate::error::SpriteError;
use crate::sprite::{Sprite, SPRITE_ROWS};

/// Keys every payload must carry, checked in this order.
pub const REQUIRED_FIELDS: [&str; 4] = ["character", "obstacle", "goalType", "goalValue"];

// ── GameConfig ────────────────────────────────────────────────────────────────

/// The game set-up sent from the sprite editor to the console.
///
/// Serializes as
///
/// ```text
/// {"character":[..8 rows..],"obstacle":[..8 rows..],"goalType":"...","goalValue":N}
/// ```
///
/// `character` must stay ahead of `obstacle`: the firmware reads the two
/// arrays positionally, keyed only on the first letter of each name.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub character: Sprite,
    pub obstacle: Sprite,
    pub goal_type: String,
    pub goal_value: u32,
}

impl GameConfig {
    /// Parse and check a payload.
    ///
    /// # Errors
    /// - [`SpriteError::NoData`] for an empty body, `null`, or `{}`.
    /// - [`SpriteError::MissingField`] naming the first absent required key.
    /// - [`SpriteError::InvalidShape`] / [`SpriteError::InvalidRow`] for a
    ///   sprite that is not 8 byte-sized integers.
    /// - [`SpriteError::Json`] for malformed JSON or a mistyped goal.
    pub fn from_json(json: &str) -> Result<Self, SpriteError> {
        if json.trim().is_empty() {
            return Err(SpriteError::NoData);
        }

        let value: Value = serde_json::from_str(json)?;
        let obj = match value.as_object() {
            Some(obj) if !obj.is_empty() => obj,
            _ => return Err(SpriteError::NoData),
        };

        if let Some(&missing) = REQUIRED_FIELDS.iter().find(|f| !obj.contains_key(**f)) {
            return Err(SpriteError::MissingField(missing));
        }

        Ok(Self {
            character: sprite_field(obj, "character")?,
            obstacle: sprite_field(obj, "obstacle")?,
            goal_type: serde_json::from_value(obj["goalType"].clone())?,
            goal_value: serde_json::from_value(obj["goalValue"].clone())?,
        })
    }

    pub fn to_json(&self) -> Result<String, SpriteError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that the configured character and obstacle are distinguishable.
    pub fn validate(&self, comparator: &SpriteComparator) -> DifferenceResult {
        comparator.validate(self.character.rows(), self.obstacle.rows())
    }
}

fn sprite_field(obj: &Map<String, Value>, field: &'static str) -> Result<Sprite, SpriteError> {
    let Some(entries) = obj.get(field).and_then(Value::as_array) else {
        return Err(SpriteError::InvalidShape { rows: 0 });
    };
    if entries.len() != SPRITE_ROWS {
        return Err(SpriteError::InvalidShape { rows: entries.len() });
    }

    let mut rows = [0u8; SPRITE_ROWS];
    for (index, entry) in entries.iter().enumerate() {
        rows[index] = entry
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| SpriteError::InvalidRow {
                field,
                index,
                value: entry.to_string(),
            })?;
    }
    Ok(Sprite::new(rows))
}
