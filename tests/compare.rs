use proptest::prelude::*;
use spritediff::compare::*;
use spritediff::suggestions::SuggestionKind;
use spritediff::{ComparatorConfig, SpriteError};

// ── calculate_sprite_difference ───────────────────────────────────────────────

#[test]
fn identical_sprites_have_no_difference() {
    let s: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(calculate_sprite_difference(&s, &s), 0.0);
}

#[test]
fn empty_vs_full_is_one_hundred() {
    assert_eq!(calculate_sprite_difference(&[0; 8], &[31; 8]), 100.0);
}

#[test]
fn one_row_of_five_is_twelve_and_a_half() {
    let a: [u8; 8] = [16, 16, 16, 16, 16, 16, 16, 16];
    let b: [u8; 8] = [16, 16, 16, 16, 16, 16, 16, 0];
    assert_eq!(calculate_sprite_difference(&a, &b), 2.5);

    let c: [u8; 8] = [16, 16, 16, 16, 16, 16, 16, 15];
    // 16 = 0b10000, 15 = 0b01111: every column in the last row flips.
    assert_eq!(calculate_sprite_difference(&a, &c), 12.5);
}

#[test]
fn whole_row_cleared_is_twelve_and_a_half() {
    let a: [u8; 8] = [31, 31, 31, 31, 31, 31, 31, 31];
    let b: [u8; 8] = [31, 31, 31, 31, 31, 31, 31, 0];
    assert_eq!(calculate_sprite_difference(&a, &b), 12.5);
}

#[test]
fn bits_above_column_range_are_ignored() {
    assert_eq!(calculate_sprite_difference(&[0xE0; 8], &[0; 8]), 0.0);
}

#[test]
fn wrong_shape_reads_as_zero() {
    assert_eq!(calculate_sprite_difference(&[0; 7], &[31; 8]), 0.0);
    assert_eq!(calculate_sprite_difference(&[31; 8], &[0; 9]), 0.0);
    assert_eq!(calculate_sprite_difference(&[], &[]), 0.0);
}

#[test]
fn try_difference_reports_wrong_shape() {
    let err = try_sprite_difference(&[0; 8], &[0; 3]).unwrap_err();
    assert!(matches!(err, SpriteError::InvalidShape { rows: 3 }));
    assert_eq!(try_sprite_difference(&[0; 8], &[31; 8]).unwrap(), 100.0);
}

// ── validate_sprite_difference ────────────────────────────────────────────────

#[test]
fn too_similar_pair_fails_with_suggestions() {
    let a: [u8; 8] = [31, 31, 31, 31, 31, 31, 31, 31];
    let b: [u8; 8] = [31, 31, 31, 31, 31, 31, 31, 0];
    let result = validate_sprite_difference(&a, &b);

    assert!(!result.valid);
    assert_eq!(result.difference, 12.5);
    assert_eq!(
        result.message,
        "El personaje y el obstáculo son muy similares (12.5% de diferencia). \
         Se requiere al menos 20% de diferencia para garantizar jugabilidad."
    );
    assert!(!result.suggestions.is_empty());
    assert_eq!(result.suggestions.last().unwrap().kind, SuggestionKind::Tools);
}

#[test]
fn exactly_twenty_percent_passes() {
    // One pixel per row = 8 of 40.
    let result = validate_sprite_difference(&[0; 8], &[16; 8]);
    assert_eq!(result.difference, 20.0);
    assert!(result.valid);
    assert_eq!(result.message, "Los sprites son suficientemente diferentes (20% de diferencia).");
    assert!(result.suggestions.is_empty());
}

#[test]
fn seventeen_and_a_half_percent_fails() {
    let result = validate_sprite_difference(&[0; 8], &[16, 16, 16, 16, 16, 16, 16, 0]);
    assert_eq!(result.difference, 17.5);
    assert!(!result.valid);
}

#[test]
fn wrong_shape_fails_without_suggestions() {
    let result = validate_sprite_difference(&[0; 4], &[31; 8]);
    assert!(!result.valid);
    assert_eq!(result.difference, 0.0);
    assert!(result.suggestions.is_empty());
}

#[test]
fn comparator_uses_configured_threshold() {
    let comparator = SpriteComparator::new(ComparatorConfig {
        min_difference_required: 10.0,
        ..ComparatorConfig::default()
    });
    let result = comparator.validate(&[31; 8], &[31, 31, 31, 31, 31, 31, 31, 0]);
    assert!(result.valid);
    assert_eq!(result.difference, 12.5);

    let strict = SpriteComparator::new(ComparatorConfig {
        min_difference_required: 50.0,
        ..ComparatorConfig::default()
    });
    let result = strict.validate(&[0; 8], &[16; 8]);
    assert!(!result.valid);
    assert!(result.message.contains("al menos 50%"));
}

#[test]
fn result_serializes_for_the_editor() {
    let result = validate_sprite_difference(&[0; 8], &[0; 8]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["valid"], false);
    assert_eq!(json["difference"], 0.0);
    assert!(json["message"].is_string());
    let last = json["suggestions"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["type"], "tools");
    assert_eq!(last["priority"], "low");
    assert!(last["actions"].is_array());
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_identical_is_zero(rows in prop::array::uniform8(any::<u8>())) {
        prop_assert_eq!(calculate_sprite_difference(&rows, &rows), 0.0);
    }

    #[test]
    fn prop_difference_is_symmetric(
        a in prop::array::uniform8(any::<u8>()),
        b in prop::array::uniform8(any::<u8>()),
    ) {
        prop_assert_eq!(
            calculate_sprite_difference(&a, &b),
            calculate_sprite_difference(&b, &a)
        );
    }

    #[test]
    fn prop_complement_is_one_hundred(a in prop::array::uniform8(any::<u8>())) {
        let b = a.map(|row| row ^ 0x1F);
        prop_assert_eq!(calculate_sprite_difference(&a, &b), 100.0);
    }

    #[test]
    fn prop_difference_in_range_on_half_steps(
        a in prop::array::uniform8(any::<u8>()),
        b in prop::array::uniform8(any::<u8>()),
    ) {
        let d = calculate_sprite_difference(&a, &b);
        prop_assert!((0.0..=100.0).contains(&d));
        // 40 cells: each mismatch is worth exactly 2.5%.
        prop_assert_eq!((d * 10.0) % 25.0, 0.0);
    }

    #[test]
    fn prop_wrong_shape_is_zero(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::array::uniform8(any::<u8>()),
    ) {
        prop_assume!(a.len() != 8);
        prop_assert_eq!(calculate_sprite_difference(&a, &b), 0.0);
        prop_assert_eq!(calculate_sprite_difference(&b, &a), 0.0);
    }

    #[test]
    fn prop_valid_iff_at_least_twenty(
        a in prop::array::uniform8(any::<u8>()),
        b in prop::array::uniform8(any::<u8>()),
    ) {
        let result = validate_sprite_difference(&a, &b);
        prop_assert_eq!(result.valid, result.difference >= 20.0);
        prop_assert_eq!(result.valid, result.suggestions.is_empty());
    }
}
