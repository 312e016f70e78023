//! Integration tests for vocabulary entries and difficulty levels.

use frasario_foundation::{DEFAULT_CATEGORY, Difficulty, ErrorKind, VocabularyEntry};
use proptest::prelude::*;

// =============================================================================
// Difficulty
// =============================================================================

#[test]
fn difficulty_range() {
    assert!(Difficulty::new(0).is_err());
    assert_eq!(Difficulty::new(1).unwrap(), Difficulty::EASY);
    assert_eq!(Difficulty::new(3).unwrap(), Difficulty::HARD);
    assert!(Difficulty::new(4).is_err());
}

#[test]
fn difficulty_defaults_to_medium() {
    assert_eq!(Difficulty::default(), Difficulty::MEDIUM);
    assert_eq!(Difficulty::default().level(), 2);
}

#[test]
fn difficulty_conversions() {
    assert_eq!(Difficulty::try_from(2).unwrap(), Difficulty::MEDIUM);
    assert_eq!(u8::from(Difficulty::HARD), 3);
    assert_eq!(Difficulty::EASY.to_string(), "1");
    assert!(Difficulty::EASY < Difficulty::HARD);
}

// =============================================================================
// VocabularyEntry
// =============================================================================

#[test]
fn entry_trims_fields() {
    let e = VocabularyEntry::new("  libro ", " βιβλίο ", " nouns ", Difficulty::EASY).unwrap();
    assert_eq!(e.source_term, "libro");
    assert_eq!(e.target_term, "βιβλίο");
    assert_eq!(e.category, "nouns");
}

#[test]
fn entry_blank_category_becomes_default() {
    let e = VocabularyEntry::new("pane", "ψωμί", "   ", Difficulty::EASY).unwrap();
    assert_eq!(e.category, DEFAULT_CATEGORY);
}

#[test]
fn entry_rejects_blank_source() {
    let err = VocabularyEntry::new(" ", "x", "nouns", Difficulty::EASY).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEntry { .. }));
}

#[test]
fn entry_category_match_ignores_case() {
    let e = VocabularyEntry::new("rosso", "κόκκινο", "Adjectives", Difficulty::EASY).unwrap();
    assert!(e.in_category("adjectives"));
    assert!(e.in_category(" ADJECTIVES "));
    assert!(!e.in_category("nouns"));
}

#[test]
fn entry_display() {
    let e = VocabularyEntry::new("casa", "σπίτι", "places", Difficulty::EASY).unwrap();
    assert_eq!(e.to_string(), "casa=σπίτι");
}

proptest! {
    #[test]
    fn valid_entries_are_usable(term in "[a-zà-ù]{1,12}", level in 1u8..=3) {
        let e = VocabularyEntry::new(term, "t", "nouns", Difficulty::new(level).unwrap()).unwrap();
        prop_assert!(e.is_usable());
    }
}
