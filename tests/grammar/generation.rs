//! Integration tests for end-to-end sentence generation.

use frasario_foundation::{Difficulty, ErrorKind, VocabularyEntry};
use frasario_grammar::pattern::{AVERE_POSSESSIVE, COMPOUND, ECCO, ESSERE_DESCRIPTIVE};
use frasario_grammar::{GeneratorConfig, PatternCatalog, SentenceGenerator, generate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// =============================================================================
// Helpers
// =============================================================================

const POOL: &[(&str, &str)] = &[
    ("libro", "nouns"),
    ("casa", "nouns"),
    ("zaino", "nouns"),
    ("isola", "places"),
    ("albero", "nouns"),
    ("stazione", "places"),
    ("pane", "food"),
    ("rosso", "adjectives"),
    ("bella", "adjectives"),
    ("grande", "adjectives"),
    ("mangiare", "verbs"),
    ("dormire", "verbs"),
    ("domani", "time"),
    ("giorno", "time"),
    ("tre", "numbers"),
    ("ciao", "greetings"),
];

fn entry(term: &str, category: &str) -> VocabularyEntry {
    VocabularyEntry::new(term, format!("[{term}]"), category, Difficulty::EASY).unwrap()
}

fn vocabulary(pairs: &[(&str, &str)]) -> Vec<VocabularyEntry> {
    pairs.iter().map(|(t, c)| entry(t, c)).collect()
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// =============================================================================
// Examples
// =============================================================================

#[test]
fn descriptive_only_catalog() {
    let generator =
        SentenceGenerator::new().with_catalog(PatternCatalog::new(vec![ESSERE_DESCRIPTIVE]));
    let vocab = vocabulary(&[("libro", "nouns"), ("rosso", "adjectives")]);
    let s = generator.generate(&vocab, &mut rng(11)).unwrap();
    assert_eq!(s.text, "Il libro è rosso.");
    assert_eq!(s.pattern_name, "essere-descriptive");
    assert_eq!(s.words_used, ["libro", "rosso"]);
}

#[test]
fn possessive_with_elided_indefinite() {
    let generator =
        SentenceGenerator::new().with_catalog(PatternCatalog::new(vec![AVERE_POSSESSIVE]));
    let vocab = vocabulary(&[("amica", "nouns")]);
    for seed in 0..10 {
        let s = generator.generate(&vocab, &mut rng(seed)).unwrap();
        assert!(s.text.ends_with(" un'amica."), "{}", s.text);
    }
}

#[test]
fn compound_never_repeats_the_pronoun() {
    let generator = SentenceGenerator::new().with_catalog(PatternCatalog::new(vec![COMPOUND]));
    let vocab = vocabulary(&[("libro", "nouns"), ("zaino", "nouns")]);
    for seed in 0..100 {
        let s = generator.generate(&vocab, &mut rng(seed)).unwrap();
        assert_eq!(s.pattern_name, COMPOUND.name);
        let words: Vec<String> = s.text.split(' ').map(str::to_lowercase).collect();
        let joint = words.iter().position(|w| w == "e" || w == "ma").unwrap();
        assert_ne!(words[0], words[joint + 1], "{}", s.text);
    }
}

#[test]
fn fallback_for_single_vowel_noun() {
    let generator = SentenceGenerator::new().with_catalog(PatternCatalog::new(Vec::new()));
    let vocab = vocabulary(&[("isola", "places")]);
    let s = generator.generate(&vocab, &mut rng(0)).unwrap();
    assert_eq!(s.text, "Ecco l'isola.");
    assert_eq!(s.pattern_name, ECCO.name);
}

#[test]
fn numbers_only_falls_back() {
    let vocab = vocabulary(&[("tre", "numbers"), ("sette", "numbers")]);
    for seed in 0..20 {
        let s = generate(&vocab, &mut rng(seed)).unwrap();
        assert_eq!(s.pattern_name, "ecco");
        assert!(s.text.starts_with("Ecco "));
    }
}

#[test]
fn adjective_catalog_with_numbers_terminates_in_fallback() {
    let generator = SentenceGenerator::new()
        .with_catalog(PatternCatalog::new(vec![ESSERE_DESCRIPTIVE, ESSERE_DESCRIPTIVE]));
    let vocab = vocabulary(&[("tre", "numbers"), ("dieci", "numbers")]);
    for seed in 0..20 {
        let s = generator.generate(&vocab, &mut rng(seed)).unwrap();
        assert_eq!(s.pattern_name, ECCO.name);
        assert_eq!(s.words_used.len(), 1);
    }
}

#[test]
fn adjectives_only_falls_back() {
    let vocab = vocabulary(&[("rosso", "adjectives"), ("bella", "adjectives")]);
    let s = generate(&vocab, &mut rng(5)).unwrap();
    assert_eq!(s.pattern_name, "ecco");
}

#[test]
fn empty_vocabulary_is_an_error() {
    let err = generate(&[], &mut rng(0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyVocabulary));
}

#[test]
fn strict_config_ignores_topic_categories() {
    let generator = SentenceGenerator::new().with_config(GeneratorConfig::strict());
    let vocab = vocabulary(&[("pane", "food")]);
    let s = generator.generate(&vocab, &mut rng(2)).unwrap();
    assert_eq!(s.text, "Ecco il pane.");
}

#[test]
fn custom_terminator() {
    let generator = SentenceGenerator::new()
        .with_config(GeneratorConfig::default().with_terminator('!'))
        .with_catalog(PatternCatalog::new(Vec::new()));
    let vocab = vocabulary(&[("libro", "nouns")]);
    assert_eq!(
        generator.generate(&vocab, &mut rng(0)).unwrap().text,
        "Ecco il libro!"
    );
}

#[test]
fn every_standard_pattern_is_reachable() {
    let vocab = vocabulary(POOL);
    let mut seen = std::collections::HashSet::new();
    for seed in 0..300 {
        seen.insert(generate(&vocab, &mut rng(seed)).unwrap().pattern_name);
    }
    for pattern in PatternCatalog::standard().patterns() {
        assert!(seen.contains(pattern.name), "{} never chosen", pattern.name);
    }
}

// =============================================================================
// Properties
// =============================================================================

fn vocabulary_strategy() -> impl Strategy<Value = Vec<VocabularyEntry>> {
    prop::collection::vec(prop::sample::select(POOL.to_vec()), 1..8)
        .prop_map(|pairs| vocabulary(&pairs))
}

proptest! {
    #[test]
    fn words_used_come_from_vocabulary_verbatim(
        vocab in vocabulary_strategy(),
        seed in any::<u64>()
    ) {
        let s = generate(&vocab, &mut rng(seed)).unwrap();
        prop_assert!(!s.words_used.is_empty());
        for word in &s.words_used {
            prop_assert!(vocab.iter().any(|e| &e.source_term == word));
            prop_assert!(s.text.contains(word.as_str()), "{} not in {}", word, s.text);
        }
    }

    #[test]
    fn sentences_are_capitalised_and_terminated(
        vocab in vocabulary_strategy(),
        seed in any::<u64>()
    ) {
        let s = generate(&vocab, &mut rng(seed)).unwrap();
        prop_assert!(s.text.chars().next().is_some_and(char::is_uppercase));
        prop_assert!(s.text.ends_with('.'));
        prop_assert!(!s.text.ends_with(".."));
    }

    #[test]
    fn same_seed_same_sentence(vocab in vocabulary_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(
            generate(&vocab, &mut rng(seed)).unwrap(),
            generate(&vocab, &mut rng(seed)).unwrap()
        );
    }
}
