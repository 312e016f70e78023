//! Integration tests for morphological classification.

use frasario_grammar::{Gender, Number, SoundClass, classify, classify_with_category};

#[test]
fn classify_common_nouns() {
    let cases = [
        ("libro", Gender::Masculine, SoundClass::Consonant),
        ("casa", Gender::Feminine, SoundClass::Consonant),
        ("albero", Gender::Masculine, SoundClass::Vowel),
        ("isola", Gender::Feminine, SoundClass::Vowel),
        ("zaino", Gender::Masculine, SoundClass::Cluster),
        ("studentessa", Gender::Feminine, SoundClass::Cluster),
        ("gnocco", Gender::Masculine, SoundClass::Cluster),
        ("psicologa", Gender::Feminine, SoundClass::Cluster),
    ];
    for (word, gender, sound) in cases {
        let p = classify(word);
        assert_eq!(p.gender, gender, "{word}");
        assert_eq!(p.sound, sound, "{word}");
        assert_eq!(p.number, Number::Singular, "{word}");
    }
}

#[test]
fn classify_ignores_case_and_padding() {
    assert_eq!(classify("  Isola "), classify("isola"));
    assert_eq!(classify("ZAINO"), classify("zaino"));
}

#[test]
fn accented_feminine_endings() {
    assert_eq!(classify("città").gender, Gender::Feminine);
    assert_eq!(classify("virtù").gender, Gender::Feminine);
}

#[test]
fn e_endings_by_category() {
    assert_eq!(classify("lezione").gender, Gender::Feminine);
    assert_eq!(
        classify_with_category("lezione", Some("verbs")).gender,
        Gender::Masculine
    );
    assert_eq!(classify("cane").gender, Gender::Masculine);
}

#[test]
fn unrecognisable_input_is_total() {
    for w in ["", " ", "123", "!!!", "ß"] {
        let p = classify(w);
        assert_eq!(p.number, Number::Singular);
    }
}
