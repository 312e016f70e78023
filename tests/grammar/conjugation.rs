//! Integration tests for the conjugator.

use frasario_foundation::ErrorKind;
use frasario_grammar::conjugation::{conjugate_for, is_supported, lemmas};
use frasario_grammar::{Number, Person, SUBJECTS, conjugate};

#[test]
fn essere_paradigm() {
    let forms: Vec<_> = SUBJECTS
        .iter()
        .map(|s| conjugate_for("essere", *s).unwrap())
        .collect();
    assert_eq!(forms, ["sono", "sei", "è", "è", "siamo", "siete", "sono"]);
}

#[test]
fn andare_and_volere() {
    assert_eq!(conjugate("andare", Person::Third, Number::Plural).unwrap(), "vanno");
    assert_eq!(conjugate("volere", Person::Second, Number::Singular).unwrap(), "vuoi");
}

#[test]
fn essere_and_avere_differ_in_third_singular() {
    assert_ne!(
        conjugate("essere", Person::Third, Number::Singular).unwrap(),
        conjugate("avere", Person::Third, Number::Singular).unwrap()
    );
}

#[test]
fn unknown_lemma_is_an_error_not_a_panic() {
    let err = conjugate("parlare", Person::First, Number::Singular).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownVerb(_)));
}

#[test]
fn lexicon() {
    let all: Vec<_> = lemmas().collect();
    assert_eq!(all, ["essere", "avere", "andare", "volere"]);
    assert!(all.iter().all(|l| is_supported(l)));
}
