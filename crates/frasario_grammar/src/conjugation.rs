//! Present-tense conjugation for a closed set of irregular verbs.
//!
//! Forms are read straight from a table; nothing is derived.

use std::fmt;

use frasario_foundation::{Error, Result};

use crate::morphology::Number;

/// Grammatical person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Person {
    /// io, noi
    First,
    /// tu, voi
    Second,
    /// lui, lei, loro
    Third,
}

impl Person {
    /// Builds a person from its ordinal (1, 2 or 3).
    #[must_use]
    pub const fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }
}

/// A subject pronoun and the verb agreement it demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject {
    /// Pronoun as written ("io", "loro")
    pub pronoun: &'static str,
    /// Person the verb agrees with
    pub person: Person,
    /// Number the verb agrees with
    pub number: Number,
}

impl Subject {
    const fn new(pronoun: &'static str, person: Person, number: Number) -> Self {
        Self {
            pronoun,
            person,
            number,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pronoun)
    }
}

/// Every subject pronoun the sentence patterns draw from.
pub const SUBJECTS: [Subject; 7] = [
    Subject::new("io", Person::First, Number::Singular),
    Subject::new("tu", Person::Second, Number::Singular),
    Subject::new("lui", Person::Third, Number::Singular),
    Subject::new("lei", Person::Third, Number::Singular),
    Subject::new("noi", Person::First, Number::Plural),
    Subject::new("voi", Person::Second, Number::Plural),
    Subject::new("loro", Person::Third, Number::Plural),
];

struct Paradigm {
    lemma: &'static str,
    /// io, tu, lui/lei, noi, voi, loro
    forms: [&'static str; 6],
}

static PARADIGMS: &[Paradigm] = &[
    Paradigm {
        lemma: "essere",
        forms: ["sono", "sei", "è", "siamo", "siete", "sono"],
    },
    Paradigm {
        lemma: "avere",
        forms: ["ho", "hai", "ha", "abbiamo", "avete", "hanno"],
    },
    Paradigm {
        lemma: "andare",
        forms: ["vado", "vai", "va", "andiamo", "andate", "vanno"],
    },
    Paradigm {
        lemma: "volere",
        forms: ["voglio", "vuoi", "vuole", "vogliamo", "volete", "vogliono"],
    },
];

const fn slot(person: Person, number: Number) -> usize {
    let base = match number {
        Number::Singular => 0,
        Number::Plural => 3,
    };
    base + match person {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    }
}

/// Conjugates `lemma` in the present indicative.
///
/// # Errors
///
/// Returns `UnknownVerb` if `lemma` is not in the lexicon.
pub fn conjugate(lemma: &str, person: Person, number: Number) -> Result<&'static str> {
    let lemma = lemma.trim();
    PARADIGMS
        .iter()
        .find(|p| p.lemma.eq_ignore_ascii_case(lemma))
        .map(|p| p.forms[slot(person, number)])
        .ok_or_else(|| Error::unknown_verb(lemma))
}

/// Conjugates `lemma` to agree with `subject`.
///
/// # Errors
///
/// Returns `UnknownVerb` if `lemma` is not in the lexicon.
pub fn conjugate_for(lemma: &str, subject: Subject) -> Result<&'static str> {
    conjugate(lemma, subject.person, subject.number)
}

/// Returns true if `lemma` can be conjugated.
#[must_use]
pub fn is_supported(lemma: &str) -> bool {
    PARADIGMS
        .iter()
        .any(|p| p.lemma.eq_ignore_ascii_case(lemma.trim()))
}

/// Iterates over the supported lemmas.
pub fn lemmas() -> impl Iterator<Item = &'static str> {
    PARADIGMS.iter().map(|p| p.lemma)
}
