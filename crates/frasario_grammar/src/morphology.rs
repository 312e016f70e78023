//! Morphological classification.
//!
//! Infers grammatical gender, number, and initial-sound class from the
//! surface form of a word. Orthographic rules only; there is no lexicon, so
//! new vocabulary works without extra data entry.

/// Grammatical gender.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Gender {
    /// Masculine
    #[default]
    Masculine,
    /// Feminine
    Feminine,
}

/// Grammatical number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Number {
    /// Singular
    #[default]
    Singular,
    /// Plural
    Plural,
}

/// How a word begins, as far as article selection is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SoundClass {
    /// Starts with a vowel (or a silent `h` before a vowel): articles elide.
    Vowel,
    /// Starts with s+consonant, z, x, y, gn, pn or ps: takes `lo`/`uno`.
    Cluster,
    /// Any other consonant.
    #[default]
    Consonant,
}

/// Derived morphology of a single term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphProfile {
    /// Gender inferred from the ending
    pub gender: Gender,
    /// Always singular for classified terms
    pub number: Number,
    /// Initial-sound class
    pub sound: SoundClass,
}

impl MorphProfile {
    /// Creates a profile from its parts.
    #[must_use]
    pub const fn new(gender: Gender, number: Number, sound: SoundClass) -> Self {
        Self {
            gender,
            number,
            sound,
        }
    }
}

// "-e" words not matching one of these ("fiore", "pallone", "ospedale") are masculine.
const FEMININE_E_SUFFIXES: &[&str] = &["ione", "ice", "udine", "igine", "ie"];

/// Classifies a term with no category information.
///
/// Total: empty or unrecognisable input yields the default profile
/// (masculine, singular, consonant).
#[must_use]
pub fn classify(term: &str) -> MorphProfile {
    classify_with_category(term, None)
}

/// Classifies a term, using its vocabulary category to settle "-e" endings.
///
/// The initial-sound class comes from the start of the whole term; gender
/// comes from the ending of its first word, so "carta d'identità" is read
/// from "carta".
#[must_use]
pub fn classify_with_category(term: &str, category: Option<&str>) -> MorphProfile {
    let word = term.trim().to_lowercase();
    let Some(head) = word.split_whitespace().next() else {
        return MorphProfile::default();
    };

    MorphProfile {
        gender: infer_gender(head, category),
        number: Number::Singular,
        sound: sound_class(&word),
    }
}

/// Determines the initial-sound class of an already-lowercased word.
#[must_use]
pub fn sound_class(word: &str) -> SoundClass {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return SoundClass::Consonant;
    };
    let second = chars.next();

    if is_vowel(first) {
        return SoundClass::Vowel;
    }

    match (first, second) {
        ('h', Some(c)) if is_vowel(c) => SoundClass::Vowel,
        ('s', Some(c)) if is_consonant(c) => SoundClass::Cluster,
        ('z' | 'x' | 'y', _) | ('g', Some('n')) | ('p', Some('n' | 's')) => SoundClass::Cluster,
        _ => SoundClass::Consonant,
    }
}

fn infer_gender(head: &str, category: Option<&str>) -> Gender {
    match head.chars().last() {
        Some('a' | 'à' | 'ù') => Gender::Feminine,
        Some('e') => e_ending_gender(head, category),
        _ => Gender::Masculine,
    }
}

fn e_ending_gender(head: &str, category: Option<&str>) -> Gender {
    // Nominalised infinitives ("il mangiare") and invariable adjectives.
    if let Some(category) = category {
        if category.eq_ignore_ascii_case("verbs") || category.eq_ignore_ascii_case("adjectives") {
            return Gender::Masculine;
        }
    }

    if FEMININE_E_SUFFIXES.iter().any(|s| head.ends_with(s)) {
        Gender::Feminine
    } else {
        Gender::Masculine
    }
}

/// Returns true for plain and accented vowels.
#[must_use]
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'à' | 'è' | 'é' | 'ì' | 'í' | 'ò' | 'ó' | 'ù' | 'ú'
    )
}

fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}
