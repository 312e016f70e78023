//! Article resolution.
//!
//! Maps a [`MorphProfile`] to its definite and indefinite article. The
//! mapping is an exhaustive match over number, gender and sound class, so a
//! new sound class cannot be added without revisiting every arm.

use crate::morphology::{Gender, MorphProfile, Number, SoundClass};

/// The two articles agreeing with one profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArticleSet {
    /// "the" form: il, lo, la, l', i, gli, le
    pub definite: &'static str,
    /// "a/some" form: un, uno, una, un', dei, degli, delle
    pub indefinite: &'static str,
}

impl ArticleSet {
    /// Attaches the definite article to `word`.
    #[must_use]
    pub fn with_definite(&self, word: &str) -> String {
        attach(self.definite, word)
    }

    /// Attaches the indefinite article to `word`.
    #[must_use]
    pub fn with_indefinite(&self, word: &str) -> String {
        attach(self.indefinite, word)
    }
}

/// Resolves both articles for a profile.
#[must_use]
pub fn resolve_articles(profile: MorphProfile) -> ArticleSet {
    ArticleSet {
        definite: definite_article(profile),
        indefinite: indefinite_article(profile),
    }
}

fn definite_article(profile: MorphProfile) -> &'static str {
    use Gender::{Feminine, Masculine};
    use SoundClass::{Cluster, Consonant, Vowel};

    match (profile.number, profile.gender, profile.sound) {
        (Number::Singular, _, Vowel) => "l'",
        (Number::Singular, Masculine, Consonant) => "il",
        (Number::Singular, Masculine, Cluster) => "lo",
        (Number::Singular, Feminine, Consonant | Cluster) => "la",
        (Number::Plural, Masculine, Consonant) => "i",
        (Number::Plural, Masculine, Vowel | Cluster) => "gli",
        (Number::Plural, Feminine, _) => "le",
    }
}

fn indefinite_article(profile: MorphProfile) -> &'static str {
    use Gender::{Feminine, Masculine};
    use SoundClass::{Cluster, Consonant, Vowel};

    match (profile.number, profile.gender, profile.sound) {
        (Number::Singular, Masculine, Cluster) => "uno",
        (Number::Singular, Masculine, Vowel | Consonant) => "un",
        (Number::Singular, Feminine, Vowel) => "un'",
        (Number::Singular, Feminine, Consonant | Cluster) => "una",
        // Plural indefinites are the partitive forms.
        (Number::Plural, Masculine, Consonant) => "dei",
        (Number::Plural, Masculine, Vowel | Cluster) => "degli",
        (Number::Plural, Feminine, _) => "delle",
    }
}

/// Joins a function word to the following word.
///
/// Elided forms ending in an apostrophe attach directly (`l'isola`,
/// `nell'albergo`); everything else is separated by a space.
#[must_use]
pub fn attach(function_word: &str, word: &str) -> String {
    if function_word.ends_with('\'') {
        format!("{function_word}{word}")
    } else {
        format!("{function_word} {word}")
    }
}
