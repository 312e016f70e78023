//! Configuration for the sentence generator.

use frasario_foundation::VocabularyEntry;

use crate::pattern::Role;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

/// Configuration for [`SentenceGenerator`](crate::SentenceGenerator).
///
/// Controls which vocabulary categories fill which role, and how many
/// patterns are tried before falling back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum patterns tried before the fallback; `None` means the catalog size.
    pub max_attempts: Option<usize>,

    /// Categories whose entries can fill a noun slot.
    pub noun_categories: Vec<String>,

    /// Categories whose entries can fill an adjective slot.
    pub adjective_categories: Vec<String>,

    /// Categories whose entries can fill a verb slot.
    pub verb_categories: Vec<String>,

    /// Categories whose entries can fill a time-expression slot.
    pub time_categories: Vec<String>,

    /// Sentence terminator.
    pub terminator: char,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: None,
            noun_categories: labels(&[
                "nouns", "food", "places", "family", "body", "clothing", "travel", "weather",
                "animals", "other",
            ]),
            adjective_categories: labels(&["adjectives"]),
            verb_categories: labels(&["verbs"]),
            time_categories: labels(&["time"]),
            terminator: '.',
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration that only accepts the literal role labels.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            noun_categories: labels(&["nouns"]),
            ..Self::default()
        }
    }

    /// Builder method to set the retry bound.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Builder method to set the noun categories.
    #[must_use]
    pub fn with_noun_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noun_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the adjective categories.
    #[must_use]
    pub fn with_adjective_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adjective_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the sentence terminator.
    #[must_use]
    pub fn with_terminator(mut self, terminator: char) -> Self {
        self.terminator = terminator;
        self
    }

    /// Returns the categories accepted for `role`, or `None` if any entry fits.
    #[must_use]
    pub fn categories_for(&self, role: Role) -> Option<&[String]> {
        match role {
            Role::Noun => Some(&self.noun_categories),
            Role::Adjective { .. } => Some(&self.adjective_categories),
            Role::Verb => Some(&self.verb_categories),
            Role::Time => Some(&self.time_categories),
            Role::Any => None,
        }
    }

    /// Returns true if `entry`'s category is accepted for `role`.
    #[must_use]
    pub fn accepts(&self, role: Role, entry: &VocabularyEntry) -> bool {
        self.categories_for(role)
            .is_none_or(|cats| cats.iter().any(|c| entry.in_category(c)))
    }
}
