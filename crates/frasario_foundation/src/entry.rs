//! Vocabulary entries.
//!
//! A [`VocabularyEntry`] pairs a source-language term with its translation,
//! a free-text category label, and a difficulty level. Entries are owned by
//! the vocabulary store and only ever read by the grammar engine.

use std::fmt;

use crate::{Error, Result};

/// Category assigned to entries that arrive without one.
pub const DEFAULT_CATEGORY: &str = "other";

/// Difficulty level, always within `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest level.
    pub const EASY: Self = Self(1);
    /// Default level for entries without an explicit difficulty.
    pub const MEDIUM: Self = Self(2);
    /// Hardest level.
    pub const HARD: Self = Self(3);

    /// Creates a difficulty level, rejecting values outside `1..=3`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if `level` is out of range.
    pub fn new(level: u8) -> Result<Self> {
        if (1..=3).contains(&level) {
            Ok(Self(level))
        } else {
            Err(Error::invalid_entry(
                level.to_string(),
                "difficulty must be between 1 and 3",
            ))
        }
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vocabulary pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyEntry {
    /// Term in the language sentences are generated in (e.g. "libro")
    pub source_term: String,
    /// Translation shown to the learner
    pub target_term: String,
    /// Free-text label such as "food", "verbs", "adjectives"
    #[cfg_attr(feature = "serde", serde(default = "default_category"))]
    pub category: String,
    /// Difficulty level
    #[cfg_attr(feature = "serde", serde(default))]
    pub difficulty: Difficulty,
}

#[cfg(feature = "serde")]
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl VocabularyEntry {
    /// Creates a validated entry.
    ///
    /// Surrounding whitespace is trimmed from every field. An empty category
    /// becomes [`DEFAULT_CATEGORY`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` if the source term is empty after trimming.
    pub fn new(
        source_term: impl Into<String>,
        target_term: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let source_term = source_term.into().trim().to_string();
        if source_term.is_empty() {
            return Err(Error::invalid_entry(source_term, "source term is empty"));
        }
        let category = category.into().trim().to_string();
        Ok(Self {
            source_term,
            target_term: target_term.into().trim().to_string(),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category
            },
            difficulty,
        })
    }

    /// Returns true if the entry's category equals `category`, ignoring case.
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category.trim())
    }

    /// Returns true if the source term is non-empty after trimming.
    ///
    /// Entries built through [`VocabularyEntry::new`] are always usable;
    /// entries deserialized or constructed literally may not be.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.source_term.trim().is_empty()
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.source_term, self.target_term)
    }
}
