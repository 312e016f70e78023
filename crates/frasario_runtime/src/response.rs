//! JSON-ready view of a generated sentence.

use serde::{Deserialize, Serialize};

use frasario_foundation::VocabularyEntry;
use frasario_grammar::GeneratedSentence;

/// Direction tag for sentences generated in the source language.
pub const SOURCE_TO_TARGET: &str = "source-target";

/// Placeholder for a used word with no vocabulary entry.
const UNKNOWN: &str = "?";

/// A generated sentence together with its word-by-word gloss.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResponse {
    /// Generated sentence text
    pub source: String,
    /// Target terms of the used words, space separated
    pub translation: String,
    /// `src=tgt` pairs, comma separated
    pub words: String,
    /// Pattern name
    pub pattern: String,
    /// Always [`SOURCE_TO_TARGET`]
    pub direction: String,
}

impl SentenceResponse {
    /// Builds the response, glossing each used word against `vocabulary`.
    ///
    /// Words are matched on their source term, exactly if possible and
    /// otherwise ignoring case. A word with no entry shows as `?` in the
    /// translation and bare in `words`.
    #[must_use]
    pub fn from_sentence(sentence: &GeneratedSentence, vocabulary: &[VocabularyEntry]) -> Self {
        let mut translation = Vec::with_capacity(sentence.words_used.len());
        let mut words = Vec::with_capacity(sentence.words_used.len());

        for used in &sentence.words_used {
            match gloss(used, vocabulary) {
                Some(entry) => {
                    translation.push(entry.target_term.as_str());
                    words.push(format!("{used}={}", entry.target_term));
                }
                None => {
                    translation.push(UNKNOWN);
                    words.push(used.clone());
                }
            }
        }

        Self {
            source: sentence.text.clone(),
            translation: translation.join(" "),
            words: words.join(", "),
            pattern: sentence.pattern_name.clone(),
            direction: SOURCE_TO_TARGET.to_string(),
        }
    }
}

fn gloss<'v>(used: &str, vocabulary: &'v [VocabularyEntry]) -> Option<&'v VocabularyEntry> {
    vocabulary
        .iter()
        .find(|e| e.source_term == used)
        .or_else(|| {
            let needle = used.to_lowercase();
            vocabulary
                .iter()
                .find(|e| e.source_term.to_lowercase() == needle)
        })
}
