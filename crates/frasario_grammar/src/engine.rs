//! Sentence generation pipeline.
//!
//! Orchestrates the flow from a vocabulary list to one finished sentence:
//!
//! ```text
//! SelectPattern ──▶ SampleEntries ──▶ ResolveFragments ──▶ Assemble ──▶ Done
//!       ▲                 │
//!       └── no match ─────┘   (bounded; then the single-entry fallback)
//! ```

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use frasario_foundation::{Error, ErrorContext, Result, VocabularyEntry};

use crate::config::GeneratorConfig;
use crate::morphology::classify_with_category;
use crate::pattern::{Assembly, PatternCatalog, Role, SentencePattern, adjective_agrees};

/// A generated sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedSentence {
    /// Final text, capitalised and terminated
    pub text: String,
    /// Name of the pattern that produced it
    pub pattern_name: String,
    /// Source terms inserted, in sentence order
    pub words_used: Vec<String>,
}

/// Generates sentences from a pattern catalog.
#[derive(Clone, Debug, Default)]
pub struct SentenceGenerator {
    catalog: PatternCatalog,
    config: GeneratorConfig,
}

impl SentenceGenerator {
    /// Creates a generator with the standard catalog and default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the pattern catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: PatternCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the pattern catalog.
    #[must_use]
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one sentence.
    ///
    /// Patterns are drawn uniformly without replacement until one can be
    /// filled from `vocabulary`, up to the configured attempt bound. If none
    /// can, the catalog's fallback is used with any single entry. Output is
    /// fully determined by `vocabulary` and the state of `rng`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if no entry has a non-empty source term.
    pub fn generate<R: RngCore>(
        &self,
        vocabulary: &[VocabularyEntry],
        rng: &mut R,
    ) -> Result<GeneratedSentence> {
        let rng: &mut dyn RngCore = rng;

        let usable: Vec<&VocabularyEntry> = vocabulary.iter().filter(|e| e.is_usable()).collect();
        if usable.is_empty() {
            return Err(Error::empty_vocabulary());
        }

        let max_attempts = self.config.max_attempts.unwrap_or(self.catalog.len());
        let mut remaining: Vec<&SentencePattern> = self.catalog.patterns().iter().collect();
        let mut attempts = 0;

        while attempts < max_attempts && !remaining.is_empty() {
            attempts += 1;
            let index = rng.gen_range(0..remaining.len());
            let pattern = remaining[index];

            if let Some(entries) = self.sample(pattern, &usable, &mut *rng) {
                debug!("pattern {} filled on attempt {attempts}", pattern.name);
                return self.assemble(pattern, &entries, &mut *rng);
            }

            debug!("pattern {} has no compatible vocabulary", pattern.name);
            remaining.remove(index);
        }

        let fallback = self.catalog.fallback();
        debug!(
            "no pattern filled after {attempts} attempts, using {}",
            fallback.name
        );
        let entries = self
            .sample(fallback, &usable, &mut *rng)
            .ok_or_else(Error::empty_vocabulary)?;
        self.assemble(fallback, &entries, rng)
    }

    /// Samples one entry per role, or `None` if some role has no candidate.
    ///
    /// An entry fills at most one slot per sentence.
    fn sample<'v>(
        &self,
        pattern: &SentencePattern,
        usable: &[&'v VocabularyEntry],
        rng: &mut dyn RngCore,
    ) -> Option<Vec<&'v VocabularyEntry>> {
        let mut chosen: Vec<&'v VocabularyEntry> = Vec::with_capacity(pattern.roles.len());

        for &role in pattern.roles {
            let candidates: Vec<&'v VocabularyEntry> = usable
                .iter()
                .copied()
                .filter(|e| !chosen.iter().any(|c| std::ptr::eq(*c, *e)))
                .filter(|e| self.fits(role, e, &chosen))
                .collect();

            let pick = *candidates.choose(&mut *rng)?;
            trace!(
                "{}: {role:?} <- {} ({} candidates)",
                pattern.name,
                pick.source_term,
                candidates.len()
            );
            chosen.push(pick);
        }

        Some(chosen)
    }

    fn fits(&self, role: Role, entry: &VocabularyEntry, chosen: &[&VocabularyEntry]) -> bool {
        if !self.config.accepts(role, entry) {
            return false;
        }
        match role {
            Role::Adjective {
                agrees_with: Some(slot),
            } => chosen.get(slot).is_none_or(|noun| {
                let profile = classify_with_category(&noun.source_term, Some(&noun.category));
                adjective_agrees(&entry.source_term, profile.gender)
            }),
            _ => true,
        }
    }

    fn assemble(
        &self,
        pattern: &SentencePattern,
        entries: &[&VocabularyEntry],
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedSentence> {
        let mut assembly = Assembly::new(entries, rng);
        (pattern.template)(&mut assembly).map_err(|e| {
            e.with_context(
                ErrorContext::new()
                    .with_source(pattern.name)
                    .with_frame("assemble"),
            )
        })?;
        let (text, words_used) = assembly.finish(self.config.terminator);

        Ok(GeneratedSentence {
            text,
            pattern_name: pattern.name.to_string(),
            words_used,
        })
    }
}

/// Generates one sentence with the standard catalog and default config.
///
/// # Errors
///
/// Returns `EmptyVocabulary` if no entry has a non-empty source term.
pub fn generate<R: RngCore>(
    vocabulary: &[VocabularyEntry],
    rng: &mut R,
) -> Result<GeneratedSentence> {
    SentenceGenerator::default().generate(vocabulary, rng)
}
