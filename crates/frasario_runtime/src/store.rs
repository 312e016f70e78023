//! Vocabulary storage and loading.
//!
//! Reads vocabulary from CSV (`source,target,category,difficulty`) or a JSON
//! array of objects with the same keys. Rows with a blank source term or an
//! out-of-range difficulty are skipped and reported as warnings; malformed
//! files are errors.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use frasario_foundation::{DEFAULT_CATEGORY, Difficulty, Error, Result, VocabularyEntry};
use frasario_grammar::suggest_category;

/// One row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(alias = "source_term", alias = "italian")]
    source: Option<String>,
    #[serde(default, alias = "target_term", alias = "translation")]
    target: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<u8>,
}

/// An in-memory vocabulary list.
#[derive(Clone, Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<VocabularyEntry>,
    warnings: Vec<String>,
}

impl VocabularyStore {
    /// Creates a store from already validated entries.
    #[must_use]
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self {
            entries,
            warnings: Vec::new(),
        }
    }

    /// Loads a vocabulary file, choosing the format from its extension.
    ///
    /// `.json` files are read as JSON; anything else as CSV.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or `Parse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::load_json(path)
        } else {
            Self::load_csv(path)
        }
    }

    /// Loads a CSV vocabulary file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened, or `Parse` if a row is malformed.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let file = fs::File::open(path).map_err(|e| Error::io(&name, e))?;
        let store = Self::from_csv_reader(file, &name)?;
        info!("loaded {} entries from {name}", store.len());
        Ok(store)
    }

    /// Loads a JSON vocabulary file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, or `Parse` if it is not a
    /// JSON array of entries.
    pub fn load_json(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|e| Error::io(&name, e))?;
        let store = Self::from_json_str(&text, &name)?;
        info!("loaded {} entries from {name}", store.len());
        Ok(store)
    }

    /// Reads CSV vocabulary from any reader. `name` is used in messages.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if a row cannot be decoded.
    pub fn from_csv_reader<R: io::Read>(reader: R, name: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut store = Self::default();
        for record in reader.deserialize::<RawEntry>() {
            let raw = record.map_err(|e| {
                let line = e.position().map(csv::Position::line);
                Error::parse(name, line, e)
            })?;
            store.push_raw(raw);
        }
        Ok(store)
    }

    /// Reads JSON vocabulary from a string. `name` is used in messages.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the text is not a JSON array of entries.
    pub fn from_json_str(text: &str, name: &str) -> Result<Self> {
        let rows: Vec<RawEntry> = serde_json::from_str(text)
            .map_err(|e| Error::parse(name, u64::try_from(e.line()).ok(), e))?;

        let mut store = Self::default();
        for raw in rows {
            store.push_raw(raw);
        }
        Ok(store)
    }

    fn push_raw(&mut self, raw: RawEntry) {
        let source = raw.source.unwrap_or_default();
        let difficulty = match raw.difficulty.map(Difficulty::new).transpose() {
            Ok(d) => d.unwrap_or_default(),
            Err(e) => {
                self.warn(format!("skipping {source:?}: {e}"));
                return;
            }
        };
        let category = raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        match VocabularyEntry::new(source, raw.target.unwrap_or_default(), category, difficulty) {
            Ok(entry) => self.entries.push(entry),
            Err(e) => self.warn(format!("skipping row: {e}")),
        }
    }

    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }

    /// Returns all entries.
    #[must_use]
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// Returns warnings collected while loading.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a source term.
    ///
    /// An exact match is preferred; otherwise the first entry equal to
    /// `source_term` ignoring case is returned.
    #[must_use]
    pub fn lookup(&self, source_term: &str) -> Option<&VocabularyEntry> {
        let source_term = source_term.trim();
        self.entries
            .iter()
            .find(|e| e.source_term == source_term)
            .or_else(|| {
                let needle = source_term.to_lowercase();
                self.entries
                    .iter()
                    .find(|e| e.source_term.to_lowercase() == needle)
            })
    }

    /// Returns a store holding only entries matching the given filters.
    ///
    /// Categories compare case-insensitively; `None` matches everything.
    #[must_use]
    pub fn filter(&self, category: Option<&str>, difficulty: Option<Difficulty>) -> Self {
        let entries: Vec<VocabularyEntry> = self
            .entries
            .iter()
            .filter(|e| category.is_none_or(|c| e.in_category(c)))
            .filter(|e| difficulty.is_none_or(|d| e.difficulty == d))
            .cloned()
            .collect();
        debug!(
            "filter category={category:?} difficulty={difficulty:?}: {} of {} entries",
            entries.len(),
            self.entries.len()
        );
        Self::new(entries)
    }

    /// Picks up to `count` distinct entries at random.
    pub fn random_words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&VocabularyEntry> {
        self.entries.choose_multiple(rng, count).collect()
    }

    /// Replaces the default category with a suggested one where possible.
    ///
    /// Returns the number of entries relabelled.
    pub fn auto_categorize(&mut self) -> usize {
        let mut changed = 0;
        for entry in &mut self.entries {
            if !entry.in_category(DEFAULT_CATEGORY) {
                continue;
            }
            let suggested = suggest_category(&entry.source_term);
            if suggested != DEFAULT_CATEGORY {
                debug!("{} -> {suggested}", entry.source_term);
                entry.category = suggested.to_string();
                changed += 1;
            }
        }
        changed
    }
}
