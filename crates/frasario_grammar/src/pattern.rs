//! Sentence patterns.
//!
//! A pattern is data: a name, the vocabulary roles it needs filled, and a
//! template function that assembles the sentence from the sampled entries.
//! Adding a pattern means adding one [`SentencePattern`] value to a
//! [`PatternCatalog`].
//!
//! ```text
//! essere-descriptive    Il libro è rosso.
//! avere-possessive      Tu hai un'amica.
//! preposition-location  Noi siamo nella casa.
//! possessive-location   Lui ha un libro sul tavolo.
//! compound              Io ho un cane e tu hai la casa.
//! time-expression       Loro vogliono mangiare ogni giorno.
//! ecco (fallback)       Ecco l'isola.
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use frasario_foundation::{Error, ErrorKind, Result, VocabularyEntry};

use crate::article::{attach, resolve_articles};
use crate::conjugation::{Person, SUBJECTS, Subject, conjugate};
use crate::contraction::contract;
use crate::morphology::{Gender, MorphProfile, Number, classify_with_category};

/// A vocabulary role a pattern slot must be filled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// A noun
    Noun,
    /// An adjective, optionally agreeing in gender with an earlier noun slot
    Adjective {
        /// Slot index of the noun to agree with
        agrees_with: Option<usize>,
    },
    /// A verb, inserted in its dictionary form
    Verb,
    /// A time word ("domani", "giorno")
    Time,
    /// Any entry at all
    Any,
}

/// Assembles the sentence for one pattern.
pub type Template = fn(&mut Assembly<'_>) -> Result<()>;

/// A sentence pattern definition.
#[derive(Clone, Copy, Debug)]
pub struct SentencePattern {
    /// Pattern name reported in generated sentences
    pub name: &'static str,
    /// Roles to sample, one vocabulary entry per role, in slot order
    pub roles: &'static [Role],
    /// Template function
    pub template: Template,
}

/// "Il libro è rosso."
pub const ESSERE_DESCRIPTIVE: SentencePattern = SentencePattern {
    name: "essere-descriptive",
    roles: &[Role::Noun, Role::Adjective { agrees_with: Some(0) }],
    template: essere_descriptive,
};

/// "Tu hai un'amica."
pub const AVERE_POSSESSIVE: SentencePattern = SentencePattern {
    name: "avere-possessive",
    roles: &[Role::Noun],
    template: avere_possessive,
};

/// "Noi siamo nella casa." / "Io vado al parco."
pub const PREPOSITION_LOCATION: SentencePattern = SentencePattern {
    name: "preposition-location",
    roles: &[Role::Noun],
    template: preposition_location,
};

/// "Lui ha un libro sul tavolo."
pub const POSSESSIVE_LOCATION: SentencePattern = SentencePattern {
    name: "possessive-location",
    roles: &[Role::Noun, Role::Noun],
    template: possessive_location,
};

/// "Io ho un cane e tu hai la casa."
pub const COMPOUND: SentencePattern = SentencePattern {
    name: "compound",
    roles: &[Role::Noun, Role::Noun],
    template: compound,
};

/// "Loro vogliono mangiare domani."
pub const TIME_EXPRESSION: SentencePattern = SentencePattern {
    name: "time-expression",
    roles: &[Role::Verb, Role::Time],
    template: time_expression,
};

/// "Ecco l'isola." Needs a single entry of any category.
pub const ECCO: SentencePattern = SentencePattern {
    name: "ecco",
    roles: &[Role::Any],
    template: ecco,
};

/// Time words that stand alone as adverbs; any other time word gets "ogni".
const TIME_ADVERBS: &[&str] = &[
    "oggi",
    "domani",
    "dopodomani",
    "ieri",
    "stasera",
    "stamattina",
    "stanotte",
    "adesso",
    "ora",
    "presto",
    "tardi",
    "sempre",
    "spesso",
    "subito",
    "poi",
];

/// Verb and preposition pairs for location sentences.
const LOCATIONS: &[(&str, &str)] = &[
    ("essere", "in"),
    ("essere", "su"),
    ("andare", "a"),
    ("andare", "in"),
];

/// The set of patterns a generator chooses from, plus its fallback.
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<SentencePattern>,
    fallback: SentencePattern,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl PatternCatalog {
    /// Creates a catalog from the given patterns, with [`ECCO`] as fallback.
    #[must_use]
    pub fn new(patterns: Vec<SentencePattern>) -> Self {
        Self {
            patterns,
            fallback: ECCO,
        }
    }

    /// The built-in catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            ESSERE_DESCRIPTIVE,
            AVERE_POSSESSIVE,
            PREPOSITION_LOCATION,
            POSSESSIVE_LOCATION,
            COMPOUND,
            TIME_EXPRESSION,
        ])
    }

    /// Adds a pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: SentencePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    /// Returns the selectable patterns.
    #[must_use]
    pub fn patterns(&self) -> &[SentencePattern] {
        &self.patterns
    }

    /// Returns the single-entry fallback pattern.
    #[must_use]
    pub fn fallback(&self) -> &SentencePattern {
        &self.fallback
    }

    /// Looks up a pattern (fallback included) by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SentencePattern> {
        self.patterns
            .iter()
            .chain(std::iter::once(&self.fallback))
            .find(|p| p.name == name)
    }

    /// Number of selectable patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if there are no selectable patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Returns true if an adjective's ending is compatible with `gender`.
///
/// "-o" adjectives only go with masculine nouns and "-a" adjectives only with
/// feminine ones; other endings ("grande", "blu") are invariable.
#[must_use]
pub fn adjective_agrees(adjective: &str, gender: Gender) -> bool {
    match adjective.trim().to_lowercase().chars().last() {
        Some('o') => gender == Gender::Masculine,
        Some('a') => gender == Gender::Feminine,
        _ => true,
    }
}

/// Returns true if `term` is a time adverb used without "ogni".
#[must_use]
pub fn is_time_adverb(term: &str) -> bool {
    let term = term.trim();
    TIME_ADVERBS.iter().any(|a| a.eq_ignore_ascii_case(term))
}

/// In-progress sentence handed to a template.
///
/// Each method appends one fragment. Methods that insert a vocabulary term
/// also record it, verbatim, in the words-used list.
pub struct Assembly<'a> {
    entries: &'a [&'a VocabularyEntry],
    rng: &'a mut dyn RngCore,
    tokens: Vec<String>,
    words_used: Vec<String>,
}

impl<'a> Assembly<'a> {
    /// Creates an assembly over the sampled entries, one per pattern role.
    pub fn new(entries: &'a [&'a VocabularyEntry], rng: &'a mut dyn RngCore) -> Self {
        Self {
            entries,
            rng,
            tokens: Vec::new(),
            words_used: Vec::with_capacity(entries.len()),
        }
    }

    /// Returns the entry sampled for slot `index`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn slot(&self, index: usize) -> Result<&'a VocabularyEntry> {
        self.entries.get(index).copied().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "template reads slot {index} but only {} were sampled",
                self.entries.len()
            )))
        })
    }

    /// Classifies the entry in slot `index`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn profile(&self, index: usize) -> Result<MorphProfile> {
        let entry = self.slot(index)?;
        Ok(classify_with_category(&entry.source_term, Some(&entry.category)))
    }

    /// Picks a random subject pronoun and appends it.
    pub fn subject(&mut self) -> Subject {
        let subject = SUBJECTS[self.rng.gen_range(0..SUBJECTS.len())];
        self.tokens.push(subject.pronoun.to_string());
        subject
    }

    /// Picks a random subject pronoun other than `previous` and appends it.
    pub fn subject_other_than(&mut self, previous: Subject) -> Subject {
        let subject = SUBJECTS
            .iter()
            .filter(|s| s.pronoun != previous.pronoun)
            .copied()
            .collect::<Vec<_>>()
            .choose(&mut *self.rng)
            .copied()
            .unwrap_or(previous);
        self.tokens.push(subject.pronoun.to_string());
        subject
    }

    /// Picks one of `options` at random. Returns "" if `options` is empty.
    pub fn pick(&mut self, options: &[&'static str]) -> &'static str {
        options.choose(&mut *self.rng).copied().unwrap_or_default()
    }

    /// Appends a fixed word.
    pub fn word(&mut self, word: &str) {
        self.tokens.push(word.to_string());
    }

    /// Appends `lemma` conjugated for `subject`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVerb` if the lemma is outside the lexicon.
    pub fn verb(&mut self, lemma: &str, subject: Subject) -> Result<()> {
        self.verb_form(lemma, subject.person, subject.number)
    }

    /// Appends `lemma` conjugated for an explicit person and number.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVerb` if the lemma is outside the lexicon.
    pub fn verb_form(&mut self, lemma: &str, person: Person, number: Number) -> Result<()> {
        let form = conjugate(lemma, person, number)?;
        self.tokens.push(form.to_string());
        Ok(())
    }

    /// Appends the term in slot `index` as-is.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn term(&mut self, index: usize) -> Result<()> {
        let entry = self.slot(index)?;
        self.push_term(entry.source_term.clone(), entry);
        Ok(())
    }

    /// Appends the term in slot `index` with its definite article.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn definite(&mut self, index: usize) -> Result<()> {
        let entry = self.slot(index)?;
        let articles = resolve_articles(self.profile(index)?);
        self.push_term(articles.with_definite(&entry.source_term), entry);
        Ok(())
    }

    /// Appends the term in slot `index` with its indefinite article.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn indefinite(&mut self, index: usize) -> Result<()> {
        let entry = self.slot(index)?;
        let articles = resolve_articles(self.profile(index)?);
        self.push_term(articles.with_indefinite(&entry.source_term), entry);
        Ok(())
    }

    /// Appends `preposition` fused with the definite article of slot `index`,
    /// followed by the term.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the pattern has no such slot.
    pub fn contracted(&mut self, preposition: &str, index: usize) -> Result<()> {
        let entry = self.slot(index)?;
        let articles = resolve_articles(self.profile(index)?);
        let fused = contract(preposition, articles.definite);
        self.push_term(attach(&fused, &entry.source_term), entry);
        Ok(())
    }

    fn push_term(&mut self, fragment: String, entry: &VocabularyEntry) {
        self.tokens.push(fragment);
        self.words_used.push(entry.source_term.clone());
    }

    /// Joins the fragments into final text.
    ///
    /// The first letter is capitalised and exactly one terminator ends the
    /// sentence; text already ending in `.`, `!` or `?` gets none added.
    #[must_use]
    pub fn finish(self, terminator: char) -> (String, Vec<String>) {
        let joined = self.tokens.join(" ");
        let mut text = capitalize_first(joined.trim_end());
        if !text.ends_with(['.', '!', '?', terminator]) {
            text.push(terminator);
        }
        (text, self.words_used)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn essere_descriptive(s: &mut Assembly<'_>) -> Result<()> {
    s.definite(0)?;
    s.verb_form("essere", Person::Third, Number::Singular)?;
    s.term(1)
}

fn avere_possessive(s: &mut Assembly<'_>) -> Result<()> {
    let subject = s.subject();
    s.verb("avere", subject)?;
    s.indefinite(0)
}

fn preposition_location(s: &mut Assembly<'_>) -> Result<()> {
    let subject = s.subject();
    let (lemma, preposition) = LOCATIONS
        .choose(&mut *s.rng)
        .copied()
        .unwrap_or(("essere", "in"));
    s.verb(lemma, subject)?;
    s.contracted(preposition, 0)
}

fn possessive_location(s: &mut Assembly<'_>) -> Result<()> {
    let subject = s.subject();
    s.verb("avere", subject)?;
    s.indefinite(0)?;
    let preposition = s.pick(&["in", "su"]);
    s.contracted(preposition, 1)
}

fn compound(s: &mut Assembly<'_>) -> Result<()> {
    let first = s.subject();
    s.verb("avere", first)?;
    s.indefinite(0)?;
    let conjunction = s.pick(&["e", "ma"]);
    s.word(conjunction);
    let second = s.subject_other_than(first);
    s.verb("avere", second)?;
    s.definite(1)
}

fn time_expression(s: &mut Assembly<'_>) -> Result<()> {
    let subject = s.subject();
    s.verb("volere", subject)?;
    s.term(0)?;
    if !is_time_adverb(&s.slot(1)?.source_term) {
        s.word("ogni");
    }
    s.term(1)
}

fn ecco(s: &mut Assembly<'_>) -> Result<()> {
    s.word("ecco");
    s.definite(0)
}
