//! Italian sentence generation for vocabulary drills.
//!
//! This crate turns a list of vocabulary entries into short, grammatical
//! Italian sentences that use those entries verbatim.
//!
//! # Architecture
//!
//! ```text
//! [libro, rosso, casa, ...]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN         │  → essere-descriptive: [Noun, Adjective(agrees 0)]
//! │ SELECTION       │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SAMPLING        │  → libro (nouns), rosso (adjectives)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MORPHOLOGY      │  → libro: masculine, singular, consonant
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ARTICLES /      │  → il libro, nel libro, è
//! │ CONJUGATION     │
//! └─────────────────┘
//!          │
//!          ▼
//!   "Il libro è rosso."
//! ```
//!
//! # Modules
//!
//! - [`morphology`] - Gender, number and initial-sound classification
//! - [`article`] - Definite and indefinite article selection
//! - [`contraction`] - Preposition + article fusion
//! - [`conjugation`] - Present tense of essere, avere, andare, volere
//! - [`pattern`] - Sentence pattern definitions and the assembly buffer
//! - [`engine`] - Pattern selection, sampling and bounded retry
//! - [`config`] - Category-to-role mapping and retry bound
//! - [`categorize`] - Category suggestions for uncategorised entries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod article;
pub mod categorize;
pub mod config;
pub mod conjugation;
pub mod contraction;
pub mod engine;
pub mod morphology;
pub mod pattern;

// Re-export main types for convenience
pub use article::{ArticleSet, attach, resolve_articles};
pub use categorize::suggest_category;
pub use config::GeneratorConfig;
pub use conjugation::{Person, SUBJECTS, Subject, conjugate};
pub use contraction::contract;
pub use engine::{GeneratedSentence, SentenceGenerator, generate};
pub use morphology::{Gender, MorphProfile, Number, SoundClass, classify, classify_with_category};
pub use pattern::{PatternCatalog, Role, SentencePattern};
