//! Frasario - Italian sentence drills from your own vocabulary
//!
//! This crate re-exports all layers of the Frasario system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: frasario_runtime    - Vocabulary store, practice REPL, CLI
//! Layer 1: frasario_grammar    - Morphology, articles, conjugation, patterns
//! Layer 0: frasario_foundation - Core types (VocabularyEntry, Difficulty, Error)
//! ```

pub use frasario_foundation as foundation;
pub use frasario_grammar as grammar;
pub use frasario_runtime as runtime;
