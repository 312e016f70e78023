//! Core vocabulary types and errors for Frasario.
//!
//! This crate provides:
//! - [`VocabularyEntry`] - One source/target word pair with its category and difficulty
//! - [`Difficulty`] - Validated 1–3 difficulty level
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entry;
pub mod error;

pub use entry::{DEFAULT_CATEGORY, Difficulty, VocabularyEntry};
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using Frasario's Error type.
pub type Result<T> = std::result::Result<T, Error>;
