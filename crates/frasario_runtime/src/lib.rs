//! Vocabulary store, practice REPL, and CLI support for Frasario.
//!
//! This crate provides:
//! - [`VocabularyStore`] - CSV/JSON loading, filtering and random sampling
//! - [`SentenceResponse`] - Generated sentence with its word-by-word gloss
//! - [`PracticeSession`] - Interactive translation drill
//! - Logging setup shared by the `frasario` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod practice;
pub mod response;
pub mod store;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use practice::{PracticeSession, PracticeStats, RoundOutcome};
pub use response::SentenceResponse;
pub use store::VocabularyStore;

/// Initializes `env_logger`.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` when `verbose`
/// and `warn` when not.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
