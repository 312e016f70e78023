//! Error types for the Frasario system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Frasario operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty vocabulary error.
    #[must_use]
    pub fn empty_vocabulary() -> Self {
        Self::new(ErrorKind::EmptyVocabulary)
    }

    /// Creates an unknown verb error.
    #[must_use]
    pub fn unknown_verb(lemma: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVerb(lemma.into()))
    }

    /// Creates an invalid entry error.
    #[must_use]
    pub fn invalid_entry(term: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidEntry {
            term: term.into(),
            reason: reason.into(),
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            message: message.to_string(),
        })
    }

    /// Creates a vocabulary file parse error.
    #[must_use]
    pub fn parse(file: impl Into<String>, line: Option<u64>, message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Parse {
            file: file.into(),
            line,
            message: message.to_string(),
        })
    }

    /// Returns true if this is an empty vocabulary error.
    #[must_use]
    pub fn is_empty_vocabulary(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyVocabulary)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No usable vocabulary entry was supplied.
    #[error("insufficient vocabulary to generate a sentence")]
    EmptyVocabulary,

    /// A verb outside the conjugation lexicon was requested.
    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    /// A vocabulary entry failed validation.
    #[error("invalid entry {term:?}: {reason}")]
    InvalidEntry {
        /// The offending source term.
        term: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// Reading a vocabulary file failed.
    #[error("i/o error on {path}: {message}")]
    Io {
        /// The path being accessed.
        path: String,
        /// The underlying error message.
        message: String,
    },

    /// A vocabulary file could not be parsed.
    #[error("parse error in {file}{}: {message}", line_suffix(.line))]
    Parse {
        /// File name or format description.
        file: String,
        /// Line number (1-indexed), when known.
        line: Option<u64>,
        /// Description of the parse error.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or pattern name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Stack of operations in progress.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
