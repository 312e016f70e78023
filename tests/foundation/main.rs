//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: VocabularyEntry, Difficulty and Error.

mod entries;
mod errors;
