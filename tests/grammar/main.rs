//! Integration tests for Layer 1: Grammar
//!
//! Tests for morphology, articles, contractions, conjugation and
//! end-to-end sentence generation.

mod articles;
mod conjugation;
mod contractions;
mod generation;
mod morphology;
