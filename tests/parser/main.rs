//! Integration tests for the frase_parser crate.
//!
//! Tests for the recognition pipeline:
//! - Tokenization
//! - Vocabulary lookup
//! - Grammar acceptance and rejection
//! - The analysis façade
//! - Derivation tracing
//! - Properties over arbitrary input

mod property_tests;
mod trace_tests;
mod vocabulary_tests;
