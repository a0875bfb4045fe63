//! frase - Spanish subject-verb-object sentence recognizer
//!
//! This crate re-exports all layers of the frase system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: frase_runtime  - REPL, CLI, derivation trees, batch reports
//! Layer 0: frase_parser   - Vocabulary, tokenizer, recursive-descent parser, analyze()
//! ```

pub use frase_parser as parser;
pub use frase_runtime as runtime;

pub use frase_parser::{Analysis, analyze};
