//! Recognizer for a small Spanish subject-verb-object grammar.
//!
//! This crate decides whether input like "el perro grande come un hueso"
//! is a sentence of a fixed grammar, and explains why when it is not.
//!
//! # Architecture
//!
//! ```text
//! "el perro grande come un hueso"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [ARTICLE el] [NOUN perro] [ADJECTIVE grande] [VERB come] ... [END]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LEXICAL GATE    │  → any UNKNOWN word? reject (phase: lexical)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SENTENCE        │  → <subject> <predicate>, one token of lookahead
//! │ PARSER          │    (phase: syntactic on failure)
//! └─────────────────┘
//!          │
//!          ▼
//!      Analysis::Valid | Analysis::Invalid { phase, diagnostics }
//! ```
//!
//! # Modules
//!
//! - [`vocabulary`] - The four closed word sets
//! - [`token`] - Token and category types
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`noun_phrase`] - Noun phrase shapes and their state machine
//! - [`parser`] - Recursive-descent sentence parser
//! - [`diagnostic`] - Phases and diagnostics
//! - [`analysis`] - The `analyze` entry point
//! - [`trace`] - Optional event tracing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod diagnostic;
pub mod noun_phrase;
pub mod parser;
pub mod token;
pub mod tokenizer;
pub mod trace;
pub mod vocabulary;

// Re-export main types for convenience
pub use analysis::{Analysis, analyze, analyze_traced};
pub use diagnostic::{Diagnostic, Phase};
pub use noun_phrase::{NounPhrase, NounPhraseShape};
pub use parser::{ParseOutcome, SentenceParser};
pub use token::{Token, TokenCategory};
pub use tokenizer::Tokenizer;
pub use trace::{Tracer, TracerConfig};
pub use vocabulary::Vocabulary;
