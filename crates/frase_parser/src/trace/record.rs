//! Trace event and record types.

use std::fmt;

use crate::token::TokenCategory;

/// A nonterminal of the grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Production {
    /// `<sentence> ::= <subject> <predicate>`
    Sentence,
    /// `<subject>`, a noun phrase
    Subject,
    /// `<predicate> ::= <verb> <complement>`
    Predicate,
    /// `<complement>`, a noun phrase
    Complement,
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentence => write!(f, "<sentence>"),
            Self::Subject => write!(f, "<subject>"),
            Self::Predicate => write!(f, "<predicate>"),
            Self::Complement => write!(f, "<complement>"),
        }
    }
}

/// Events recorded while analyzing one sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// Analysis of a new input began.
    AnalysisStart {
        /// The raw input.
        source: String,
    },

    /// Tokenization finished.
    Tokenized {
        /// Number of tokens, end marker included.
        count: usize,
    },

    /// The unknown-word gate ran.
    LexicalGate {
        /// Number of unknown words found.
        unknown: usize,
    },

    /// A production is being expanded.
    ProductionEnter {
        /// The production.
        production: Production,
    },

    /// A production finished.
    ProductionExit {
        /// The production.
        production: Production,
        /// Whether it derived.
        success: bool,
    },

    /// The match primitive consumed a token.
    Matched {
        /// Category matched.
        category: TokenCategory,
        /// Position of the consumed token.
        position: usize,
    },

    /// The match primitive failed.
    Mismatch {
        /// Category required.
        expected: TokenCategory,
        /// Category found.
        found: TokenCategory,
        /// Position of the offending token.
        position: usize,
    },

    /// A complete sentence was followed by more tokens.
    TrailingTokens {
        /// Position of the first unconsumed token.
        position: usize,
    },

    /// Analysis finished.
    AnalysisEnd {
        /// The verdict.
        valid: bool,
    },
}

impl TraceEvent {
    /// Short name of the event type, used for filtering.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AnalysisStart { .. } => "analysis-start",
            Self::Tokenized { .. } => "tokenized",
            Self::LexicalGate { .. } => "lexical-gate",
            Self::ProductionEnter { .. } => "production-enter",
            Self::ProductionExit { .. } => "production-exit",
            Self::Matched { .. } => "matched",
            Self::Mismatch { .. } => "mismatch",
            Self::TrailingTokens { .. } => "trailing-tokens",
            Self::AnalysisEnd { .. } => "analysis-end",
        }
    }
}

/// A recorded event with bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Sequence number, unique per tracer.
    pub id: u64,
    /// Nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// Nesting depth of productions when the event was recorded.
    pub depth: usize,
    /// The event.
    pub event: TraceEvent,
}
