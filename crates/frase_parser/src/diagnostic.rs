//! Diagnostics reported by a failed analysis.
//!
//! Diagnostics are values, never raised: every input produces an
//! [`Analysis`](crate::Analysis), and an invalid one carries these.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::TokenCategory;

/// Which stage of analysis rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Phase {
    /// One or more words are outside the vocabulary.
    Lexical,
    /// Every word is known but the sequence does not derive from the grammar.
    Syntactic,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntactic => write!(f, "syntactic"),
        }
    }
}

/// A single human-readable problem with the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A word that belongs to no vocabulary set.
    #[error("unrecognized word: '{word}'")]
    UnrecognizedWord {
        /// The offending word, lowercased.
        word: String,
        /// Index of the word in the input.
        position: usize,
    },

    /// The token under the cursor had the wrong category.
    #[error("at position {position}: expected {expected} but found {found} ('{text}')")]
    UnexpectedToken {
        /// Index of the offending token.
        position: usize,
        /// Category the grammar required.
        expected: TokenCategory,
        /// Category actually present.
        found: TokenCategory,
        /// Text of the offending token.
        text: String,
    },

    /// A complete sentence was followed by more words.
    #[error("unexpected tokens after the end of the sentence: '{text}'")]
    TrailingTokens {
        /// Index of the first unconsumed token.
        position: usize,
        /// Text of the first unconsumed token.
        text: String,
    },
}

impl Diagnostic {
    /// The phase that produces this kind of diagnostic.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self {
            Self::UnrecognizedWord { .. } => Phase::Lexical,
            Self::UnexpectedToken { .. } | Self::TrailingTokens { .. } => Phase::Syntactic,
        }
    }

    /// Index of the word the diagnostic refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedWord { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::TrailingTokens { position, .. } => *position,
        }
    }
}
