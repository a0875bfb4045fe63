//! Token types produced by the lexical classifier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Word class of a token.
///
/// The set is closed: the grammar is written against exactly these
/// categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenCategory {
    /// Definite or indefinite article (el, una, ...)
    Article,
    /// Noun (perro, casa, ...)
    Noun,
    /// Adjective (grande, roja, ...)
    Adjective,
    /// Verb (come, leen, ...)
    Verb,
    /// Synthetic end marker
    EndOfInput,
    /// Word outside the vocabulary
    Unknown,
}

impl TokenCategory {
    /// The four categories backed by a vocabulary set, in classification order.
    pub const LEXICAL: [Self; 4] = [Self::Article, Self::Noun, Self::Adjective, Self::Verb];

    /// Upper-case name used in diagnostics and token listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Article => "ARTICLE",
            Self::Noun => "NOUN",
            Self::Adjective => "ADJECTIVE",
            Self::Verb => "VERB",
            Self::EndOfInput => "END",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified word of input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Word class
    pub category: TokenCategory,
    /// Lowercased word (empty for the end marker)
    pub text: String,
    /// Zero-based index of the word in the input
    pub position: usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(category: TokenCategory, text: impl Into<String>, position: usize) -> Self {
        Self {
            category,
            text: text.into(),
            position,
        }
    }

    /// Creates the end marker placed after `word_count` words.
    #[must_use]
    pub fn end(word_count: usize) -> Self {
        Self::new(TokenCategory::EndOfInput, String::new(), word_count)
    }

    /// Returns true for the synthetic end marker.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.category == TokenCategory::EndOfInput
    }

    /// Returns true if the word is outside the vocabulary.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.category == TokenCategory::Unknown
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:<9}] '{}'", self.category.name(), self.text)
    }
}
