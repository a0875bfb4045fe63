//! Input tokenization.
//!
//! Converts a raw sentence into classified tokens.

use crate::token::{Token, TokenCategory};
use crate::vocabulary::Vocabulary;

/// Tokenizes sentences against the global vocabulary.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Lowercases the whole input
    /// - Splits on runs of whitespace
    /// - Classifies every word; unmatched words become [`TokenCategory::Unknown`]
    /// - Appends an end marker whose position is the word count
    ///
    /// Never fails: empty input yields just the end marker.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        Self::tokenize_with(input, Vocabulary::global())
    }

    /// Tokenizes using an explicit vocabulary.
    #[must_use]
    pub fn tokenize_with(input: &str, vocabulary: &Vocabulary) -> Vec<Token> {
        let lowered = input.to_lowercase();
        let mut tokens: Vec<Token> = lowered
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(vocabulary.classify(word), word, position))
            .collect();

        tokens.push(Token::end(tokens.len()));
        tokens
    }

    /// Returns the unknown tokens in input order.
    #[must_use]
    pub fn unknown_words(tokens: &[Token]) -> Vec<&Token> {
        tokens.iter().filter(|t| t.is_unknown()).collect()
    }

    /// Returns the categories of all tokens, end marker included.
    #[must_use]
    pub fn categories(tokens: &[Token]) -> Vec<TokenCategory> {
        tokens.iter().map(|t| t.category).collect()
    }
}
