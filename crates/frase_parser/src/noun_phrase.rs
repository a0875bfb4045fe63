//! Noun phrase shapes and the state machine that recognizes them.
//!
//! A noun phrase is an article, exactly one noun, and at most one adjective
//! placed either before or after the noun:
//!
//! ```text
//! ExpectArticle ──ARTICLE──▶ AfterArticle ──ADJECTIVE──▶ ExpectNounAfterLeadingAdjective ──NOUN──▶ accept
//!                                 │
//!                                 └──NOUN──▶ AfterNoun ──[ADJECTIVE]──▶ accept
//! ```
//!
//! The machine is pure: [`NounPhraseState::next`] looks at one token of
//! lookahead and says which category to match next. The parser owns the
//! cursor and the diagnostics.

use std::fmt;

use crate::token::{Token, TokenCategory};

/// One of the three legal noun phrase layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NounPhraseShape {
    /// `el perro`
    Bare,
    /// `el grande perro`
    LeadingAdjective,
    /// `el perro grande`
    TrailingAdjective,
}

impl NounPhraseShape {
    /// The right-hand side of the production this shape derives.
    #[must_use]
    pub const fn production(self) -> &'static str {
        match self {
            Self::Bare => "<article> <noun>",
            Self::LeadingAdjective => "<article> <adjective> <noun>",
            Self::TrailingAdjective => "<article> <noun> <adjective>",
        }
    }
}

impl fmt::Display for NounPhraseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare => write!(f, "bare"),
            Self::LeadingAdjective => write!(f, "leading-adjective"),
            Self::TrailingAdjective => write!(f, "trailing-adjective"),
        }
    }
}

/// States of the noun phrase recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NounPhraseState {
    /// Nothing consumed yet.
    ExpectArticle,
    /// Article consumed; lookahead picks the adjective placement.
    AfterArticle,
    /// Article and adjective consumed; only a noun may follow.
    ExpectNounAfterLeadingAdjective,
    /// Article and noun consumed; an adjective may follow.
    AfterNoun,
    /// All required tokens consumed.
    Complete(NounPhraseShape),
}

/// What the driver must do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Match `category`; on success continue in `then`, on failure the phrase fails.
    Expect {
        /// Category to match at the cursor.
        category: TokenCategory,
        /// State after a successful match.
        then: NounPhraseState,
    },
    /// The phrase is complete.
    Accept(NounPhraseShape),
}

impl NounPhraseState {
    /// Decides the next step from one token of lookahead.
    #[must_use]
    pub const fn next(self, lookahead: TokenCategory) -> Step {
        use TokenCategory::{Adjective, Article, Noun};

        match (self, lookahead) {
            (Self::ExpectArticle, _) => Step::Expect {
                category: Article,
                then: Self::AfterArticle,
            },
            (Self::AfterArticle, Adjective) => Step::Expect {
                category: Adjective,
                then: Self::ExpectNounAfterLeadingAdjective,
            },
            (Self::AfterArticle, _) => Step::Expect {
                category: Noun,
                then: Self::AfterNoun,
            },
            (Self::ExpectNounAfterLeadingAdjective, _) => Step::Expect {
                category: Noun,
                then: Self::Complete(NounPhraseShape::LeadingAdjective),
            },
            (Self::AfterNoun, Adjective) => Step::Expect {
                category: Adjective,
                then: Self::Complete(NounPhraseShape::TrailingAdjective),
            },
            (Self::AfterNoun, _) => Step::Accept(NounPhraseShape::Bare),
            (Self::Complete(shape), _) => Step::Accept(shape),
        }
    }
}

/// A recognized noun phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NounPhrase {
    /// The article
    pub article: String,
    /// The optional adjective
    pub adjective: Option<String>,
    /// The noun
    pub noun: String,
    /// Where the adjective sits
    pub shape: NounPhraseShape,
}

impl NounPhrase {
    /// Recognizes a noun phrase spanning exactly `tokens`.
    ///
    /// Returns `None` if the tokens are not one complete noun phrase. The
    /// end marker, if present, is ignored.
    #[must_use]
    pub fn from_tokens(tokens: &[Token]) -> Option<Self> {
        let words: Vec<&Token> = tokens.iter().filter(|t| !t.is_end()).collect();
        let mut index = 0;
        let mut state = NounPhraseState::ExpectArticle;

        let shape = loop {
            let lookahead = words
                .get(index)
                .map_or(TokenCategory::EndOfInput, |t| t.category);
            match state.next(lookahead) {
                Step::Expect { category, then } if category == lookahead => {
                    index += 1;
                    state = then;
                }
                Step::Expect { .. } => return None,
                Step::Accept(shape) => break shape,
            }
        };

        if index != words.len() {
            return None;
        }

        let text = |category: TokenCategory| {
            words
                .iter()
                .find(|t| t.category == category)
                .map(|t| t.text.clone())
        };

        Some(Self {
            article: text(TokenCategory::Article)?,
            adjective: text(TokenCategory::Adjective),
            noun: text(TokenCategory::Noun)?,
            shape,
        })
    }

    /// The words in surface order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words = vec![self.article.as_str()];
        match (self.shape, &self.adjective) {
            (NounPhraseShape::LeadingAdjective, Some(adj)) => {
                words.push(adj);
                words.push(&self.noun);
            }
            (NounPhraseShape::TrailingAdjective, Some(adj)) => {
                words.push(&self.noun);
                words.push(adj);
            }
            _ => words.push(&self.noun),
        }
        words
    }
}

impl fmt::Display for NounPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words().join(" "))
    }
}
