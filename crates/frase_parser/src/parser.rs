//! Recursive-descent sentence parser.
//!
//! Grammar:
//!
//! ```text
//! <sentence>   ::= <subject> <predicate>
//! <subject>    ::= <article> <noun>
//!                | <article> <adjective> <noun>
//!                | <article> <noun> <adjective>
//! <predicate>  ::= <verb> <complement>
//! <complement> ::= <article> <noun>
//!                | <article> <adjective> <noun>
//!                | <article> <noun> <adjective>
//! ```
//!
//! Every choice is made on one token of lookahead, so there is no
//! backtracking: the first failed match ends the parse and its diagnostic
//! marks where the input left the grammar.

use crate::diagnostic::Diagnostic;
use crate::noun_phrase::{NounPhraseShape, NounPhraseState, Step};
use crate::token::{Token, TokenCategory};
use crate::trace::{Production, TraceEvent, Tracer};

/// Result of parsing a token sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Whether the tokens derive `<sentence>` and nothing is left over.
    pub success: bool,
    /// Diagnostics along the attempted derivation, in order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Cursor state for one parse.
///
/// Built fresh by [`SentenceParser::parse`] for every call; it is never
/// reused across inputs.
pub struct SentenceParser<'t, 'r> {
    tokens: &'t [Token],
    position: usize,
    diagnostics: Vec<Diagnostic>,
    tracer: &'r mut Tracer,
}

impl<'t, 'r> SentenceParser<'t, 'r> {
    fn new(tokens: &'t [Token], tracer: &'r mut Tracer) -> Self {
        Self {
            tokens,
            position: 0,
            diagnostics: Vec::new(),
            tracer,
        }
    }

    /// Parses a token sequence as one sentence.
    #[must_use]
    pub fn parse(tokens: &[Token]) -> ParseOutcome {
        Self::parse_traced(tokens, &mut Tracer::disabled())
    }

    /// Parses a token sequence, recording events in `tracer`.
    pub fn parse_traced(tokens: &[Token], tracer: &mut Tracer) -> ParseOutcome {
        let mut parser = SentenceParser::new(tokens, tracer);

        let mut success = parser.sentence();

        if success && parser.current_category() != TokenCategory::EndOfInput {
            let position = parser.current_position();
            parser
                .tracer
                .record(TraceEvent::TrailingTokens { position });
            parser.diagnostics.push(Diagnostic::TrailingTokens {
                position,
                text: parser.current_text().to_string(),
            });
            success = false;
        }

        ParseOutcome {
            success,
            diagnostics: parser.diagnostics,
        }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// Past the end of the slice the cursor reads as end of input.
    fn current_category(&self) -> TokenCategory {
        self.current()
            .map_or(TokenCategory::EndOfInput, |t| t.category)
    }

    fn current_text(&self) -> &'t str {
        self.current().map_or("", |t| t.text.as_str())
    }

    fn current_position(&self) -> usize {
        self.current().map_or(self.position, |t| t.position)
    }

    fn advance(&mut self) {
        if self.current_category() != TokenCategory::EndOfInput {
            self.position += 1;
        }
    }

    /// The match primitive.
    ///
    /// On a match the cursor advances and no diagnostic is produced. On a
    /// mismatch the cursor stays put and a diagnostic naming the expected
    /// and found categories is recorded. Nothing else touches the cursor or
    /// the diagnostics.
    fn expect(&mut self, expected: TokenCategory) -> bool {
        let found = self.current_category();
        let position = self.current_position();

        if found == expected {
            self.tracer.record(TraceEvent::Matched {
                category: found,
                position,
            });
            self.advance();
            return true;
        }

        self.tracer.record(TraceEvent::Mismatch {
            expected,
            found,
            position,
        });
        self.diagnostics.push(Diagnostic::UnexpectedToken {
            position,
            expected,
            found,
            text: self.current_text().to_string(),
        });
        false
    }

    // =========================================================================
    // Productions
    // =========================================================================

    fn production<T>(
        &mut self,
        production: Production,
        body: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        self.tracer
            .record(TraceEvent::ProductionEnter { production });
        let result = body(self);
        self.tracer.record(TraceEvent::ProductionExit {
            production,
            success: result.is_some(),
        });
        result
    }

    /// `<sentence> ::= <subject> <predicate>`
    fn sentence(&mut self) -> bool {
        self.production(Production::Sentence, |p| {
            p.subject()?;
            p.predicate()
        })
        .is_some()
    }

    fn subject(&mut self) -> Option<NounPhraseShape> {
        self.production(Production::Subject, Self::noun_phrase)
    }

    /// `<predicate> ::= <verb> <complement>`
    fn predicate(&mut self) -> Option<()> {
        self.production(Production::Predicate, |p| {
            if !p.expect(TokenCategory::Verb) {
                return None;
            }
            p.complement().map(|_| ())
        })
    }

    fn complement(&mut self) -> Option<NounPhraseShape> {
        self.production(Production::Complement, Self::noun_phrase)
    }

    /// Drives the noun phrase state machine against the cursor.
    fn noun_phrase(&mut self) -> Option<NounPhraseShape> {
        let mut state = NounPhraseState::ExpectArticle;
        loop {
            match state.next(self.current_category()) {
                Step::Expect { category, then } => {
                    if !self.expect(category) {
                        return None;
                    }
                    state = then;
                }
                Step::Accept(shape) => return Some(shape),
            }
        }
    }
}
