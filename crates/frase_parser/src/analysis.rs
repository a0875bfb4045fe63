//! The analysis entry point.
//!
//! Tokenizes, gates on unknown words, then parses. This is the only
//! interface collaborators need.

use crate::diagnostic::{Diagnostic, Phase};
use crate::parser::SentenceParser;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::trace::{TraceEvent, Tracer};

/// Result of analyzing one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Analysis {
    /// The input is a sentence of the grammar.
    Valid {
        /// The raw input
        source: String,
        /// Classified tokens, end marker included
        tokens: Vec<Token>,
    },
    /// The input was rejected.
    Invalid {
        /// Stage that rejected the input
        phase: Phase,
        /// The raw input
        source: String,
        /// Classified tokens, end marker included
        tokens: Vec<Token>,
        /// Why it was rejected, in order
        diagnostics: Vec<Diagnostic>,
    },
}

impl Analysis {
    /// Returns true for [`Analysis::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The rejecting phase, or `None` for a valid sentence.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { phase, .. } => Some(*phase),
        }
    }

    /// The raw input.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Valid { source, .. } | Self::Invalid { source, .. } => source,
        }
    }

    /// All tokens, end marker included.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        match self {
            Self::Valid { tokens, .. } | Self::Invalid { tokens, .. } => tokens,
        }
    }

    /// Tokens without the end marker.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens().iter().filter(|t| !t.is_end())
    }

    /// Diagnostics; empty for a valid sentence.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { diagnostics, .. } => diagnostics,
        }
    }

    /// Diagnostics rendered as messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }
}

/// Analyzes one sentence.
///
/// 1. Tokenize.
/// 2. If any word is unknown, reject in the lexical phase with one
///    diagnostic per unknown word; the parser is not run.
/// 3. Otherwise parse and reject in the syntactic phase on failure.
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    analyze_traced(text, &mut Tracer::disabled())
}

/// Analyzes one sentence, recording events in `tracer`.
///
/// Returns exactly what [`analyze`] returns for the same input.
pub fn analyze_traced(text: &str, tracer: &mut Tracer) -> Analysis {
    tracer.record(TraceEvent::AnalysisStart {
        source: text.to_string(),
    });

    let tokens = Tokenizer::tokenize(text);
    tracer.record(TraceEvent::Tokenized {
        count: tokens.len(),
    });

    let unknown: Vec<Diagnostic> = Tokenizer::unknown_words(&tokens)
        .into_iter()
        .map(|t| Diagnostic::UnrecognizedWord {
            word: t.text.clone(),
            position: t.position,
        })
        .collect();
    tracer.record(TraceEvent::LexicalGate {
        unknown: unknown.len(),
    });

    let analysis = if unknown.is_empty() {
        let outcome = SentenceParser::parse_traced(&tokens, tracer);
        if outcome.success {
            Analysis::Valid {
                source: text.to_string(),
                tokens,
            }
        } else {
            Analysis::Invalid {
                phase: Phase::Syntactic,
                source: text.to_string(),
                tokens,
                diagnostics: outcome.diagnostics,
            }
        }
    } else {
        Analysis::Invalid {
            phase: Phase::Lexical,
            source: text.to_string(),
            tokens,
            diagnostics: unknown,
        }
    };

    tracer.record(TraceEvent::AnalysisEnd {
        valid: analysis.is_valid(),
    });
    analysis
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::{Serialize, Serializer};

    use super::Analysis;
    use crate::diagnostic::Phase;
    use crate::token::Token;

    /// Flat record form of an analysis.
    #[derive(Serialize)]
    struct AnalysisRecord<'a> {
        valid: bool,
        phase: Option<Phase>,
        source: &'a str,
        tokens: &'a [Token],
        diagnostics: Vec<String>,
    }

    impl Serialize for Analysis {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            AnalysisRecord {
                valid: self.is_valid(),
                phase: self.phase(),
                source: self.source(),
                tokens: self.tokens(),
                diagnostics: self.messages(),
            }
            .serialize(serializer)
        }
    }
}
