//! Text rendering of analyses, the grammar and the vocabulary.

use std::fmt::Write;

use frase_parser::{Analysis, TokenCategory, Vocabulary};

/// Renders one analysis: tokens, verdict and diagnostics.
#[must_use]
pub fn format_analysis(analysis: &Analysis) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}\nInput: '{}'\n{rule}", analysis.source());

    let _ = writeln!(out, "\nTokens:");
    for token in analysis.words() {
        let _ = writeln!(out, "  {token}");
    }

    match analysis {
        Analysis::Valid { .. } => {
            let _ = writeln!(out, "\n✓ VALID SENTENCE - the structure matches the grammar");
        }
        Analysis::Invalid {
            phase, diagnostics, ..
        } => {
            let _ = writeln!(out, "\n✗ INVALID SENTENCE - rejected during {phase} analysis");
            let _ = writeln!(out, "\nDiagnostics:");
            for diagnostic in diagnostics {
                let _ = writeln!(out, "  • {diagnostic}");
            }
        }
    }

    let _ = write!(out, "{rule}");
    out
}

/// The grammar's productions.
#[must_use]
pub fn grammar_text() -> String {
    "\
Productions:

  <sentence>   ::= <subject> <predicate>

  <subject>    ::= <article> <noun>
                 | <article> <noun> <adjective>
                 | <article> <adjective> <noun>

  <predicate>  ::= <verb> <complement>

  <complement> ::= <article> <noun>
                 | <article> <noun> <adjective>
                 | <article> <adjective> <noun>

Basic structure: SUBJECT + VERB + COMPLEMENT

- Subject-verb-object order
- Article required in subject and complement
- At most one adjective per noun phrase
- The adjective may come before or after the noun"
        .to_string()
}

/// The four vocabulary sets, sorted, eight words per line, and the total.
#[must_use]
pub fn vocabulary_text() -> String {
    let vocab = Vocabulary::global();
    let mut out = String::new();

    for category in TokenCategory::LEXICAL {
        let _ = writeln!(out, "{}S:", category.name());
        for chunk in vocab.words(category).chunks(8) {
            let _ = writeln!(out, "   {}", chunk.join(", "));
        }
        out.push('\n');
    }

    let _ = write!(out, "Total words: {}", vocab.len());
    out
}
