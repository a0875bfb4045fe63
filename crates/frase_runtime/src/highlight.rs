//! Input highlighting for the REPL.
//!
//! Colours each word by its vocabulary category as the user types.

use std::borrow::Cow;

use frase_parser::{TokenCategory, Vocabulary};

/// Highlighter that colours words by category.
pub struct SentenceHighlighter {
    vocabulary: &'static Vocabulary,
}

impl SentenceHighlighter {
    /// Creates a new highlighter over the global vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::global(),
        }
    }

    /// ANSI colour for a category.
    #[must_use]
    pub const fn color(category: TokenCategory) -> &'static str {
        match category {
            TokenCategory::Article => "\x1b[36m",   // cyan
            TokenCategory::Noun => "\x1b[32m",      // green
            TokenCategory::Adjective => "\x1b[33m", // yellow
            TokenCategory::Verb => "\x1b[1;35m",    // bold magenta
            TokenCategory::Unknown => "\x1b[4;31m", // underlined red
            TokenCategory::EndOfInput => "",
        }
    }

    /// Highlight a line of input.
    ///
    /// Whitespace is preserved exactly. Lines starting with `:` are REPL
    /// commands and are shown in bold.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim().is_empty() {
            return Cow::Borrowed(line);
        }
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("\x1b[1m{line}\x1b[0m"));
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut word = String::new();

        for c in line.chars() {
            if c.is_whitespace() {
                self.flush(&mut word, &mut result);
                result.push(c);
            } else {
                word.push(c);
            }
        }
        self.flush(&mut word, &mut result);

        Cow::Owned(result)
    }

    fn flush(&self, word: &mut String, out: &mut String) {
        if word.is_empty() {
            return;
        }
        let category = self.vocabulary.classify(&word.to_lowercase());
        out.push_str(Self::color(category));
        out.push_str(word);
        out.push_str("\x1b[0m");
        word.clear();
    }
}

impl Default for SentenceHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
