//! Derivation trees for accepted sentences.
//!
//! The tree is rebuilt from the flat token sequence of a valid analysis:
//! everything before the first verb is the subject, the verb and everything
//! after it is the predicate. The parser's internal state is not needed.

use std::fmt::{self, Write};

use frase_parser::{Analysis, NounPhrase, Token, TokenCategory, Tokenizer, analyze};

/// Label of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// Root
    Sentence,
    /// Subject noun phrase
    Subject,
    /// Verb and complement
    Predicate,
    /// Object noun phrase
    Complement,
    /// A single word
    Word(TokenCategory),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentence => write!(f, "SENTENCE"),
            Self::Subject => write!(f, "SUBJECT"),
            Self::Predicate => write!(f, "PREDICATE"),
            Self::Complement => write!(f, "COMPLEMENT"),
            Self::Word(category) => write!(f, "{category}"),
        }
    }
}

/// A node of the derivation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationTree {
    /// What this node derives
    pub node: Node,
    /// The word, for leaves
    pub word: Option<String>,
    /// Children in surface order
    pub children: Vec<DerivationTree>,
}

impl DerivationTree {
    fn branch(node: Node, children: Vec<Self>) -> Self {
        Self {
            node,
            word: None,
            children,
        }
    }

    fn leaf(token: &Token) -> Self {
        Self {
            node: Node::Word(token.category),
            word: Some(token.text.clone()),
            children: Vec::new(),
        }
    }

    /// Builds the tree for a valid analysis; `None` when it is invalid.
    #[must_use]
    pub fn from_analysis(analysis: &Analysis) -> Option<Self> {
        if !analysis.is_valid() {
            return None;
        }

        let words: Vec<&Token> = analysis.words().collect();
        let verb = words
            .iter()
            .position(|t| t.category == TokenCategory::Verb)?;

        let subject = Self::branch(
            Node::Subject,
            words[..verb].iter().map(|t| Self::leaf(t)).collect(),
        );

        let mut predicate = vec![Self::leaf(words[verb])];
        let rest = &words[verb + 1..];
        if !rest.is_empty() {
            predicate.push(Self::branch(
                Node::Complement,
                rest.iter().map(|t| Self::leaf(t)).collect(),
            ));
        }

        Some(Self::branch(
            Node::Sentence,
            vec![subject, Self::branch(Node::Predicate, predicate)],
        ))
    }

    /// Renders the tree with box-drawing connectors.
    ///
    /// ```text
    /// SENTENCE
    /// ├── SUBJECT
    /// │   ├── ARTICLE: "el"
    /// │   └── NOUN: "perro"
    /// └── PREDICATE
    ///     ├── VERB: "come"
    ///     └── COMPLEMENT
    ///         ├── ARTICLE: "un"
    ///         └── NOUN: "hueso"
    /// ```
    #[must_use]
    pub fn render_ascii(&self) -> String {
        let mut lines = vec![self.label()];
        self.render_children("", &mut lines);
        lines.join("\n")
    }

    fn label(&self) -> String {
        match &self.word {
            Some(word) => format!("{}: \"{word}\"", self.node),
            None => self.node.to_string(),
        }
    }

    fn render_children(&self, prefix: &str, lines: &mut Vec<String>) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", child.label()));
            let extension = if last { "    " } else { "│   " };
            child.render_children(&format!("{prefix}{extension}"), lines);
        }
    }
}

/// Produces the step-by-step report for one input.
///
/// Step 1 lists the tokens, step 2 gives the verdict and the productions
/// applied, step 3 draws the derivation tree when the input is valid.
#[must_use]
pub fn explain_steps(text: &str) -> String {
    let rule = "=".repeat(70);
    let thin = "-".repeat(70);
    let analysis = analyze(text);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}\nSTEP-BY-STEP ANALYSIS: '{text}'\n{rule}");

    let _ = writeln!(out, "\nSTEP 1: LEXICAL ANALYSIS (tokenization)\n{thin}");
    for (i, token) in analysis.words().enumerate() {
        let _ = writeln!(out, "  Token {}: {token}", i + 1);
    }

    let _ = writeln!(out, "\nSTEP 2: SYNTACTIC ANALYSIS\n{thin}");
    if analysis.is_valid() {
        let _ = writeln!(out, "  The sentence is syntactically valid");
        let _ = writeln!(out, "\n  Rules applied:");
        for (i, line) in applied_rules(&analysis).iter().enumerate() {
            let _ = writeln!(out, "  {}. {line}", i + 1);
        }
    } else {
        let _ = writeln!(out, "  The sentence is NOT valid");
        if let Some(phase) = analysis.phase() {
            let _ = writeln!(out, "  Failed phase: {phase}");
        }
        let _ = writeln!(out, "\n  Diagnostics:");
        for message in analysis.messages() {
            let _ = writeln!(out, "    • {message}");
        }
    }

    if let Some(tree) = DerivationTree::from_analysis(&analysis) {
        let _ = writeln!(out, "\nSTEP 3: DERIVATION TREE\n{thin}");
        let _ = writeln!(out, "{}", tree.render_ascii());
    }

    let _ = write!(out, "\n{rule}");
    out
}

/// The productions used to derive a valid sentence, outermost first.
fn applied_rules(analysis: &Analysis) -> Vec<String> {
    let words: Vec<Token> = analysis.words().cloned().collect();
    let Some(verb) = words.iter().position(|t| t.category == TokenCategory::Verb) else {
        return Vec::new();
    };

    let shape_of = |span: &[Token]| {
        NounPhrase::from_tokens(span).map_or_else(
            || {
                Tokenizer::categories(span)
                    .iter()
                    .map(|c| format!("<{}>", c.name().to_lowercase()))
                    .collect::<Vec<_>>()
                    .join(" ")
            },
            |np| np.shape.production().to_string(),
        )
    };

    vec![
        "<sentence> ::= <subject> <predicate>".to_string(),
        format!("<subject> ::= {}", shape_of(&words[..verb])),
        "<predicate> ::= <verb> <complement>".to_string(),
        format!("<complement> ::= {}", shape_of(&words[verb + 1..])),
    ]
}
