//! The interactive shell.
//!
//! Every line that is not a `:command` is analyzed and the result printed.

use std::fmt::Write;

use frase_parser::trace::{HumanFormatter, TraceFormatter};
use frase_parser::{Tracer, analyze_traced};

use crate::display::{format_analysis, grammar_text, vocabulary_text};
use crate::editor::{LineEditor, ReadResult, RustylineEditor, default_words};
use crate::error::Result;
use crate::tree::explain_steps;

/// REPL commands and their descriptions.
pub const COMMANDS: &[(&str, &str)] = &[
    (":help", "Show this help"),
    (":grammar", "Show the grammar"),
    (":vocab", "Show the vocabulary"),
    (":examples", "Run the built-in valid and invalid examples"),
    (":tree", "Step-by-step analysis with derivation tree: :tree <sentence>"),
    (":trace", "Toggle derivation tracing: :trace on|off"),
    (":quit", "Exit"),
];

/// Sentences the grammar accepts.
pub const VALID_EXAMPLES: &[&str] = &[
    "el perro come un hueso",
    "la niña lee el libro",
    "un gato grande ve la casa",
    "el niño pequeño quiere un libro rojo",
    "una computadora nueva tiene el carro",
    "los perros buscan las casas",
];

/// Sentences the grammar rejects, with the reason.
pub const INVALID_EXAMPLES: &[(&str, &str)] = &[
    ("el perro grande", "missing predicate"),
    ("come el libro", "missing subject"),
    ("el grande perro come libro", "complement without article"),
    ("perro el come un libro", "wrong word order"),
    ("el perro muy grande come el libro", "'muy' is not in the vocabulary"),
    ("python es genial", "no word is in the vocabulary"),
    ("el libro azul hermoso lee la niña", "two adjectives in one noun phrase"),
];

/// A parsed REPL command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `:help`
    Help,
    /// `:grammar`
    Grammar,
    /// `:vocab`
    Vocabulary,
    /// `:examples`
    Examples,
    /// `:tree <sentence>`
    Tree(String),
    /// `:trace on|off`
    Trace(bool),
    /// `:quit`
    Quit,
}

impl Command {
    /// Parses a command line.
    ///
    /// Returns `Ok(None)` if the line is not a command.
    ///
    /// # Errors
    ///
    /// Returns a usage message for unknown commands or bad arguments.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if !line.starts_with(':') {
            return Ok(None);
        }

        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(n, a)| (n, a.trim()));

        let command = match name {
            ":help" | ":h" => Self::Help,
            ":grammar" => Self::Grammar,
            ":vocab" => Self::Vocabulary,
            ":examples" => Self::Examples,
            ":tree" if arg.is_empty() => return Err("usage: :tree <sentence>".to_string()),
            ":tree" => Self::Tree(arg.to_string()),
            ":trace" => match arg {
                "on" => Self::Trace(true),
                "off" => Self::Trace(false),
                _ => return Err("usage: :trace on|off".to_string()),
            },
            ":quit" | ":q" | ":exit" => Self::Quit,
            other => return Err(format!("unknown command: {other} (try :help)")),
        };
        Ok(Some(command))
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Records derivations when `:trace on`.
    tracer: Tracer,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E) -> Self {
        editor.set_words(default_words());
        Self {
            editor,
            tracer: Tracer::disabled(),
            show_banner: true,
            prompt: "frase> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Starts with derivation tracing on.
    #[must_use]
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        if enabled {
            self.tracer.enable();
        }
        self
    }

    /// Returns whether derivation tracing is on.
    #[must_use]
    pub fn is_tracing(&self) -> bool {
        self.tracer.is_enabled()
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval_line(&input) {
            Some(output) => {
                println!("{output}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Evaluates one line and returns what to print.
    ///
    /// Returns `None` when the line asks to exit.
    pub fn eval_line(&mut self, line: &str) -> Option<String> {
        match Command::parse(line) {
            Ok(None) => Some(self.analyze_line(line.trim())),
            Ok(Some(command)) => self.execute(command),
            Err(usage) => Some(usage),
        }
    }

    fn execute(&mut self, command: Command) -> Option<String> {
        let output = match command {
            Command::Help => help_text(),
            Command::Grammar => grammar_text(),
            Command::Vocabulary => vocabulary_text(),
            Command::Examples => examples_text(),
            Command::Tree(sentence) => explain_steps(&sentence),
            Command::Trace(on) => {
                if on {
                    self.tracer.enable();
                } else {
                    self.tracer.disable();
                    self.tracer.clear();
                }
                format!("tracing {}", if on { "on" } else { "off" })
            }
            Command::Quit => return None,
        };
        Some(output)
    }

    fn analyze_line(&mut self, line: &str) -> String {
        let analysis = analyze_traced(line, &mut self.tracer);
        let mut out = format_analysis(&analysis);

        if self.tracer.is_enabled() {
            let records = self.tracer.drain();
            let _ = write!(
                out,
                "\n\nTrace:\n{}",
                HumanFormatter::new().format_many(&records)
            );
        }
        out
    }

    fn print_banner() {
        println!(
            "\x1b[1mfrase\x1b[0m {} - Spanish subject-verb-object recognizer",
            env!("CARGO_PKG_VERSION")
        );
        println!("Type a sentence to analyze it, :help for commands, Ctrl+D to exit.\n");
    }
}

/// Lists the REPL commands.
#[must_use]
pub fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    for (name, description) in COMMANDS {
        let _ = writeln!(out, "  {name:<10} {description}");
    }
    out.push_str("Anything else is analyzed as a sentence.");
    out
}

/// Runs the built-in examples and marks each with ✓ or ✗.
#[must_use]
pub fn examples_text() -> String {
    let mut out = String::from("VALID EXAMPLES\n");
    for (i, sentence) in VALID_EXAMPLES.iter().enumerate() {
        let mark = verdict_mark(sentence);
        let _ = writeln!(out, "{}. {mark} {sentence}", i + 1);
    }

    out.push_str("\nINVALID EXAMPLES\n");
    for (i, (sentence, reason)) in INVALID_EXAMPLES.iter().enumerate() {
        let mark = verdict_mark(sentence);
        let _ = writeln!(out, "{}. {mark} {sentence}\n   reason: {reason}", i + 1);
    }
    out.truncate(out.trim_end().len());
    out
}

fn verdict_mark(sentence: &str) -> char {
    if frase_parser::analyze(sentence).is_valid() {
        '✓'
    } else {
        '✗'
    }
}
