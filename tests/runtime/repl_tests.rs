//! REPL tests, driven through a scripted editor.

use frase_runtime::Repl;
use frase_runtime::editor::{LineEditor, ReadResult};
use frase_runtime::repl::{INVALID_EXAMPLES, VALID_EXAMPLES, examples_text, help_text};

/// Feeds canned lines, then reports EOF.
#[derive(Default)]
struct ScriptedEditor {
    lines: Vec<String>,
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> frase_runtime::Result<ReadResult> {
        if self.lines.is_empty() {
            Ok(ReadResult::Eof)
        } else {
            Ok(ReadResult::Line(self.lines.remove(0)))
        }
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_words(&mut self, _words: Vec<String>) {}
}

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::default()).without_banner()
}

#[test]
fn sentence_is_analyzed() {
    let out = repl().eval_line("el perro come una pizza").unwrap();

    assert!(out.contains("✗ INVALID SENTENCE - rejected during lexical analysis"));
    assert!(out.contains("unrecognized word: 'pizza'"));
}

#[test]
fn informational_commands() {
    let mut repl = repl();

    assert!(repl.eval_line(":grammar").unwrap().contains("<predicate>  ::= <verb> <complement>"));
    assert!(repl.eval_line(":vocab").unwrap().ends_with("Total words: 70"));
    assert_eq!(repl.eval_line(":help"), Some(help_text()));
    assert_eq!(repl.eval_line(":examples"), Some(examples_text()));
}

#[test]
fn tree_command() {
    let out = repl().eval_line(":tree la niña lee el libro").unwrap();

    assert!(out.contains("STEP 3: DERIVATION TREE"));
    assert!(out.contains("└── NOUN: \"libro\""));
}

#[test]
fn usage_errors_do_not_exit() {
    let mut repl = repl();

    assert_eq!(repl.eval_line(":tree").as_deref(), Some("usage: :tree <sentence>"));
    assert!(repl.eval_line(":nope").unwrap().starts_with("unknown command"));
}

#[test]
fn tracing_can_start_enabled() {
    let mut repl = repl().with_tracing(true);

    assert!(repl.is_tracing());
    let out = repl.eval_line("el perro come un hueso").unwrap();
    assert!(out.contains("=== VALID ==="));
}

#[test]
fn quit_ends_session() {
    assert_eq!(repl().eval_line(":quit"), None);
    assert_eq!(repl().eval_line(":q"), None);
}

#[test]
fn run_consumes_script() {
    let editor = ScriptedEditor {
        lines: vec![":vocab".to_string(), "el perro come un hueso".to_string()],
    };
    let mut repl = Repl::with_editor(editor).without_banner();

    assert!(repl.run().is_ok());
}

#[test]
fn builtin_examples_behave_as_labelled() {
    for sentence in VALID_EXAMPLES {
        assert!(frase_parser::analyze(sentence).is_valid(), "{sentence}");
    }
    for (sentence, reason) in INVALID_EXAMPLES {
        assert!(!frase_parser::analyze(sentence).is_valid(), "{sentence}: {reason}");
    }
}
