//! Derivation tree tests.

use frase_parser::{TokenCategory, analyze};
use frase_runtime::tree::Node;
use frase_runtime::{DerivationTree, explain_steps};

#[test]
fn render_bare_sentence() {
    let tree = DerivationTree::from_analysis(&analyze("el perro come un hueso")).unwrap();

    assert_eq!(
        tree.render_ascii(),
        "\
SENTENCE
├── SUBJECT
│   ├── ARTICLE: \"el\"
│   └── NOUN: \"perro\"
└── PREDICATE
    ├── VERB: \"come\"
    └── COMPLEMENT
        ├── ARTICLE: \"un\"
        └── NOUN: \"hueso\""
    );
}

#[test]
fn adjectives_become_leaves() {
    let tree =
        DerivationTree::from_analysis(&analyze("el grande perro come un hueso rojo")).unwrap();
    let subject = &tree.children[0];
    let complement = &tree.children[1].children[1];

    assert_eq!(subject.children[1].node, Node::Word(TokenCategory::Adjective));
    assert_eq!(subject.children[1].word.as_deref(), Some("grande"));
    assert_eq!(complement.children.len(), 3);
    assert_eq!(complement.children[2].word.as_deref(), Some("rojo"));
}

#[test]
fn rejected_input_has_no_tree() {
    assert!(DerivationTree::from_analysis(&analyze("el perro come una pizza")).is_none());
    assert!(DerivationTree::from_analysis(&analyze("come un libro")).is_none());
}

#[test]
fn steps_for_valid_sentence() {
    let text = explain_steps("el perro grande come un hueso");

    assert!(text.contains("STEP-BY-STEP ANALYSIS: 'el perro grande come un hueso'"));
    assert!(text.contains("  Token 3: [ADJECTIVE] 'grande'"));
    assert!(text.contains("The sentence is syntactically valid"));
    assert!(text.contains("2. <subject> ::= <article> <noun> <adjective>"));
    assert!(text.contains("4. <complement> ::= <article> <noun>"));
    assert!(text.contains("STEP 3: DERIVATION TREE"));
}

#[test]
fn steps_for_invalid_sentence() {
    let text = explain_steps("el perro muy grande come el libro");

    assert!(text.contains("The sentence is NOT valid"));
    assert!(text.contains("Failed phase: lexical"));
    assert!(text.contains("• unrecognized word: 'muy'"));
    assert!(!text.contains("STEP 3"));
}
