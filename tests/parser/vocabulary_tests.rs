//! Vocabulary tests.
//!
//! Tests for the closed word classes and their lookup.

use frase_parser::{TokenCategory, Vocabulary};

#[test]
fn classify_each_category() {
    let vocab = Vocabulary::global();

    assert_eq!(vocab.classify("la"), TokenCategory::Article);
    assert_eq!(vocab.classify("computadoras"), TokenCategory::Noun);
    assert_eq!(vocab.classify("rápidas"), TokenCategory::Adjective);
    assert_eq!(vocab.classify("manejan"), TokenCategory::Verb);
    assert_eq!(vocab.classify("pizza"), TokenCategory::Unknown);
}

#[test]
fn classify_is_exact_match() {
    let vocab = Vocabulary::global();

    // Lookup expects lowercase input and does no stemming
    assert_eq!(vocab.classify("Perro"), TokenCategory::Unknown);
    assert_eq!(vocab.classify("perrito"), TokenCategory::Unknown);
    assert_eq!(vocab.classify("arbol"), TokenCategory::Unknown);
}

#[test]
fn builtin_sizes() {
    let vocab = Vocabulary::global();

    assert_eq!(vocab.words(TokenCategory::Article).len(), 6);
    assert_eq!(vocab.words(TokenCategory::Noun).len(), 20);
    assert_eq!(vocab.words(TokenCategory::Adjective).len(), 28);
    assert_eq!(vocab.words(TokenCategory::Verb).len(), 16);
    assert_eq!(vocab.len(), 70);
    assert!(!vocab.is_empty());
}

#[test]
fn sets_are_disjoint() {
    assert!(Vocabulary::global().overlaps().is_empty());
}

#[test]
fn words_are_sorted() {
    let articles = Vocabulary::global().words(TokenCategory::Article);

    assert_eq!(articles, vec!["el", "la", "las", "los", "un", "una"]);
}

#[test]
fn entries_cover_every_word_once() {
    let vocab = Vocabulary::global();

    assert_eq!(vocab.entries().count(), vocab.len());
    for (word, category) in vocab.entries() {
        assert_eq!(vocab.classify(word), category);
        assert!(vocab.contains(category, word));
    }
}

#[test]
fn global_is_shared() {
    assert!(std::ptr::eq(Vocabulary::global(), Vocabulary::global()));
}
