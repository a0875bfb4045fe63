//! Property-based tests.
//!
//! Invariants that hold for every input, not just the hand-picked ones.

use frase_parser::{
    Analysis, Phase, SentenceParser, Token, TokenCategory, Tokenizer, Tracer, Vocabulary, analyze,
    analyze_traced,
};
use proptest::prelude::*;

fn word(category: TokenCategory) -> impl Strategy<Value = &'static str> {
    prop::sample::select(Vocabulary::global().words(category))
}

/// Any word of the vocabulary.
fn known_word() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        word(TokenCategory::Article),
        word(TokenCategory::Noun),
        word(TokenCategory::Adjective),
        word(TokenCategory::Verb),
    ]
}

/// A noun phrase in one of its three shapes.
fn noun_phrase() -> impl Strategy<Value = String> {
    (
        word(TokenCategory::Article),
        word(TokenCategory::Noun),
        prop::option::of(word(TokenCategory::Adjective)),
        any::<bool>(),
    )
        .prop_map(|(article, noun, adjective, leading)| match adjective {
            None => format!("{article} {noun}"),
            Some(adjective) if leading => format!("{article} {adjective} {noun}"),
            Some(adjective) => format!("{article} {noun} {adjective}"),
        })
}

/// A sentence the grammar accepts.
fn sentence() -> impl Strategy<Value = String> {
    (noun_phrase(), word(TokenCategory::Verb), noun_phrase())
        .prop_map(|(subject, verb, complement)| format!("{subject} {verb} {complement}"))
}

/// Arbitrary sequences of vocabulary words.
fn word_salad() -> impl Strategy<Value = String> {
    prop::collection::vec(known_word(), 0..10).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn generated_sentences_are_valid(text in sentence()) {
        let analysis = analyze(&text);
        prop_assert!(analysis.is_valid(), "{:?}: {:?}", text, analysis.messages());
    }

    #[test]
    fn analysis_is_deterministic(text in "\\PC{0,40}") {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn tracing_does_not_change_result(text in word_salad()) {
        let mut tracer = Tracer::buffered();
        prop_assert_eq!(analyze_traced(&text, &mut tracer), analyze(&text));
    }

    #[test]
    fn case_does_not_matter(text in word_salad()) {
        let upper = analyze(&text.to_uppercase());
        let lower = analyze(&text);
        prop_assert_eq!(upper.is_valid(), lower.is_valid());
        prop_assert_eq!(upper.tokens(), lower.tokens());
    }

    #[test]
    fn unknown_word_means_lexical_rejection(
        text in word_salad(),
        index in any::<prop::sample::Index>(),
    ) {
        let mut words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();
        let at = index.index(words.len() + 1);
        words.insert(at, "zzz");

        let analysis = analyze(&words.join(" "));
        prop_assert_eq!(analysis.phase(), Some(Phase::Lexical));
        prop_assert!(analysis.diagnostics().iter().all(|d| d.phase() == Phase::Lexical));
    }

    #[test]
    fn known_words_never_fail_lexically(text in word_salad()) {
        prop_assert_ne!(analyze(&text).phase(), Some(Phase::Lexical));
    }

    #[test]
    fn syntactic_rejection_has_diagnostics(text in word_salad()) {
        if let Analysis::Invalid { diagnostics, .. } = analyze(&text) {
            prop_assert!(!diagnostics.is_empty());
        }
    }

    #[test]
    fn positions_are_word_indices(text in "[a-z ]{0,40}") {
        let tokens = Tokenizer::tokenize(&text);
        let words = text.split_whitespace().count();

        prop_assert_eq!(tokens.len(), words + 1);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.position, i);
        }
        prop_assert!(tokens.last().is_some_and(Token::is_end));
    }

    #[test]
    fn appended_word_reports_at_most_one_problem(text in sentence(), extra in known_word()) {
        let tokens = Tokenizer::tokenize(&format!("{text} {extra}"));
        let outcome = SentenceParser::parse(&tokens);

        // A trailing adjective can extend the complement instead
        if !outcome.success {
            prop_assert_eq!(outcome.diagnostics.len(), 1);
        }
    }
}

#[test]
fn vocabulary_is_disjoint() {
    let vocab = Vocabulary::global();
    for (word, category) in vocab.entries() {
        let hits = TokenCategory::LEXICAL
            .into_iter()
            .filter(|&c| vocab.contains(c, word))
            .count();
        assert_eq!(hits, 1, "{word} is in more than {category}");
    }
}

#[test]
fn shared_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Vocabulary>();
    assert_send_sync::<Analysis>();
    assert_send_sync::<Token>();
}

#[test]
fn concurrent_analyses_agree() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| analyze("el perro grande come un hueso pequeño")))
        .collect();

    for handle in handles {
        let analysis = handle.join().unwrap();
        assert!(analysis.is_valid());
    }
}
