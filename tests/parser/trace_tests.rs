//! Trace tests.
//!
//! Tests for recording and formatting derivation events.

use frase_parser::trace::{HumanFormatter, Production, TraceEvent, TraceFormatter};
use frase_parser::{TokenCategory, Tracer, TracerConfig, analyze, analyze_traced};

#[test]
fn disabled_tracer_records_nothing() {
    let mut tracer = Tracer::disabled();
    analyze_traced("el perro come un hueso", &mut tracer);

    assert!(tracer.is_empty());
}

#[test]
fn traced_result_matches_untraced() {
    for text in ["el perro come un hueso", "el perro grande", "una pizza", ""] {
        let mut tracer = Tracer::buffered();
        assert_eq!(analyze_traced(text, &mut tracer), analyze(text));
    }
}

#[test]
fn events_follow_the_pipeline() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro come un hueso", &mut tracer);
    let events: Vec<&TraceEvent> = tracer.events().collect();

    assert!(matches!(events[0], TraceEvent::AnalysisStart { .. }));
    assert_eq!(events[1], &TraceEvent::Tokenized { count: 6 });
    assert_eq!(events[2], &TraceEvent::LexicalGate { unknown: 0 });
    assert_eq!(
        events[3],
        &TraceEvent::ProductionEnter {
            production: Production::Sentence
        }
    );
    assert_eq!(
        events.last().copied(),
        Some(&TraceEvent::AnalysisEnd { valid: true })
    );
}

#[test]
fn productions_are_balanced() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el grande perro come un hueso rojo", &mut tracer);

    let enters = tracer
        .events()
        .filter(|e| matches!(e, TraceEvent::ProductionEnter { .. }))
        .count();
    let exits = tracer
        .events()
        .filter(|e| matches!(e, TraceEvent::ProductionExit { .. }))
        .count();
    assert_eq!(enters, 4);
    assert_eq!(enters, exits);
}

#[test]
fn mismatch_is_recorded_where_parse_stops() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro grande", &mut tracer);

    let mismatches: Vec<&TraceEvent> = tracer
        .events()
        .filter(|e| matches!(e, TraceEvent::Mismatch { .. }))
        .collect();
    assert_eq!(
        mismatches,
        vec![&TraceEvent::Mismatch {
            expected: TokenCategory::Verb,
            found: TokenCategory::EndOfInput,
            position: 3,
        }]
    );
}

#[test]
fn trailing_tokens_are_recorded() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro come un hueso el", &mut tracer);

    assert!(
        tracer
            .events()
            .any(|e| *e == TraceEvent::TrailingTokens { position: 5 })
    );
}

#[test]
fn event_filter_keeps_selected_kinds() {
    let config = TracerConfig::new()
        .enabled()
        .filter_events(vec!["mismatch".to_string()]);
    let mut tracer = Tracer::new(config);
    analyze_traced("come un libro", &mut tracer);

    assert_eq!(tracer.len(), 1);
    assert!(tracer.events().all(|e| e.kind() == "mismatch"));
}

#[test]
fn buffer_is_bounded() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().with_buffer_size(5));
    analyze_traced("el perro come un hueso", &mut tracer);

    assert_eq!(tracer.len(), 5);
    assert!(matches!(
        tracer.events().last(),
        Some(TraceEvent::AnalysisEnd { valid: true })
    ));
}

#[test]
fn ids_increase_across_analyses() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro come un hueso", &mut tracer);
    analyze_traced("la niña lee el libro", &mut tracer);

    let ids: Vec<u64> = tracer.records().map(|r| r.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn human_format_indents_by_depth() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro come un hueso", &mut tracer);
    let text = HumanFormatter::new().format_many(tracer.records());

    assert!(text.starts_with("=== ANALYZE 'el perro come un hueso' ==="));
    assert!(text.contains("\n>> <sentence>\n  >> <subject>\n    match ARTICLE @0"));
    assert!(text.contains("  << <predicate> OK"));
    assert!(text.ends_with("=== VALID ==="));
}

#[test]
fn drain_empties_buffer() {
    let mut tracer = Tracer::buffered();
    analyze_traced("el perro", &mut tracer);
    let drained = tracer.drain();

    assert!(!drained.is_empty());
    assert!(tracer.is_empty());
}
