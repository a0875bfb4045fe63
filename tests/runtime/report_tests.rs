//! Batch report tests.

use frase_parser::{Phase, Tracer};
use frase_runtime::BatchReport;
use frase_runtime::report::input_lines;

const CORPUS: &str = "\
# valid
el perro come un hueso
la niña lee el libro

# invalid
el perro grande
el perro come una pizza
";

#[test]
fn corpus_summary() {
    let lines = input_lines(CORPUS);
    let report = BatchReport::run(lines.iter().copied(), &mut Tracer::disabled());
    let summary = report.summary();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.syntactic, 1);
    assert_eq!(summary.lexical, 1);
    assert!(summary.mean_time() <= summary.max_time);
}

#[test]
fn entries_keep_input_order() {
    let report = BatchReport::run(input_lines(CORPUS), &mut Tracer::disabled());
    let phases: Vec<Option<Phase>> = report.entries().iter().map(|e| e.analysis.phase()).collect();

    assert_eq!(
        phases,
        vec![None, None, Some(Phase::Syntactic), Some(Phase::Lexical)]
    );
}

#[test]
fn json_lines_one_per_entry() {
    let report = BatchReport::run(input_lines(CORPUS), &mut Tracer::disabled());
    let json = report.to_json_lines().unwrap();
    let values: Vec<serde_json::Value> = json
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(values.len(), 4);
    assert_eq!(values[0]["valid"], true);
    assert!(values[0]["phase"].is_null());
    assert_eq!(values[2]["phase"], "syntactic");
    assert_eq!(
        values[2]["diagnostics"][0],
        "at position 3: expected VERB but found END ('')"
    );
}

#[test]
fn summary_serializes() {
    let report = BatchReport::run(["el perro come un hueso"], &mut Tracer::disabled());
    let value = serde_json::to_value(report.summary()).unwrap();

    assert_eq!(value["total"], 1);
    assert_eq!(value["valid"], 1);
}

#[test]
fn batch_tracing_covers_every_input() {
    let mut tracer = Tracer::buffered();
    BatchReport::run(["el perro come un hueso", "una pizza"], &mut tracer);

    let ends = tracer
        .events()
        .filter(|e| e.kind() == "analysis-end")
        .count();
    assert_eq!(ends, 2);
}
