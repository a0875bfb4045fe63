//! Batch analysis with timing and aggregate counts.

use std::fmt;
use std::time::{Duration, Instant};

use frase_parser::{Analysis, Phase, Tracer, analyze_traced};
use serde::Serialize;

use crate::error::Result;

/// One analyzed input with its timing.
#[derive(Clone, Debug)]
pub struct ReportEntry {
    /// The analysis result
    pub analysis: Analysis,
    /// Time spent in `analyze`
    pub elapsed: Duration,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    elapsed_us: u64,
}

/// Aggregate counts over a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Inputs analyzed
    pub total: usize,
    /// Accepted sentences
    pub valid: usize,
    /// Rejected for unknown words
    pub lexical: usize,
    /// Rejected by the parser
    pub syntactic: usize,
    /// Sum of all analysis times
    pub total_time: Duration,
    /// Slowest single analysis
    pub max_time: Duration,
}

impl Summary {
    /// Mean analysis time, zero for an empty batch.
    #[must_use]
    pub fn mean_time(&self) -> Duration {
        u32::try_from(self.total)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_time / n)
    }
}

impl fmt::Display for Summary {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = |n: usize| {
            if self.total == 0 {
                0.0
            } else {
                n as f64 * 100.0 / self.total as f64
            }
        };
        writeln!(f, "Inputs:     {}", self.total)?;
        writeln!(f, "Valid:      {} ({:.1}%)", self.valid, percent(self.valid))?;
        writeln!(f, "Lexical:    {} ({:.1}%)", self.lexical, percent(self.lexical))?;
        writeln!(
            f,
            "Syntactic:  {} ({:.1}%)",
            self.syntactic,
            percent(self.syntactic)
        )?;
        writeln!(f, "Total time: {:?}", self.total_time)?;
        writeln!(f, "Mean time:  {:?}", self.mean_time())?;
        write!(f, "Max time:   {:?}", self.max_time)
    }
}

/// Results of analyzing many inputs.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    entries: Vec<ReportEntry>,
}

impl BatchReport {
    /// Analyzes every input in order, timing each call.
    pub fn run<'a>(inputs: impl IntoIterator<Item = &'a str>, tracer: &mut Tracer) -> Self {
        let entries = inputs
            .into_iter()
            .map(|input| {
                let start = Instant::now();
                let analysis = analyze_traced(input, tracer);
                ReportEntry {
                    analysis,
                    elapsed: start.elapsed(),
                }
            })
            .collect();
        Self { entries }
    }

    /// The analyzed entries, in input order.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Aggregates counts and timings.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for entry in &self.entries {
            summary.total += 1;
            match entry.analysis.phase() {
                None => summary.valid += 1,
                Some(Phase::Lexical) => summary.lexical += 1,
                Some(Phase::Syntactic) => summary.syntactic += 1,
            }
            summary.total_time += entry.elapsed;
            summary.max_time = summary.max_time.max(entry.elapsed);
        }
        summary
    }

    /// One JSON object per entry, newline separated.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_lines(&self) -> Result<String> {
        let lines = self
            .entries
            .iter()
            .map(|entry| {
                serde_json::to_string(&JsonEntry {
                    analysis: &entry.analysis,
                    elapsed_us: u64::try_from(entry.elapsed.as_micros()).unwrap_or(u64::MAX),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }
}

/// Splits an input file into sentences.
///
/// Blank lines and lines starting with `#` are skipped.
#[must_use]
pub fn input_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
