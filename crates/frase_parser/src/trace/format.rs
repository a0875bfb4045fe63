//! Trace output formatters.

use super::record::{TraceEvent, TraceRecord};

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many<'a>(&self, records: impl IntoIterator<Item = &'a TraceRecord>) -> String
    where
        Self: Sized,
    {
        records
            .into_iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats trace records in human-readable form, indented by production depth.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut line = String::new();

        if self.show_ids {
            let _ = write!(line, "[{:06}] ", record.id);
        }
        if self.show_timestamps {
            let _ = write!(line, "{:>10} ", Self::format_timestamp(record.timestamp_ns));
        }

        line.push_str(&"  ".repeat(record.depth));

        let _ = match &record.event {
            TraceEvent::AnalysisStart { source } => write!(line, "=== ANALYZE '{source}' ==="),
            TraceEvent::Tokenized { count } => write!(line, "tokenized into {count} tokens"),
            TraceEvent::LexicalGate { unknown: 0 } => write!(line, "lexical gate passed"),
            TraceEvent::LexicalGate { unknown } => {
                write!(line, "lexical gate FAILED ({unknown} unknown)")
            }
            TraceEvent::ProductionEnter { production } => write!(line, ">> {production}"),
            TraceEvent::ProductionExit {
                production,
                success,
            } => {
                let status = if *success { "OK" } else { "FAILED" };
                write!(line, "<< {production} {status}")
            }
            TraceEvent::Matched { category, position } => {
                write!(line, "match {category} @{position}")
            }
            TraceEvent::Mismatch {
                expected,
                found,
                position,
            } => write!(line, "MISMATCH @{position}: wanted {expected}, saw {found}"),
            TraceEvent::TrailingTokens { position } => {
                write!(line, "TRAILING tokens from @{position}")
            }
            TraceEvent::AnalysisEnd { valid } => {
                let status = if *valid { "VALID" } else { "INVALID" };
                write!(line, "=== {status} ===")
            }
        };

        line
    }
}
