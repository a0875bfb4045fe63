//! Tracing of lexical and syntactic analysis.
//!
//! A [`Tracer`] records what the analyzer did: tokenization, the lexical
//! gate, every production entered and left, and every match attempt. It has
//! zero overhead when disabled; [`crate::analyze`] runs with a disabled
//! tracer and [`crate::analyze_traced`] with a caller-supplied one.
//!
//! # Example
//!
//! ```text
//! === ANALYZE 'el perro come un hueso' ===
//! tokenized into 6 tokens
//! lexical gate passed
//! >> <sentence>
//!   >> <subject>
//!     match ARTICLE @0
//!     match NOUN @1
//!   << <subject> OK
//! ...
//! ```

pub mod format;
pub mod record;

pub use format::{HumanFormatter, TraceFormatter};
pub use record::{Production, TraceEvent, TraceRecord};

use std::collections::VecDeque;
use std::time::Instant;

/// Where trace output should be sent as records are made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (records are still buffered).
    #[default]
    None,
    /// Write each record to stderr.
    Stderr,
}

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in the buffer.
    pub buffer_size: usize,
    /// Where to echo records.
    pub output: TraceOutput,
    /// Event kinds to keep (empty = all). See [`TraceEvent::kind`].
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10_000,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to echo records to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to filter event kinds.
    #[must_use]
    pub fn filter_events(mut self, kinds: Vec<String>) -> Self {
        self.event_filter = kinds;
        self
    }
}

/// Records analysis events into a bounded buffer.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: VecDeque<TraceRecord>,
    next_id: u64,
    depth: usize,
    start_time: Instant,
    formatter: HumanFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        Self {
            config,
            buffer: VecDeque::new(),
            next_id: 0,
            depth: 0,
            start_time: Instant::now(),
            formatter: HumanFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that only buffers.
    #[must_use]
    pub fn buffered() -> Self {
        Self::new(TracerConfig::new().enabled())
    }

    /// Creates an enabled tracer that echoes to stderr and buffers nothing.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(
            TracerConfig::new()
                .enabled()
                .to_stderr()
                .with_buffer_size(0),
        )
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Records an event.
    ///
    /// Returns immediately when tracing is disabled. Production enter/exit
    /// events adjust the nesting depth used for indentation.
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        if matches!(event, TraceEvent::ProductionExit { .. }) {
            self.depth = self.depth.saturating_sub(1);
        }
        let depth = self.depth;
        if matches!(event, TraceEvent::ProductionEnter { .. }) {
            self.depth += 1;
        }

        if !self.config.event_filter.is_empty()
            && !self.config.event_filter.iter().any(|k| k == event.kind())
        {
            return;
        }

        let record = TraceRecord {
            id: self.next_id,
            timestamp_ns: u64::try_from(self.start_time.elapsed().as_nanos()).unwrap_or(u64::MAX),
            depth,
            event,
        };
        self.next_id += 1;

        if self.config.output == TraceOutput::Stderr {
            eprintln!("{}", self.formatter.format(&record));
        }

        if self.config.buffer_size == 0 {
            return;
        }
        while self.buffer.len() >= self.config.buffer_size {
            self.buffer.pop_front();
        }
        self.buffer.push_back(record);
    }

    /// Buffered records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TraceRecord> {
        self.buffer.iter()
    }

    /// Buffered events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.buffer.iter().map(|r| &r.event)
    }

    /// Removes and returns all buffered records.
    pub fn drain(&mut self) -> Vec<TraceRecord> {
        self.depth = 0;
        self.buffer.drain(..).collect()
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.depth = 0;
        self.buffer.clear();
    }

    /// Number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}
