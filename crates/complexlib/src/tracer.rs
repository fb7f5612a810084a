//! Call tracing for the [`Evaluator`](crate::Evaluator).
//!
//! Tracing is trait-based rather than routed through a global logger. The
//! evaluator carries its tracer as a type parameter, so with [`NoopTracer`]
//! every hook is inlined to nothing.
//!
//! | Tracer | Purpose |
//! |--------|---------|
//! | [`NoopTracer`] | Zero-cost no-op (default) |
//! | [`StderrTracer`] | Human-readable call log to stderr |
//! | [`ProfilingTracer`] | Per-function call and error counters |
//! | [`RecordingTracer`] | Full event recording for later inspection |
//!
//! ```
//! use complexlib::{Complex, Evaluator, Function, ProfilingTracer};
//!
//! let mut evaluator = Evaluator::new(ProfilingTracer::new());
//! evaluator.call(Function::Sqrt, &[Complex::new(-4.0, 0.0)]).unwrap();
//! let report = evaluator.into_tracer().report();
//! assert_eq!(report.total_calls, 1);
//! ```

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    complex::Complex,
    error::ComplexError,
    function::{Function, Outcome},
};

/// One traced step, as captured by [`RecordingTracer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// A function was invoked.
    Call {
        function: Function,
        args: Vec<Complex>,
    },
    /// The call produced a value.
    Outcome { function: Function, outcome: Outcome },
    /// The call failed; the error is kept in its display form.
    Error { function: Function, message: String },
}

/// Hooks invoked by the evaluator around each call.
///
/// All methods default to no-ops; implementations override only what they need.
pub trait OpTracer: fmt::Debug {
    /// Called before the function runs.
    #[inline(always)]
    fn on_call(&mut self, _function: Function, _args: &[Complex]) {}

    /// Called after a successful call.
    #[inline(always)]
    fn on_outcome(&mut self, _function: Function, _outcome: &Outcome) {}

    /// Called after a failed call.
    #[inline(always)]
    fn on_error(&mut self, _function: Function, _error: &ComplexError) {}
}

// ============================================================================
// NoopTracer
// ============================================================================

/// A tracer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl OpTracer for NoopTracer {}

// ============================================================================
// StderrTracer
// ============================================================================

/// Tracer that prints one line per hook to stderr.
///
/// Output format:
/// ```text
///   >>> atanh      (1.00 + 1.00i)
///   <<< atanh      = 0.40 + 1.02i
///   !!! divide     division by a complex number with zero magnitude
/// ```
#[derive(Debug)]
pub struct StderrTracer {
    /// Maximum number of lines to print before going quiet. None = unlimited.
    limit: Option<usize>,
    count: usize,
    stopped: bool,
}

impl StderrTracer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            limit: None,
            count: 0,
            stopped: false,
        }
    }

    /// Creates a tracer that stops after `limit` lines.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            count: 0,
            stopped: false,
        }
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if self.stopped {
            return;
        }
        eprintln!("{line}");
        self.count += 1;
        if let Some(limit) = self.limit
            && self.count >= limit
        {
            eprintln!("--- trace limit reached ({limit} lines) ---");
            self.stopped = true;
        }
    }
}

impl Default for StderrTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl OpTracer for StderrTracer {
    fn on_call(&mut self, function: Function, args: &[Complex]) {
        let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.emit(format_args!("  >>> {function:<10} ({})", rendered.join(", ")));
    }

    fn on_outcome(&mut self, function: Function, outcome: &Outcome) {
        self.emit(format_args!("  <<< {function:<10} = {outcome}"));
    }

    fn on_error(&mut self, function: Function, error: &ComplexError) {
        self.emit(format_args!("  !!! {function:<10} {error}"));
    }
}

// ============================================================================
// ProfilingTracer
// ============================================================================

/// Tracer that counts calls and failures per function.
///
/// Retrieve results via [`ProfilingTracer::report`].
#[derive(Debug, Default)]
pub struct ProfilingTracer {
    call_counts: AHashMap<Function, u64>,
    error_counts: AHashMap<Function, u64>,
}

impl ProfilingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a report sorted by descending call count, ties by name.
    #[must_use]
    pub fn report(&self) -> ProfilingReport {
        let mut function_counts: Vec<(Function, u64)> = self.call_counts.iter().map(|(f, n)| (*f, *n)).collect();
        function_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
        ProfilingReport {
            total_calls: self.call_counts.values().sum(),
            total_errors: self.error_counts.values().sum(),
            function_counts,
        }
    }
}

impl OpTracer for ProfilingTracer {
    #[inline]
    fn on_call(&mut self, function: Function, _args: &[Complex]) {
        *self.call_counts.entry(function).or_insert(0) += 1;
    }

    fn on_error(&mut self, function: Function, _error: &ComplexError) {
        *self.error_counts.entry(function).or_insert(0) += 1;
    }
}

/// Summary produced by [`ProfilingTracer::report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilingReport {
    pub total_calls: u64,
    pub total_errors: u64,
    /// Calls per function, most-called first.
    pub function_counts: Vec<(Function, u64)>,
}

impl fmt::Display for ProfilingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Profiling Report ===")?;
        writeln!(f, "Total calls:  {}", self.total_calls)?;
        writeln!(f, "Total errors: {}", self.total_errors)?;
        for (function, count) in &self.function_counts {
            writeln!(f, "  {function:<12} {count:>8}")?;
        }
        Ok(())
    }
}

// ============================================================================
// RecordingTracer
// ============================================================================

/// Tracer that records every event in order.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
}

impl RecordingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl OpTracer for RecordingTracer {
    fn on_call(&mut self, function: Function, args: &[Complex]) {
        self.events.push(TraceEvent::Call {
            function,
            args: args.to_vec(),
        });
    }

    fn on_outcome(&mut self, function: Function, outcome: &Outcome) {
        self.events.push(TraceEvent::Outcome {
            function,
            outcome: *outcome,
        });
    }

    fn on_error(&mut self, function: Function, error: &ComplexError) {
        self.events.push(TraceEvent::Error {
            function,
            message: error.to_string(),
        });
    }
}
