#![doc = include_str!("../../../README.md")]
#![expect(clippy::float_cmp, reason = "exact component equality is the value contract")]
#![expect(clippy::must_use_candidate, reason = "pure free functions are used by value")]

mod complex;
mod error;
pub mod function;
pub mod notation;
pub mod ops;
pub mod tracer;

pub use crate::{
    complex::{Complex, DEFAULT_TOLERANCE},
    error::{ComplexError, ComplexResult, FormatError},
    function::{Evaluator, Function, Outcome},
    notation::{DecimalSeparator, NumberFormat},
    tracer::{NoopTracer, OpTracer, ProfilingReport, ProfilingTracer, RecordingTracer, StderrTracer, TraceEvent},
};
