//! Name-based dispatch over the operations in [`crate::ops`].
//!
//! Hosts that receive operation names as text (a command line, a config file)
//! resolve them with `"atanh".parse::<Function>()` and run them through an
//! [`Evaluator`], which also reports every call to its [`OpTracer`].

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    complex::Complex,
    error::{ComplexError, ComplexResult},
    notation::round_half_away,
    ops,
    tracer::{NoopTracer, OpTracer},
};

/// Every operation reachable by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Function {
    Add,
    Subtract,
    Multiply,
    Divide,
    Conjugate,
    Magnitude,
    Phase,
    Polar,
    Exp,
    Log,
    #[strum(serialize = "log10")]
    Log10,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Sqrt,
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
    #[strum(serialize = "isfinite")]
    IsFinite,
    #[strum(serialize = "isinf")]
    IsInfinite,
    #[strum(serialize = "isnan")]
    IsNan,
    #[strum(serialize = "isclose")]
    IsClose,
}

impl Function {
    /// Number of complex operands the function takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::IsClose => 2,
            _ => 1,
        }
    }

    fn apply(self, args: &[Complex]) -> ComplexResult<Outcome> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(ComplexError::Arity {
                function: self,
                expected,
                given: args.len(),
            });
        }
        let a = args[0];
        let outcome = match self {
            Self::Add => Outcome::Complex(ops::add(a, args[1])),
            Self::Subtract => Outcome::Complex(ops::subtract(a, args[1])),
            Self::Multiply => Outcome::Complex(ops::multiply(a, args[1])),
            Self::Divide => Outcome::Complex(ops::divide(a, args[1])?),
            Self::IsClose => Outcome::Bool(ops::is_close(a, args[1], ops::DEFAULT_REL_TOL, ops::DEFAULT_ABS_TOL)),
            Self::Conjugate => Outcome::Complex(a.conjugate()),
            Self::Magnitude => Outcome::Real(a.magnitude()),
            Self::Phase => Outcome::Real(a.phase()),
            Self::Polar => Outcome::Complex(ops::polar_form(a)),
            Self::Exp => Outcome::Complex(ops::exp(a)),
            Self::Log => Outcome::Complex(ops::log(a)),
            Self::Log10 => Outcome::Complex(ops::log10(a)),
            Self::Sin => Outcome::Complex(ops::sin(a)),
            Self::Cos => Outcome::Complex(ops::cos(a)),
            Self::Tan => Outcome::Complex(ops::tan(a)?),
            Self::Sinh => Outcome::Complex(ops::sinh(a)),
            Self::Cosh => Outcome::Complex(ops::cosh(a)),
            Self::Tanh => Outcome::Complex(ops::tanh(a)?),
            Self::Sqrt => Outcome::Complex(ops::sqrt(a)),
            Self::Asin => Outcome::Complex(ops::asin(a)),
            Self::Acos => Outcome::Complex(ops::acos(a)),
            Self::Atan => Outcome::Complex(ops::atan(a)),
            Self::Asinh => Outcome::Complex(ops::asinh(a)),
            Self::Acosh => Outcome::Complex(ops::acosh(a)),
            Self::Atanh => Outcome::Complex(ops::atanh(a)?),
            Self::IsFinite => Outcome::Bool(ops::is_finite(a)),
            Self::IsInfinite => Outcome::Bool(ops::is_infinite(a)),
            Self::IsNan => Outcome::Bool(ops::is_nan(a)),
        };
        Ok(outcome)
    }
}

/// Result of a dispatched call: most functions yield a complex value,
/// `magnitude`/`phase` a real and the predicates a bool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Complex(Complex),
    Real(f64),
    Bool(bool),
}

impl Outcome {
    /// The complex result, if this is one.
    #[must_use]
    pub fn as_complex(self) -> Option<Complex> {
        match self {
            Self::Complex(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complex(value) => fmt::Display::fmt(value, f),
            Self::Real(value) => match f.precision() {
                Some(precision) => f.write_str(&round_half_away(*value, precision)),
                None => write!(f, "{value}"),
            },
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Runs [`Function`]s by value and reports each call to a tracer.
///
/// The tracer is a type parameter, so `Evaluator<NoopTracer>` compiles the
/// hooks away entirely.
#[derive(Debug, Default)]
pub struct Evaluator<Tr: OpTracer = NoopTracer> {
    tracer: Tr,
}

impl<Tr: OpTracer> Evaluator<Tr> {
    #[must_use]
    pub fn new(tracer: Tr) -> Self {
        Self { tracer }
    }

    /// Applies `function` to `args`, which must hold exactly [`Function::arity`] values.
    pub fn call(&mut self, function: Function, args: &[Complex]) -> ComplexResult<Outcome> {
        self.tracer.on_call(function, args);
        match function.apply(args) {
            Ok(outcome) => {
                self.tracer.on_outcome(function, &outcome);
                Ok(outcome)
            }
            Err(error) => {
                self.tracer.on_error(function, &error);
                Err(error)
            }
        }
    }

    #[must_use]
    pub fn tracer(&self) -> &Tr {
        &self.tracer
    }

    /// Consumes the evaluator and returns its tracer, e.g. to read a report.
    #[must_use]
    pub fn into_tracer(self) -> Tr {
        self.tracer
    }
}
