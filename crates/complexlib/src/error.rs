use std::fmt;

use crate::function::Function;

/// Result type alias for operations that can fail.
pub type ComplexResult<T> = Result<T, ComplexError>;

/// Error returned when text cannot be read as a complex number.
///
/// Carries the original input and the numeric segment that failed, so callers
/// can point at the offending part of longer literals like `"1.5+2x3i"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    input: String,
    segment: String,
}

impl FormatError {
    pub(crate) fn new(input: &str, segment: &str) -> Self {
        Self {
            input: input.to_owned(),
            segment: segment.to_owned(),
        }
    }

    /// The complete text passed to the parser.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The numeric segment that could not be read.
    ///
    /// Empty when the input itself was empty (after whitespace removal).
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.input.trim().is_empty() {
            write!(f, "empty complex literal")
        } else {
            write!(
                f,
                "malformed complex literal '{}': cannot read '{}' as a number",
                self.input, self.segment
            )
        }
    }
}

impl std::error::Error for FormatError {}

/// Error type for every fallible complex operation.
///
/// Arithmetic never fails on NaN or infinity, those propagate through the
/// result components. Only a zero divisor, unreadable text, or a dynamic call
/// with the wrong number of operands is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// A division whose divisor has zero squared magnitude.
    DivisionByZero,
    /// Text could not be parsed as a complex number.
    Format(FormatError),
    /// A [`Function`] was called through the evaluator with the wrong operand count.
    Arity {
        function: Function,
        expected: usize,
        given: usize,
    },
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by a complex number with zero magnitude"),
            Self::Format(error) => write!(f, "{error}"),
            Self::Arity {
                function,
                expected,
                given,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(f, "{function}() takes {expected} argument{plural} ({given} given)")
            }
        }
    }
}

impl std::error::Error for ComplexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(error) => Some(error),
            _ => None,
        }
    }
}

impl From<FormatError> for ComplexError {
    fn from(error: FormatError) -> Self {
        Self::Format(error)
    }
}
