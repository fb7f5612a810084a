//! Text interchange for [`Complex`]: formatting, parsing and their settings.
//!
//! The human-readable form is `"R.RR + I.IIi"` or `"R.RR - I.IIi"`. The
//! decimal separator is part of [`NumberFormat`] rather than taken from the
//! process locale, so the same configuration always produces the same text.
//!
//! # Grammar
//!
//! [`parse_with`] reads the text as follows:
//!
//! 1. all whitespace is removed, and one pair of surrounding parentheses is
//!    stripped;
//! 2. without a trailing `i` the whole text is the real component;
//! 3. otherwise the `i` is dropped and the last `+`/`-` after the first
//!    character that does not follow an exponent marker (`e`/`E`) separates
//!    the real term from the signed imaginary term; without such a sign the
//!    whole remainder is the imaginary term;
//! 4. an imaginary term of `""`/`"+"` means 1, `"-"` means -1.
//!
//! Each numeric segment must be a complete `f64` literal (`inf` and `nan`
//! included). An `i` anywhere but the end is therefore rejected.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::{complex::Complex, error::FormatError};

/// Character written between integer and fractional digits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum DecimalSeparator {
    /// `1.50`
    #[default]
    Dot,
    /// `1,50`
    Comma,
}

impl DecimalSeparator {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => '.',
            Self::Comma => ',',
        }
    }
}

/// Settings for [`format_with`] and [`parse_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Fractional digits written per component.
    pub precision: usize,
    /// Separator written by the formatter and expected by the parser.
    pub decimal_separator: DecimalSeparator,
}

/// Fractional digits used by `Display` when no precision is requested.
pub const DEFAULT_PRECISION: usize = 2;

impl NumberFormat {
    /// Two fractional digits with a `.` separator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            decimal_separator: DecimalSeparator::Dot,
        }
    }

    /// Sets the number of fractional digits.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the decimal separator.
    #[must_use]
    pub const fn decimal_separator(mut self, separator: DecimalSeparator) -> Self {
        self.decimal_separator = separator;
        self
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `value` as `"R + Ii"`, or `"R - Ii"` when the imaginary part is negative.
///
/// The imaginary magnitude is always printed unsigned, so `-0.0` shows as
/// `+ 0.00i`. Exact ties round half away from zero, so `0.125` shows as `0.13`.
#[must_use]
pub fn format_with(value: Complex, format: &NumberFormat) -> String {
    let imaginary = value.imaginary_part();
    let sign = if imaginary >= 0.0 { '+' } else { '-' };
    format!(
        "{} {sign} {}i",
        format_real(value.real_part(), format),
        format_real(imaginary.abs(), format)
    )
}

/// Writes one real number the way [`format_with`] writes each component.
#[must_use]
pub fn format_real(component: f64, format: &NumberFormat) -> String {
    let text = round_half_away(component, format.precision);
    match format.decimal_separator {
        DecimalSeparator::Dot => text,
        DecimalSeparator::Comma => text.replace('.', ","),
    }
}

/// Writes `value` with `precision` fractional digits, rounding exact ties away
/// from zero.
///
/// `{:.N}` rounds ties to even, so the value is first expanded exactly and the
/// cut is made on the decimal digits.
pub(crate) fn round_half_away(value: f64, precision: usize) -> String {
    let exact_digits = exact_fraction_digits(value);
    if !value.is_finite() || exact_digits <= precision {
        return format!("{value:.precision$}");
    }
    let exact = format!("{:.exact_digits$}", value.abs());
    let Some(point) = exact.find('.') else {
        return format!("{value:.precision$}");
    };
    let next = point + 1 + precision;
    let keep = if precision == 0 { point } else { next };
    let mut digits = exact.as_bytes()[..keep].to_vec();
    if exact.as_bytes()[next] >= b'5' {
        carry_one(&mut digits);
    }

    let mut text = String::with_capacity(digits.len() + 1);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(digits.into_iter().map(char::from));
    text
}

/// Adds one unit in the last place of an ASCII decimal, growing it on overflow.
fn carry_one(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        match *digit {
            b'.' => {}
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                return;
            }
        }
    }
    digits.insert(0, b'1');
}

/// Number of fractional digits in the exact decimal expansion of `value`.
///
/// A finite double is `m · 2^e` with `m` odd, which needs exactly `-e`
/// fractional digits when `e < 0`. Non-finite values report zero.
fn exact_fraction_digits(value: f64) -> usize {
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_MASK: u64 = 0x7ff;
    // 1023 bias + 52 mantissa bits
    const SCALE_OFFSET: u64 = 1075;

    let bits = value.to_bits();
    let exponent_bits = (bits >> MANTISSA_BITS) & EXPONENT_MASK;
    if exponent_bits == EXPONENT_MASK {
        return 0;
    }
    let fraction = bits & ((1 << MANTISSA_BITS) - 1);
    let (mantissa, offset) = if exponent_bits == 0 {
        (fraction, SCALE_OFFSET - 1)
    } else {
        (fraction | (1 << MANTISSA_BITS), SCALE_OFFSET)
    };
    if mantissa == 0 {
        return 0;
    }
    let scale = exponent_bits + u64::from(mantissa.trailing_zeros());
    usize::try_from(offset.saturating_sub(scale)).unwrap_or(usize::MAX)
}

/// Parses text produced by [`format_with`], [`Complex::repr`] or written by hand.
///
/// See the [module documentation](self) for the grammar.
pub fn parse_with(text: &str, format: &NumberFormat) -> Result<Complex, FormatError> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut body = compact.as_str();
    if let Some(inner) = body.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')) {
        body = inner;
    }
    if body.is_empty() {
        return Err(FormatError::new(text, body));
    }

    let Some(without_marker) = body.strip_suffix('i') else {
        return Ok(Complex::real(parse_component(text, body, format)?));
    };

    let (real, imaginary_term) = match find_split(without_marker) {
        Some(split_at) => (
            parse_component(text, &without_marker[..split_at], format)?,
            &without_marker[split_at..],
        ),
        None => (0.0, without_marker),
    };
    let imaginary = match imaginary_term {
        "" | "+" => 1.0,
        "-" => -1.0,
        term => parse_component(text, term, format)?,
    };
    Ok(Complex::new(real, imaginary))
}

/// Index of the sign that starts the imaginary term, if there is a real term.
fn find_split(without_marker: &str) -> Option<usize> {
    let mut split_at = None;
    for (idx, ch) in without_marker.char_indices().skip(1) {
        if (ch == '+' || ch == '-') && !without_marker[..idx].ends_with(['e', 'E']) {
            split_at = Some(idx);
        }
    }
    split_at
}

fn parse_component(input: &str, segment: &str, format: &NumberFormat) -> Result<f64, FormatError> {
    let normalized = match format.decimal_separator {
        DecimalSeparator::Dot => Cow::Borrowed(segment),
        DecimalSeparator::Comma => {
            if segment.contains('.') {
                return Err(FormatError::new(input, segment));
            }
            Cow::Owned(segment.replace(',', "."))
        }
    };
    normalized.parse::<f64>().map_err(|_| FormatError::new(input, segment))
}

impl fmt::Display for Complex {
    /// Uses the formatter's precision when given (`{:.4}`), otherwise two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = NumberFormat::new().precision(f.precision().unwrap_or(DEFAULT_PRECISION));
        f.write_str(&format_with(*self, &format))
    }
}

impl FromStr for Complex {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with(s, &NumberFormat::new())
    }
}

impl Complex {
    /// Formats with explicit settings; see [`format_with`].
    #[must_use]
    pub fn format(self, format: &NumberFormat) -> String {
        format_with(self, format)
    }

    /// Parses with explicit settings; see [`parse_with`].
    pub fn parse(text: &str, format: &NumberFormat) -> Result<Self, FormatError> {
        parse_with(text, format)
    }

    /// Shortest text that parses back to exactly this value, e.g. `"1-0.5i"`.
    ///
    /// Both components are always written. Integral components drop their
    /// trailing `.0` and non-finite ones are spelled `inf`/`NaN`.
    #[must_use]
    pub fn repr(self) -> String {
        let imaginary = self.imaginary_part();
        let sign = if imaginary.is_sign_negative() { '-' } else { '+' };
        format!(
            "{}{sign}{}i",
            component_repr(self.real_part()),
            component_repr(imaginary.abs())
        )
    }
}

fn component_repr(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    let text = buffer.format(value);
    text.strip_suffix(".0").unwrap_or(text).to_owned()
}
