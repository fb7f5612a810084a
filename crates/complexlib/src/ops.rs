//! Arithmetic and transcendental operations on [`Complex`] values.
//!
//! Every function here is pure: it reads the components of its arguments and
//! builds a new value, so all of them may be called from any number of threads
//! without coordination. Multi-valued functions return the principal value
//! produced by the `log`/`sqrt` identities they are built from.
//!
//! Only [`divide`] can fail on its own. [`tan`], [`tanh`], [`log_base`] and
//! [`atanh`] inherit its [`ComplexError::DivisionByZero`]. Everything else is
//! total and lets NaN and infinity propagate through the components.

use std::f64::consts::LN_10;

use crate::{
    complex::Complex,
    error::{ComplexError, ComplexResult},
};

/// Default relative tolerance for [`is_close`].
pub const DEFAULT_REL_TOL: f64 = 1e-9;
/// Default absolute tolerance for [`is_close`].
pub const DEFAULT_ABS_TOL: f64 = 0.0;

pub fn add(a: Complex, b: Complex) -> Complex {
    Complex::new(a.real_part() + b.real_part(), a.imaginary_part() + b.imaginary_part())
}

pub fn subtract(a: Complex, b: Complex) -> Complex {
    Complex::new(a.real_part() - b.real_part(), a.imaginary_part() - b.imaginary_part())
}

pub fn multiply(a: Complex, b: Complex) -> Complex {
    let (ar, ai) = (a.real_part(), a.imaginary_part());
    let (br, bi) = (b.real_part(), b.imaginary_part());
    Complex::new(ar * br - ai * bi, ar * bi + ai * br)
}

/// Computes `a / b` as `a · conj(b) / |b|²`.
///
/// Fails when `|b|²` is exactly zero, which includes divisors so small that
/// their squared magnitude underflows.
pub fn divide(a: Complex, b: Complex) -> ComplexResult<Complex> {
    let denominator = b.norm_sqr();
    if denominator == 0.0 {
        return Err(ComplexError::DivisionByZero);
    }
    let (ar, ai) = (a.real_part(), a.imaginary_part());
    let (br, bi) = (b.real_part(), b.imaginary_part());
    Ok(Complex::new(
        (ar * br + ai * bi) / denominator,
        (ai * br - ar * bi) / denominator,
    ))
}

/// Returns `(magnitude, phase)` packed into a `Complex`.
///
/// The result is a coordinate pair, not a complex number: its "real" slot is
/// the radius and its "imaginary" slot the angle. [`rect`] converts back.
pub fn polar_form(a: Complex) -> Complex {
    Complex::new(a.magnitude(), a.phase())
}

/// Builds a complex number from a radius and an angle in radians.
pub fn rect(radius: f64, phi: f64) -> Complex {
    Complex::new(radius * phi.cos(), radius * phi.sin())
}

pub fn exp(a: Complex) -> Complex {
    let scale = a.real_part().exp();
    Complex::new(scale * a.imaginary_part().cos(), scale * a.imaginary_part().sin())
}

/// Natural logarithm `(ln|a|, phase(a))`.
///
/// The zero value is not rejected: its real part comes out as `-inf`.
pub fn log(a: Complex) -> Complex {
    Complex::new(a.magnitude().ln(), a.phase())
}

/// Base-10 logarithm, `log(a)` scaled by `1 / ln 10`.
pub fn log10(a: Complex) -> Complex {
    let ln = log(a);
    Complex::new(ln.real_part() / LN_10, ln.imaginary_part() / LN_10)
}

/// Logarithm of `a` in an arbitrary complex `base`.
///
/// A base of exactly one has a zero logarithm and fails with `DivisionByZero`.
pub fn log_base(a: Complex, base: Complex) -> ComplexResult<Complex> {
    divide(log(a), log(base))
}

pub fn sin(a: Complex) -> Complex {
    let (re, im) = (a.real_part(), a.imaginary_part());
    Complex::new(re.sin() * im.cosh(), re.cos() * im.sinh())
}

pub fn cos(a: Complex) -> Complex {
    let (re, im) = (a.real_part(), a.imaginary_part());
    Complex::new(re.cos() * im.cosh(), -(re.sin() * im.sinh()))
}

pub fn tan(a: Complex) -> ComplexResult<Complex> {
    divide(sin(a), cos(a))
}

pub fn sinh(a: Complex) -> Complex {
    let (re, im) = (a.real_part(), a.imaginary_part());
    Complex::new(re.sinh() * im.cos(), re.cosh() * im.sin())
}

pub fn cosh(a: Complex) -> Complex {
    let (re, im) = (a.real_part(), a.imaginary_part());
    Complex::new(re.cosh() * im.cos(), re.sinh() * im.sin())
}

pub fn tanh(a: Complex) -> ComplexResult<Complex> {
    divide(sinh(a), cosh(a))
}

/// Principal square root from the half-angle form `√|a| · (cos θ/2, sin θ/2)`.
pub fn sqrt(a: Complex) -> Complex {
    let radius = a.magnitude().sqrt();
    let angle = a.phase() / 2.0;
    Complex::new(radius * angle.cos(), radius * angle.sin())
}

/// `asin(a) = -i · log(i·a + sqrt(1 - a²))`.
pub fn asin(a: Complex) -> Complex {
    let inside = add(multiply(Complex::I, a), sqrt(subtract(Complex::ONE, multiply(a, a))));
    multiply(-Complex::I, log(inside))
}

/// `acos(a) = -i · log(a + i·sqrt(1 - a²))`.
pub fn acos(a: Complex) -> Complex {
    let inside = add(a, multiply(Complex::I, sqrt(subtract(Complex::ONE, multiply(a, a)))));
    multiply(-Complex::I, log(inside))
}

/// `atan(a) = (i/2) · (log(1 - i·a) - log(1 + i·a))`.
///
/// The `i/2` factor is a constant, so no division can fail here. At `a = ±i`
/// one logarithm is `-inf`, which gives a NaN real part and a `±inf`
/// imaginary part.
pub fn atan(a: Complex) -> Complex {
    let ia = multiply(Complex::I, a);
    let difference = subtract(log(subtract(Complex::ONE, ia)), log(add(Complex::ONE, ia)));
    multiply(Complex::new(0.0, 0.5), difference)
}

/// `asinh(a) = log(a + sqrt(a² + 1))`.
pub fn asinh(a: Complex) -> Complex {
    log(add(a, sqrt(add(multiply(a, a), Complex::ONE))))
}

/// `acosh(a) = log(a + sqrt(a + 1) · sqrt(a - 1))`.
pub fn acosh(a: Complex) -> Complex {
    log(add(a, multiply(sqrt(add(a, Complex::ONE)), sqrt(subtract(a, Complex::ONE)))))
}

/// `atanh(a) = (log(1 + a) - log(1 - a)) / 2`.
///
/// The singular points `±1` on the real axis (either sign of zero imaginary
/// part) fail with `DivisionByZero` instead of returning an infinite result.
pub fn atanh(a: Complex) -> ComplexResult<Complex> {
    if is_real_plus_or_minus_one(a) {
        return Err(ComplexError::DivisionByZero);
    }
    let difference = subtract(log(add(Complex::ONE, a)), log(subtract(Complex::ONE, a)));
    divide(difference, Complex::real(2.0))
}

fn is_real_plus_or_minus_one(a: Complex) -> bool {
    a.imaginary_part() == 0.0 && a.real_part().abs() == 1.0
}

/// Both components finite.
pub fn is_finite(a: Complex) -> bool {
    a.real_part().is_finite() && a.imaginary_part().is_finite()
}

/// Either component infinite.
pub fn is_infinite(a: Complex) -> bool {
    a.real_part().is_infinite() || a.imaginary_part().is_infinite()
}

/// Either component NaN.
pub fn is_nan(a: Complex) -> bool {
    a.real_part().is_nan() || a.imaginary_part().is_nan()
}

/// Relative/absolute closeness test on the distance `|a - b|`.
///
/// Exactly equal values (including equal infinities) are always close. Other
/// non-finite inputs are never close. Negative tolerances count as zero.
pub fn is_close(a: Complex, b: Complex, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !is_finite(a) || !is_finite(b) {
        return false;
    }
    let diff = subtract(a, b).magnitude();
    let limit = (rel_tol.max(0.0) * a.magnitude().max(b.magnitude())).max(abs_tol.max(0.0));
    diff <= limit
}
