//! Operation tests.
//!
//! Reference values for the transcendental functions were taken from Wolfram
//! Alpha, e.g. cos(1 + 1i) = 0.833730025131149 - 0.988897705762865i, and are
//! compared with a tolerance of 1e-10 since they are not exact.

use std::f64::consts::{FRAC_PI_2, PI};

use complexlib::{Complex, ComplexError, ops};

macro_rules! assert_close {
    ($actual:expr, ($re:expr, $im:expr)) => {
        assert_close!($actual, ($re, $im), complexlib::DEFAULT_TOLERANCE)
    };
    ($actual:expr, ($re:expr, $im:expr), $tolerance:expr) => {{
        let actual: Complex = $actual;
        let expected = Complex::new($re, $im);
        assert!(
            actual.approx_eq(expected, $tolerance),
            "expected {expected:?}, got {actual:?}"
        );
    }};
}

fn one_one() -> Complex {
    Complex::new(1.0, 1.0)
}

// === Arithmetic ===

#[test]
fn add() {
    assert_eq!(ops::add(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)), Complex::new(4.0, 6.0));
}

#[test]
fn subtract() {
    assert_eq!(
        ops::subtract(Complex::new(5.0, 6.0), Complex::new(3.0, 4.0)),
        Complex::new(2.0, 2.0)
    );
}

#[test]
fn multiply() {
    assert_eq!(
        ops::multiply(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)),
        Complex::new(-5.0, 10.0)
    );
}

#[test]
fn divide() {
    let result = ops::divide(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)).unwrap();
    assert_eq!(result, Complex::new(0.44, 0.08));
}

#[test]
fn divide_by_zero_fails_for_any_numerator() {
    for numerator in [Complex::ZERO, Complex::new(1.0, 2.0), Complex::new(f64::NAN, f64::INFINITY)] {
        assert_eq!(
            ops::divide(numerator, Complex::ZERO),
            Err(ComplexError::DivisionByZero)
        );
    }
    assert_eq!(
        ops::divide(Complex::ONE, Complex::new(-0.0, -0.0)),
        Err(ComplexError::DivisionByZero)
    );
}

#[test]
fn divide_then_multiply_recovers_numerator() {
    let values = [
        Complex::new(1.0, 2.0),
        Complex::new(-3.5, 0.25),
        Complex::new(0.0, -7.0),
        Complex::new(1e3, -1e-3),
        Complex::new(-0.001, 0.002),
    ];
    for a in values {
        for b in values {
            let quotient = ops::divide(a, b).unwrap();
            assert_close!(ops::multiply(quotient, b), (a.real_part(), a.imaginary_part()), 1e-9);
        }
    }
}

#[test]
fn addition_and_multiplication_commute() {
    let a = Complex::new(1.5, -2.0);
    let b = Complex::new(-0.25, 4.0);
    assert_eq!(ops::add(a, b), ops::add(b, a));
    assert_eq!(ops::multiply(a, b), ops::multiply(b, a));
}

// === Polar ===

#[test]
fn polar_form_is_magnitude_and_phase() {
    let polar = ops::polar_form(Complex::new(0.0, 2.0));
    assert_eq!(polar, Complex::new(2.0, FRAC_PI_2));
}

#[test]
fn rect_inverts_polar_form() {
    let z = Complex::new(-1.25, 0.75);
    let polar = ops::polar_form(z);
    assert_close!(ops::rect(polar.real_part(), polar.imaginary_part()), (-1.25, 0.75));
}

// === Exponential and logarithm ===

#[test]
fn exp() {
    assert_close!(ops::exp(one_one()), (1.46869393991589, 2.28735528717884));
}

#[test]
fn log() {
    assert_close!(ops::log(one_one()), (0.346573590279973, 0.785398163397448));
}

#[test]
fn log_of_zero_is_negative_infinity() {
    let result = ops::log(Complex::ZERO);
    assert_eq!(result.real_part(), f64::NEG_INFINITY);
    assert_eq!(result.imaginary_part(), 0.0);
}

#[test]
fn log10() {
    assert_close!(ops::log10(Complex::new(100.0, 0.0)), (2.0, 0.0));
    assert_close!(ops::log10(Complex::new(-10.0, 0.0)), (1.0, PI / std::f64::consts::LN_10));
}

#[test]
fn log_base() {
    assert_close!(ops::log_base(Complex::new(8.0, 0.0), Complex::new(2.0, 0.0)).unwrap(), (3.0, 0.0));
    assert_eq!(
        ops::log_base(Complex::new(8.0, 0.0), Complex::ONE),
        Err(ComplexError::DivisionByZero)
    );
}

// === Trigonometric ===

#[test]
fn sin() {
    assert_close!(ops::sin(one_one()), (1.29845758141598, 0.634963914784736));
}

#[test]
fn cos() {
    assert_close!(ops::cos(one_one()), (0.833730025131149, -0.988897705762865));
}

#[test]
fn tan() {
    assert_close!(ops::tan(one_one()).unwrap(), (0.271752585319512, 1.08392332733869));
}

// === Hyperbolic ===

#[test]
fn sinh() {
    assert_close!(ops::sinh(one_one()), (0.634963914784736, 1.29845758141598));
}

#[test]
fn cosh() {
    assert_close!(ops::cosh(one_one()), (0.83373002513114, 0.988897705762865));
}

#[test]
fn tanh() {
    assert_close!(ops::tanh(one_one()).unwrap(), (1.08392332733869, 0.271752585319512));
}

// === Square root ===

#[test]
fn sqrt() {
    assert_close!(ops::sqrt(one_one()), (1.09868411346781, 0.455089860562227));
}

#[test]
fn sqrt_of_negative_real_is_imaginary() {
    assert_close!(ops::sqrt(Complex::new(-4.0, 0.0)), (0.0, 2.0));
}

#[test]
fn sqrt_squares_back() {
    for z in [Complex::new(3.0, -4.0), Complex::new(-2.0, 0.5), Complex::new(0.0, 9.0)] {
        let root = ops::sqrt(z);
        assert_close!(ops::multiply(root, root), (z.real_part(), z.imaginary_part()), 1e-9);
        assert!(root.real_part() >= 0.0, "principal root has non-negative real part: {root:?}");
    }
}

// === Inverse trigonometric ===

#[test]
fn asin() {
    assert_close!(ops::asin(one_one()), (0.666239432492515, 1.06127506190504));
}

#[test]
fn acos() {
    assert_close!(ops::acos(one_one()), (0.904556894302381, -1.06127506190504));
}

#[test]
fn atan() {
    assert_close!(ops::atan(one_one()), (1.017221967897851, 0.402359478108525));
}

#[test]
fn atan_at_plus_or_minus_i_is_not_finite() {
    let upper = ops::atan(Complex::I);
    assert!(upper.real_part().is_nan());
    assert_eq!(upper.imaginary_part(), f64::INFINITY);

    let lower = ops::atan(-Complex::I);
    assert!(lower.real_part().is_nan());
    assert_eq!(lower.imaginary_part(), f64::NEG_INFINITY);
}

#[test]
fn asin_outside_real_domain_is_defined() {
    let result = ops::asin(Complex::new(2.0, 0.0));
    assert!(ops::is_finite(result));
    assert_close!(ops::sin(result), (2.0, 0.0), 1e-9);
}

// === Inverse hyperbolic ===

#[test]
fn asinh() {
    assert_close!(ops::asinh(one_one()), (1.06127506190504, 0.666239432492515));
}

#[test]
fn acosh() {
    assert_close!(ops::acosh(one_one()), (1.06127506190504, 0.904556894302381));
}

#[test]
fn atanh() {
    assert_close!(ops::atanh(one_one()).unwrap(), (0.402359478108525, 1.017221967897851));
}

#[test]
fn atanh_at_real_one_fails() {
    assert_eq!(ops::atanh(Complex::new(1.0, 0.0)), Err(ComplexError::DivisionByZero));
    assert_eq!(ops::atanh(Complex::new(-1.0, 0.0)), Err(ComplexError::DivisionByZero));
    assert_eq!(ops::atanh(Complex::new(1.0, -0.0)), Err(ComplexError::DivisionByZero));
}

#[test]
fn atanh_near_real_one_is_defined() {
    let result = ops::atanh(Complex::new(1.0, 1e-12)).unwrap();
    assert!(ops::is_finite(result));
}

// === Predicates ===

#[test]
fn classification() {
    let finite = Complex::new(1.0, -2.0);
    let infinite = Complex::new(f64::NEG_INFINITY, 0.0);
    let nan = Complex::new(0.0, f64::NAN);
    assert!(ops::is_finite(finite));
    assert!(!ops::is_finite(infinite));
    assert!(ops::is_infinite(infinite));
    assert!(!ops::is_infinite(nan));
    assert!(ops::is_nan(nan));
    assert!(!ops::is_nan(finite));
}

#[test]
fn is_close() {
    let a = Complex::new(1.0, 1.0);
    let nudged = Complex::new(1.0 + 1e-12, 1.0);
    assert!(ops::is_close(a, nudged, ops::DEFAULT_REL_TOL, ops::DEFAULT_ABS_TOL));
    assert!(!ops::is_close(a, Complex::new(1.1, 1.0), ops::DEFAULT_REL_TOL, ops::DEFAULT_ABS_TOL));
    assert!(ops::is_close(Complex::ZERO, Complex::new(1e-12, 0.0), 0.0, 1e-9));
    assert!(!ops::is_close(Complex::ZERO, Complex::new(1e-12, 0.0), 1e-9, 0.0));
}

#[test]
fn is_close_with_non_finite_values() {
    let inf = Complex::new(f64::INFINITY, 0.0);
    assert!(ops::is_close(inf, inf, 0.0, 0.0));
    assert!(!ops::is_close(inf, Complex::new(1e308, 0.0), 1.0, 1.0));
    let nan = Complex::new(f64::NAN, 0.0);
    assert!(!ops::is_close(nan, nan, 1.0, 1.0));
}

#[test]
fn nan_propagates_without_error() {
    let nan = Complex::new(f64::NAN, 1.0);
    assert!(ops::is_nan(ops::exp(nan)));
    assert!(ops::is_nan(ops::sqrt(nan)));
    assert!(ops::is_nan(ops::divide(nan, Complex::ONE).unwrap()));
}
