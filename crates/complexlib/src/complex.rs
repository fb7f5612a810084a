//! The complex value type.
//!
//! A [`Complex`] is an immutable pair of `f64` components. Any pair of doubles
//! is a legal value, including zero, infinities and NaN; nothing is validated
//! at construction. "Mutation" is expressed by the `with_*` methods, which
//! return a new value and leave the original untouched.

use std::{
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use crate::{error::ComplexResult, ops};

/// Tolerance used by [`Complex::approx_eq`] callers that have no better bound.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// A complex number `real + imaginary·i` in double precision.
///
/// Equality is exact per component (`0.0 == -0.0`, NaN never equals itself).
/// Use [`Complex::approx_eq`] to compare results of transcendental functions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// `0 + 0i`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `1 + 0i`.
    pub const ONE: Self = Self::new(1.0, 0.0);
    /// The imaginary unit `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Creates a complex number from its components.
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Creates a complex number with zero imaginary part.
    #[must_use]
    pub const fn real(real: f64) -> Self {
        Self::new(real, 0.0)
    }

    #[must_use]
    pub const fn real_part(self) -> f64 {
        self.real
    }

    #[must_use]
    pub const fn imaginary_part(self) -> f64 {
        self.imaginary
    }

    /// Returns a copy with the real part replaced.
    #[must_use]
    pub const fn with_real_part(self, real: f64) -> Self {
        Self::new(real, self.imaginary)
    }

    /// Returns a copy with the imaginary part replaced.
    #[must_use]
    pub const fn with_imaginary_part(self, imaginary: f64) -> Self {
        Self::new(self.real, imaginary)
    }

    /// Returns `real - imaginary·i`.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    ///
    /// The squares are summed directly, so `(3, 4)` gives exactly `5.0` and
    /// components whose squares overflow give `+inf`.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Squared magnitude `re² + im²`, the denominator of a division.
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Polar angle `atan2(im, re)` in `(-π, π]`; the zero value has phase `0`.
    #[must_use]
    pub fn phase(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Returns true when both components are exactly zero (signed zeros included).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Compares component-wise with an absolute tolerance.
    ///
    /// Each component must differ by strictly less than `tolerance`. This is
    /// a numeric-result check and deliberately separate from `==`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() < tolerance && (self.imaginary - other.imaginary).abs() < tolerance
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.imaginary == other.imaginary
    }
}

/// Values containing NaN are not equal to themselves and must not be used as
/// map or set keys; every other value satisfies the `Eq` contract.
impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (component_bits(self.real) ^ component_bits(self.imaginary)).hash(state);
    }
}

/// Bit pattern of one component with `-0.0` folded onto `0.0`, keeping hashes
/// consistent with `==`.
fn component_bits(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::real(real)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ops::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ops::subtract(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ops::multiply(self, rhs)
    }
}

/// Division is the one fallible operator: `(a / b)?`.
impl Div for Complex {
    type Output = ComplexResult<Self>;

    fn div(self, rhs: Self) -> Self::Output {
        ops::divide(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl num_traits::Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl num_traits::One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(value: Complex) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn signed_zeros_are_equal_and_hash_alike() {
        let positive = Complex::new(0.0, 1.5);
        let negative = Complex::new(-0.0, 1.5);
        assert_eq!(positive, negative);
        assert_eq!(hash_of(positive), hash_of(negative));
    }

    #[test]
    fn nan_is_never_equal() {
        let value = Complex::new(f64::NAN, 0.0);
        assert_ne!(value, value);
    }

    #[test]
    fn equal_values_hash_alike() {
        assert_eq!(hash_of(Complex::new(1.0, 2.0)), hash_of(Complex::new(1.0, 2.0)));
        assert_ne!(hash_of(Complex::new(1.0, 2.0)), hash_of(Complex::new(1.0, 3.0)));
    }

    #[test]
    fn with_methods_leave_original_untouched() {
        let original = Complex::new(1.0, 2.0);
        let changed = original.with_real_part(7.0).with_imaginary_part(-1.0);
        assert_eq!(original, Complex::new(1.0, 2.0));
        assert_eq!(changed, Complex::new(7.0, -1.0));
    }

    #[test]
    fn magnitude_overflows_to_infinity() {
        assert_eq!(Complex::new(1e200, 1e200).magnitude(), f64::INFINITY);
        assert!(Complex::new(f64::NAN, 1.0).magnitude().is_nan());
    }

    #[test]
    fn phase_of_zero_is_zero() {
        assert_eq!(Complex::ZERO.phase(), 0.0);
        assert_eq!(Complex::new(-1.0, 0.0).phase(), std::f64::consts::PI);
    }
}
