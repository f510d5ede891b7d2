//! Scalar capability traits.
//!
//! An expansion is generic over its coefficient type. The engine only needs
//! field arithmetic, exact equality and construction from a floating literal,
//! so plain floats, complex numbers and automatic-differentiation types can
//! all instantiate it.

use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

use num_complex::Complex;
use num_traits::{Float, One, Zero};

use crate::dct;

/// A coefficient type for Chebyshev expansions.
///
/// # Laws
///
/// - `+`, `-`, `*`, `/` behave as field operations (up to rounding)
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - `from_f64` embeds real literals; `from_f64(0.0) == zero()`
/// - `magnitude` is a norm: non-negative and zero only for `zero()`
pub trait Scalar:
    Clone
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Sub<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Embeds a real literal.
    fn from_f64(value: f64) -> Self;

    /// Returns the magnitude as a real number.
    ///
    /// Used for convergence tests and enclosure bounds.
    fn magnitude(&self) -> f64;

    /// Embeds a count.
    #[allow(clippy::cast_precision_loss)]
    fn from_usize(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    /// Computes the unnormalised type-I discrete cosine transform.
    ///
    /// For `input = [d_0, ..., d_M]`:
    ///
    /// ```text
    /// Y_k = d_0 + (-1)^k d_M + 2 Σ_{j=1}^{M-1} d_j cos(π j k / M)
    /// ```
    ///
    /// Inputs of length 0 or 1 are returned unchanged.
    fn dct_i(input: &[Self]) -> Vec<Self> {
        dct::dct_i_direct(input)
    }
}

/// An ordered real scalar.
///
/// Required by operations that reason about value ranges, such as
/// enclosures and fitting a function over the range of an expansion.
pub trait RealScalar: Scalar + Float {}

impl<T: Scalar + Float> RealScalar for T {}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }

    fn dct_i(input: &[Self]) -> Vec<Self> {
        let complex: Vec<Complex<f64>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        dct::dct_i_fft(&complex).into_iter().map(|c| c.re).collect()
    }
}

impl Scalar for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn magnitude(&self) -> f64 {
        f64::from(self.abs())
    }

    fn dct_i(input: &[Self]) -> Vec<Self> {
        let complex: Vec<Complex<f32>> = input.iter().map(|&x| Complex::new(x, 0.0)).collect();
        dct::dct_i_fft(&complex).into_iter().map(|c| c.re).collect()
    }
}

impl Scalar for Complex<f64> {
    fn from_f64(value: f64) -> Self {
        Complex::new(value, 0.0)
    }

    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn dct_i(input: &[Self]) -> Vec<Self> {
        dct::dct_i_fft(input)
    }
}

impl Scalar for Complex<f32> {
    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        Complex::new(value as f32, 0.0)
    }

    fn magnitude(&self) -> f64 {
        f64::from(self.norm())
    }

    fn dct_i(input: &[Self]) -> Vec<Self> {
        dct::dct_i_fft(input)
    }
}
