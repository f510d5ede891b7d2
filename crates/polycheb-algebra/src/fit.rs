//! Fitting scalar functions and rescaling the basis to an interval.
//!
//! A function `f` on `[a, b]` is approximated through the affine change of
//! variable `s = (2t - (a + b)) / (b - a)` that maps `[a, b]` onto
//! `[-1, 1]`; its Chebyshev coefficients in `s` come from sampling at the
//! Gauss–Lobatto nodes and a DCT-I.
//!
//! Endpoints and samples stay in the coefficient type `T`, so a scalar that
//! carries more than a real value (derivative parts, say) keeps it through
//! fitting and composition.

use polycheb_index::{IndexError, MAX_DEGREE};
use polycheb_scalar::dct::{gauss_lobatto_nodes, values_to_coefficients};
use polycheb_scalar::{RealScalar, Scalar};

use crate::algorithms::clenshaw::clenshaw;
use crate::config::MulStrategy;
use crate::error::{ChebyshevError, Result};
use crate::expansion::Expansion;

/// Returns `b - a` if the interval is finite and not degenerate.
fn check_interval<T: Scalar>(a: &T, b: &T) -> Result<T> {
    let width = b.clone() - a.clone();
    let len = width.magnitude();
    if len == 0.0 || !len.is_finite() {
        return Err(ChebyshevError::InvalidInterval);
    }
    Ok(width)
}

/// Returns the expansion `(2·other - (a + b)) / (b - a)`.
fn to_unit_interval<T: Scalar>(other: &Expansion<T>, a: &T, b: &T, width: T) -> Expansion<T> {
    other
        .scale(&(T::from_f64(2.0) / width.clone()))
        .sub_scalar((a.clone() + b.clone()) / width)
}

/// Approximates `f` on `[a, b]` by a Chebyshev series of degree `degree`.
///
/// Returns `degree + 1` coefficients of the series in the variable mapped
/// onto `[-1, 1]`. The series interpolates `f` at the `degree + 1`
/// Gauss–Lobatto nodes of the interval, computed in `T`.
///
/// # Errors
///
/// - [`ChebyshevError::InvalidInterval`] if `a == b` or either end is not
///   finite
/// - [`IndexError::DegreeOutOfRange`] if `degree > MAX_DEGREE`
pub fn cheb_approximation<T, F>(f: F, a: T, b: T, degree: usize) -> Result<Vec<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    let width = check_interval(&a, &b)?;
    if degree > MAX_DEGREE {
        return Err(IndexError::DegreeOutOfRange {
            degree,
            max: MAX_DEGREE,
        }
        .into());
    }

    let half = T::from_f64(0.5);
    let mid = half.clone() * (a + b);
    let half_width = half * width;
    if degree == 0 {
        return Ok(vec![f(mid)]);
    }

    let values: Vec<T> = gauss_lobatto_nodes(degree)
        .into_iter()
        .map(|x| f(mid.clone() + half_width.clone() * T::from_f64(x)))
        .collect();

    Ok(values_to_coefficients(&values))
}

/// Returns `T_k(s)` for `k = 0..=degree`, where `s` is `other` mapped from
/// `[a, b]` onto `[-1, 1]`.
///
/// Composing a series fitted on `[a, b]` with `other` is the dot product of
/// its coefficients with this basis.
///
/// # Errors
///
/// Returns [`ChebyshevError::InvalidInterval`] for a degenerate interval.
pub fn evaluate_base<T: Scalar>(other: &Expansion<T>, a: T, b: T) -> Result<Vec<Expansion<T>>> {
    let width = check_interval(&a, &b)?;

    let s = to_unit_interval(other, &a, &b, width);
    let two_s = s.scale(&T::from_f64(2.0));
    let strategy = MulStrategy::default();

    let mut basis = Vec::with_capacity(other.degree() + 1);
    basis.push(other.constant_like(T::one()));
    if other.degree() >= 1 {
        basis.push(s);
    }
    for k in 2..=other.degree() {
        let next = two_s
            .product_unchecked(&basis[k - 1], strategy)
            .try_sub(&basis[k - 2])?;
        basis.push(next);
    }

    Ok(basis)
}

impl<T: Scalar> Expansion<T> {
    /// Substitutes this expansion into the Chebyshev series `coeffs` fitted
    /// on `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::InvalidInterval`] for a degenerate interval.
    pub fn compose_series(&self, coeffs: &[T], a: T, b: T) -> Result<Self> {
        let width = check_interval(&a, &b)?;

        let s = to_unit_interval(self, &a, &b, width);
        let strategy = MulStrategy::default();
        let lifted = coeffs.iter().map(|c| self.constant_like(c.clone())).collect();

        Ok(clenshaw(lifted, &self.zeros_like(), |acc| {
            acc.product_unchecked(&s, strategy)
        }))
    }
}

impl<T: RealScalar> Expansion<T> {
    /// Returns an enclosure `[lo, hi]` of the values on the unit box.
    ///
    /// Uses `|T_k| <= 1`, so the bound is `c_0 ∓ Σ_{k>0} |c_k|`.
    #[must_use]
    pub fn range(&self) -> (T, T) {
        let spread = self.coefficients()[1..]
            .iter()
            .fold(T::zero(), |acc, c| acc + c.abs());
        let c0 = *self.constant_term();
        (c0 - spread, c0 + spread)
    }

    /// Applies a scalar function by fitting it over [`Expansion::range`] at
    /// this expansion's degree and composing.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::InvalidInterval`] if the range is not
    /// finite.
    pub fn apply<F: Fn(T) -> T>(&self, f: F) -> Result<Self> {
        let (lo, hi) = self.range();
        if lo == hi {
            return Ok(self.constant_like(f(lo)));
        }

        let coeffs = cheb_approximation(f, lo, hi, self.degree())?;
        self.compose_series(&coeffs, lo, hi)
    }
}
