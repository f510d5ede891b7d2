//! Truncated multivariate Chebyshev expansions.

use std::sync::Arc;

use num_traits::Zero;
use polycheb_scalar::Scalar;

use crate::algorithms::direct::direct_product;
use crate::algorithms::transform::transform_product;
use crate::config::{MulStrategy, NewtonConfig};
use crate::error::{ChebyshevError, Result};
use crate::shape::Shape;

/// A multivariate Chebyshev expansion truncated at a total degree.
///
/// Represents `Σ c_k T_{α_k}(x)` over every multi-index `α_k` of total
/// degree at most `degree`, ordered by the shape's multi-index table.
///
/// Binary operations require both operands to have the same number of
/// variables and degree. Multiplication truncates the exact product back
/// to `degree`.
#[derive(Clone)]
pub struct Expansion<T: Scalar> {
    shape: Arc<Shape>,
    coeffs: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T: Scalar> Expansion<T> {
    /// Creates the zero expansion.
    ///
    /// # Errors
    ///
    /// Returns an index error if `nvar == 0` or `degree > MAX_DEGREE`.
    pub fn new(nvar: usize, degree: usize) -> Result<Self> {
        let shape = Shape::shared(nvar, degree)?;
        Ok(Self::zeros_in(shape))
    }

    /// Creates a constant expansion.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::new`].
    pub fn constant(nvar: usize, degree: usize, value: T) -> Result<Self> {
        let mut e = Self::new(nvar, degree)?;
        e.coeffs[0] = value;
        Ok(e)
    }

    /// Creates the single basis function at flat index `index`.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::new`], plus
    /// [`ChebyshevError::BasisIndexOutOfRange`].
    pub fn basis(nvar: usize, degree: usize, index: usize) -> Result<Self> {
        let mut e = Self::new(nvar, degree)?;
        let len = e.len();
        let slot = e
            .coeffs
            .get_mut(index)
            .ok_or(ChebyshevError::BasisIndexOutOfRange { index, len })?;
        *slot = T::one();
        Ok(e)
    }

    /// Creates the coordinate `x_{var+1}`, i.e. `T_1` in variable `var`.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::basis`]; fails for `degree == 0` or
    /// `var >= nvar`.
    pub fn variable(nvar: usize, degree: usize, var: usize) -> Result<Self> {
        if var >= nvar {
            return Err(ChebyshevError::BasisIndexOutOfRange {
                index: var,
                len: nvar,
            });
        }
        Self::basis(nvar, degree, 1 + var)
    }

    /// Creates an expansion from a full coefficient vector.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::new`], plus
    /// [`ChebyshevError::CoefficientLength`].
    pub fn from_coefficients(nvar: usize, degree: usize, coeffs: Vec<T>) -> Result<Self> {
        let shape = Shape::shared(nvar, degree)?;
        if coeffs.len() != shape.len() {
            return Err(ChebyshevError::CoefficientLength {
                expected: shape.len(),
                got: coeffs.len(),
            });
        }
        Ok(Self { shape, coeffs })
    }

    pub(crate) fn from_parts(shape: Arc<Shape>, coeffs: Vec<T>) -> Self {
        debug_assert_eq!(coeffs.len(), shape.len());
        Self { shape, coeffs }
    }

    fn zeros_in(shape: Arc<Shape>) -> Self {
        let coeffs = vec![T::zero(); shape.len()];
        Self { shape, coeffs }
    }

    /// Returns the zero expansion of the same shape.
    #[must_use]
    pub fn zeros_like(&self) -> Self {
        Self::zeros_in(Arc::clone(&self.shape))
    }

    /// Returns a constant expansion of the same shape.
    #[must_use]
    pub fn constant_like(&self, value: T) -> Self {
        let mut e = self.zeros_like();
        e.coeffs[0] = value;
        e
    }

    /// Returns the shared shape.
    #[must_use]
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn nvar(&self) -> usize {
        self.shape.nvar()
    }

    /// Returns the truncation degree.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.shape.degree()
    }

    /// Returns the number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the name of the polynomial basis.
    #[must_use]
    pub const fn basis_name() -> &'static str {
        "Chebyshev"
    }

    /// Returns the coefficients in multi-index table order.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the expansion, returning its coefficients.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }

    /// Returns the coefficient at flat index `index`.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> Option<&T> {
        self.coeffs.get(index)
    }

    /// Returns the coefficient of the basis function with the given
    /// exponents.
    #[must_use]
    pub fn coefficient_of(&self, exponents: &[u16]) -> Option<&T> {
        let i = self.shape.index().index_of(exponents)?;
        self.coeffs.get(i)
    }

    /// Replaces all coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::CoefficientLength`] if the length differs.
    pub fn set_coefficients(&mut self, coeffs: Vec<T>) -> Result<()> {
        if coeffs.len() != self.len() {
            return Err(ChebyshevError::CoefficientLength {
                expected: self.len(),
                got: coeffs.len(),
            });
        }
        self.coeffs = coeffs;
        Ok(())
    }

    /// Sets the coefficient at flat index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::BasisIndexOutOfRange`].
    pub fn set_coefficient(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        let slot = self
            .coeffs
            .get_mut(index)
            .ok_or(ChebyshevError::BasisIndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns the constant coefficient.
    #[must_use]
    pub fn constant_term(&self) -> &T {
        &self.coeffs[0]
    }

    /// Makes this expansion the constant `value`, keeping its shape.
    pub fn set_constant(&mut self, value: T) {
        self.coeffs.fill(T::zero());
        self.coeffs[0] = value;
    }

    /// Returns `Σ |c_k|`, an upper bound of `|f|` on the unit box.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.coeffs.iter().map(Scalar::magnitude).sum()
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Returns true if every non-constant coefficient is zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs[1..].iter().all(Zero::is_zero)
    }

    pub(crate) fn check_shape(&self, other: &Self) -> Result<()> {
        if self.shape.same_as(&other.shape) {
            Ok(())
        } else {
            Err(ChebyshevError::ShapeMismatch {
                left_nvar: self.nvar(),
                left_degree: self.degree(),
                right_nvar: other.nvar(),
                right_degree: other.degree(),
            })
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_shape(other)?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(a, b)| f(a.clone(), b.clone()))
            .collect();
        Ok(Self::from_parts(Arc::clone(&self.shape), coeffs))
    }

    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        let coeffs = self.coeffs.iter().map(f).collect();
        Self::from_parts(Arc::clone(&self.shape), coeffs)
    }

    /// Adds two expansions coefficient-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts two expansions coefficient-wise.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns the negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map(|c| -c.clone())
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, value: T) -> Self {
        let mut e = self.clone();
        e.coeffs[0] = e.coeffs[0].clone() + value;
        e
    }

    /// Subtracts a scalar from the constant term.
    #[must_use]
    pub fn sub_scalar(&self, value: T) -> Self {
        let mut e = self.clone();
        e.coeffs[0] = e.coeffs[0].clone() - value;
        e
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, value: &T) -> Self {
        self.map(|c| c.clone() * value.clone())
    }

    /// Divides every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::DivisionByZero`] if `value` is zero.
    pub fn try_div_scalar(&self, value: &T) -> Result<Self> {
        if value.is_zero() {
            return Err(ChebyshevError::DivisionByZero);
        }
        Ok(self.map(|c| c.clone() / value.clone()))
    }

    /// Multiplies through the product table.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn direct_multiplication(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, MulStrategy::Direct)
    }

    /// Multiplies on a Chebyshev–Gauss–Lobatto grid.
    ///
    /// Falls back to the product table if the grid would be too large.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn transform_multiplication(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, MulStrategy::Transform)
    }

    /// Multiplies with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn multiply_with(&self, other: &Self, strategy: MulStrategy) -> Result<Self> {
        self.check_shape(other)?;
        Ok(self.product_unchecked(other, strategy))
    }

    /// Multiplies with the default strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::ShapeMismatch`] for differing shapes.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.multiply_with(other, MulStrategy::default())
    }

    /// Multiplies two expansions already known to share a shape.
    pub(crate) fn product_unchecked(&self, other: &Self, strategy: MulStrategy) -> Self {
        // A constant factor is a plain scaling under either strategy.
        if other.is_constant() {
            return self.scale(other.constant_term());
        }
        if self.is_constant() {
            return other.scale(self.constant_term());
        }

        let coeffs = match strategy {
            MulStrategy::Transform => match self.shape.transform_grid() {
                Some(grid) => transform_product(grid, &self.coeffs, &other.coeffs),
                None => direct_product(self.shape.products(), &self.coeffs, &other.coeffs),
            },
            MulStrategy::Direct => {
                direct_product(self.shape.products(), &self.coeffs, &other.coeffs)
            }
        };
        Self::from_parts(Arc::clone(&self.shape), coeffs)
    }

    /// Divides by `other` through its Newton inverse.
    ///
    /// # Errors
    ///
    /// - [`ChebyshevError::ShapeMismatch`] for differing shapes
    /// - [`ChebyshevError::SingularInverse`] if `other` has a zero constant
    ///   term
    /// - [`ChebyshevError::InverseNotConverged`] if the iteration diverges
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_shape(other)?;
        let config = NewtonConfig::default();
        let inverse = other.inverse_with(&config)?;
        Ok(self.product_unchecked(&inverse, config.strategy))
    }

    /// Raises to a non-negative integer power by repeated squaring.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let strategy = MulStrategy::default();
        let mut result = self.constant_like(T::one());
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.product_unchecked(&base, strategy);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.product_unchecked(&base, strategy);
            }
        }

        result
    }
}

impl<T: Scalar> PartialEq for Expansion<T> {
    /// Exact coefficient-wise equality of two expansions of the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.shape.same_as(&other.shape) && self.coeffs == other.coeffs
    }
}

impl<T: Scalar> std::fmt::Debug for Expansion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expansion")
            .field("nvar", &self.nvar())
            .field("degree", &self.degree())
            .field("coeffs", &self.coeffs)
            .finish()
    }
}

impl<T: Scalar> std::fmt::Display for Expansion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let index = self.shape.index();
        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let mut term = format!("{c:?}");
            for (v, &e) in index.exponents(i).iter().enumerate() {
                if e > 0 {
                    term.push_str(&format!("*T{e}(x{})", v + 1));
                }
            }
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use polycheb_index::IndexError;

    #[test]
    fn test_construction() {
        let e = Expansion::<f64>::new(2, 3).unwrap();
        assert_eq!(e.len(), 10);
        assert!(e.is_zero());
        assert_eq!(Expansion::<f64>::basis_name(), "Chebyshev");

        let c = Expansion::constant(2, 3, 4.5).unwrap();
        assert_eq!(*c.constant_term(), 4.5);
        assert!(c.is_constant());

        let b = Expansion::<f64>::basis(2, 3, 4).unwrap();
        assert_eq!(b.coefficient_of(&[1, 1]), Some(&1.0));
    }

    #[test]
    fn test_variables_follow_table_order() {
        let x1 = Expansion::<f64>::variable(3, 2, 0).unwrap();
        let x3 = Expansion::<f64>::variable(3, 2, 2).unwrap();
        assert_eq!(x1.coefficient_of(&[1, 0, 0]), Some(&1.0));
        assert_eq!(x3.coefficient_of(&[0, 0, 1]), Some(&1.0));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            Expansion::<f64>::new(1, 101),
            Err(ChebyshevError::Index(IndexError::DegreeOutOfRange { .. }))
        ));
        assert!(matches!(
            Expansion::<f64>::new(0, 2),
            Err(ChebyshevError::Index(IndexError::NoVariables))
        ));
        assert_eq!(
            Expansion::<f64>::basis(1, 2, 3).unwrap_err(),
            ChebyshevError::BasisIndexOutOfRange { index: 3, len: 3 }
        );
        assert!(Expansion::<f64>::variable(2, 0, 0).is_err());
        assert_eq!(
            Expansion::from_coefficients(1, 2, vec![1.0]).unwrap_err(),
            ChebyshevError::CoefficientLength {
                expected: 3,
                got: 1
            }
        );
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Expansion::<f64>::new(1, 3).unwrap();
        let b = Expansion::<f64>::new(1, 4).unwrap();
        let c = Expansion::<f64>::new(2, 3).unwrap();

        assert!(matches!(
            a.try_add(&b),
            Err(ChebyshevError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            a.try_mul(&c),
            Err(ChebyshevError::ShapeMismatch { .. })
        ));
        assert!(a != c);
    }

    #[test]
    fn test_t1_times_t2_both_strategies() {
        let t1 = Expansion::<f64>::basis(1, 4, 1).unwrap();
        let t2 = Expansion::<f64>::basis(1, 4, 2).unwrap();
        let expected = [0.0, 0.5, 0.0, 0.5, 0.0];

        let direct = t1.direct_multiplication(&t2).unwrap();
        assert_eq!(direct.coefficients(), &expected);

        let transform = t1.transform_multiplication(&t2).unwrap();
        for (c, e) in transform.coefficients().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(c, e, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_scalar_arithmetic() {
        let x = Expansion::<f64>::variable(1, 2, 0).unwrap();
        let e = x.scale(&2.0).add_scalar(1.0);
        assert_eq!(e.coefficients(), &[1.0, 2.0, 0.0]);

        let back = e.sub_scalar(1.0).try_div_scalar(&2.0).unwrap();
        assert_eq!(back, x);

        assert_eq!(
            e.try_div_scalar(&0.0).unwrap_err(),
            ChebyshevError::DivisionByZero
        );
    }

    #[test]
    fn test_set_constant() {
        let mut e = Expansion::<f64>::variable(2, 2, 1).unwrap();
        e.set_constant(7.0);
        assert_eq!(e, Expansion::constant(2, 2, 7.0).unwrap());
    }

    #[test]
    fn test_division_by_zero_constant() {
        let a = Expansion::<f64>::constant(1, 3, 1.0).unwrap();
        let b = Expansion::<f64>::variable(1, 3, 0).unwrap();
        assert_eq!(a.try_div(&b).unwrap_err(), ChebyshevError::SingularInverse);
    }

    #[test]
    fn test_pow() {
        // x³ = ¾ T1 + ¼ T3
        let x = Expansion::<f64>::variable(1, 3, 0).unwrap();
        let cube = x.pow(3);
        assert_abs_diff_eq!(cube.coefficients()[1], 0.75, epsilon = 1e-15);
        assert_abs_diff_eq!(cube.coefficients()[3], 0.25, epsilon = 1e-15);
        assert_eq!(x.pow(0), x.constant_like(1.0));
    }

    #[test]
    fn test_display() {
        let e = Expansion::from_coefficients(2, 2, vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0]).unwrap();
        assert_eq!(e.to_string(), "1.0 + 2.0*T1(x2) + 3.0*T1(x1)*T1(x2)");
        assert_eq!(Expansion::<f64>::new(1, 1).unwrap().to_string(), "0");
    }
}
