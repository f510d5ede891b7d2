//! Evaluation and composition through the Clenshaw recurrence.

use polycheb_scalar::Scalar;

use crate::algorithms::clenshaw::{clenshaw, nested_clenshaw};
use crate::config::MulStrategy;
use crate::error::{ChebyshevError, Result};
use crate::expansion::Expansion;

impl<T: Scalar> Expansion<T> {
    /// Evaluates a univariate expansion at `x`. O(degree).
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::PointDimension`] unless `nvar == 1`.
    pub fn evaluate_scalar(&self, x: &T) -> Result<T> {
        if self.nvar() != 1 {
            return Err(ChebyshevError::PointDimension {
                expected: self.nvar(),
                got: 1,
            });
        }
        Ok(clenshaw(self.coefficients().to_vec(), &T::zero(), |b| {
            b.clone() * x.clone()
        }))
    }

    /// Evaluates at a point with one coordinate per variable.
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::PointDimension`] if `point.len() != nvar`.
    pub fn evaluate(&self, point: &[T]) -> Result<T> {
        if point.len() != self.nvar() {
            return Err(ChebyshevError::PointDimension {
                expected: self.nvar(),
                got: point.len(),
            });
        }
        nested_clenshaw(
            self.shape().index(),
            self.coefficients().to_vec(),
            &T::zero(),
            |v, b| b.clone() * point[v].clone(),
        )
    }

    /// Substitutes `others[v]` for variable `v`, using the default
    /// multiplication strategy.
    ///
    /// Every intermediate product is truncated to the substitutions' degree,
    /// so the result approximates the exact substitution at that order.
    ///
    /// # Errors
    ///
    /// - [`ChebyshevError::CompositionArity`] if `others.len() != nvar`
    /// - [`ChebyshevError::ShapeMismatch`] if the substitutions differ in
    ///   shape
    pub fn composition(&self, others: &[Expansion<T>]) -> Result<Expansion<T>> {
        self.composition_with(others, MulStrategy::default())
    }

    /// Same as [`Expansion::composition`] with an explicit multiplication
    /// strategy.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::composition`].
    pub fn composition_with(
        &self,
        others: &[Expansion<T>],
        strategy: MulStrategy,
    ) -> Result<Expansion<T>> {
        if others.len() != self.nvar() {
            return Err(ChebyshevError::CompositionArity {
                expected: self.nvar(),
                got: others.len(),
            });
        }
        let target = &others[0];
        for other in &others[1..] {
            target.check_shape(other)?;
        }

        let lifted = self
            .coefficients()
            .iter()
            .map(|c| target.constant_like(c.clone()))
            .collect();

        nested_clenshaw(
            self.shape().index(),
            lifted,
            &target.zeros_like(),
            |v, b| b.product_unchecked(&others[v], strategy),
        )
    }
}
