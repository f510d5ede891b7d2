//! Multiplicative inverse by Newton iteration.
//!
//! Starting from `y = 1 / c_0`, the update `y ← y + y·(1 - x·y)` squares the
//! residual `r = 1 - x·y` at every step, so it converges whenever
//! `Σ|r_k| < 1` initially. Products are truncated, so the residual reaches a
//! floor set by the degree instead of vanishing; the iteration stops there
//! and keeps the best iterate.

use polycheb_scalar::Scalar;

use crate::config::NewtonConfig;
use crate::error::{ChebyshevError, Result};
use crate::expansion::Expansion;

impl<T: Scalar> Expansion<T> {
    /// Returns the multiplicative inverse with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`ChebyshevError::SingularInverse`] if the constant term is zero
    /// - [`ChebyshevError::InverseNotConverged`] if the residual never drops
    ///   below one
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(&NewtonConfig::default())
    }

    /// Returns the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Same as [`Expansion::inverse`].
    pub fn inverse_with(&self, config: &NewtonConfig) -> Result<Self> {
        let c0 = self.constant_term();
        if c0.is_zero() {
            return Err(ChebyshevError::SingularInverse);
        }

        let mut y = self.constant_like(T::one() / c0.clone());
        if self.is_constant() {
            return Ok(y);
        }

        let one = self.constant_like(T::one());
        let mut residual = one.try_sub(&self.product_unchecked(&y, config.strategy))?;
        let mut norm = residual.norm();

        for iteration in 0..config.max_iterations {
            if norm <= config.tolerance {
                break;
            }

            let next = y.try_add(&y.product_unchecked(&residual, config.strategy))?;
            let next_residual = one.try_sub(&self.product_unchecked(&next, config.strategy))?;
            let next_norm = next_residual.norm();

            tracing::trace!(iteration, residual = next_norm, "newton step");

            if next_norm.is_nan() || next_norm >= norm {
                break;
            }
            y = next;
            residual = next_residual;
            norm = next_norm;
        }

        if norm.is_nan() || norm >= 1.0 {
            return Err(ChebyshevError::InverseNotConverged { residual: norm });
        }

        tracing::debug!(
            nvar = self.nvar(),
            degree = self.degree(),
            residual = norm,
            "inverted expansion"
        );

        Ok(y)
    }
}
