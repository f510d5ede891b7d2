//! # polycheb-algebra
//!
//! Arithmetic on truncated multivariate Chebyshev expansions.
//!
//! This crate provides:
//! - [`Expansion`]: coefficients of `Σ c_α T_α(x)` over every multi-index
//!   of total degree at most `degree`
//! - Direct multiplication through a precomputed [`ProductTable`]
//! - Transform-domain multiplication on a Chebyshev–Gauss–Lobatto grid
//! - Evaluation and composition through the Clenshaw recurrence
//! - Newton inversion and division
//! - Fitting scalar functions on an interval
//!
//! ## Multiplication strategy
//!
//! [`MulStrategy::default`] selects the strategy behind `*`:
//! - `Direct` by default, O(N²) in the number of coefficients
//! - `Transform` with the `dct-multiplication` feature, which pays off for
//!   high degrees in few variables
//!
//! Either strategy can be requested explicitly with
//! [`Expansion::multiply_with`].
//!
//! ## Example
//!
//! ```
//! use polycheb_algebra::Expansion;
//!
//! let x = Expansion::<f64>::variable(2, 4, 0).unwrap();
//! let y = Expansion::<f64>::variable(2, 4, 1).unwrap();
//! let f = &x * &y + 1.0;
//!
//! let value = f.evaluate(&[0.5, 0.5]).unwrap();
//! assert!((value - 1.25).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod algorithms;
pub mod config;
pub mod error;
mod eval;
pub mod expansion;
pub mod fit;
mod inverse;
mod ops;
pub mod product;
pub mod shape;

#[cfg(test)]
mod proptests;

pub use algorithms::transform::MAX_GRID_POINTS;
pub use config::{MulStrategy, NewtonConfig};
pub use error::{ChebyshevError, Result};
pub use expansion::Expansion;
pub use fit::{cheb_approximation, evaluate_base};
pub use polycheb_index::MAX_DEGREE;
pub use product::ProductTable;
pub use shape::Shape;
