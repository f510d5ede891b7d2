//! # polycheb
//!
//! Truncated multivariate Chebyshev expansions.
//!
//! An expansion in `nvar` variables truncated at total degree `degree`
//! stores one coefficient per Chebyshev basis function `T_α(x)` with
//! `|α| <= degree`. Expansions of the same shape form a truncated algebra:
//! addition, multiplication, division, composition and evaluation all stay
//! inside it.
//!
//! ## Features
//!
//! - **Graded indexing**: one shared multi-index table per shape
//! - **Two multiplication strategies**: product table or DCT-I on a
//!   Chebyshev–Gauss–Lobatto grid (`dct-multiplication` feature selects the
//!   default)
//! - **Clenshaw evaluation and composition** in any number of variables
//! - **Generic scalars**: `f32`, `f64`, complex numbers, or any type
//!   implementing [`Scalar`](scalar::Scalar)
//!
//! ## Quick Start
//!
//! ```rust
//! use polycheb::prelude::*;
//!
//! let x = Expansion::<f64>::variable(1, 8, 0).unwrap();
//! let f = (&x + 3.0).inverse().unwrap();
//!
//! let value = f.evaluate_scalar(&0.5).unwrap();
//! assert!((value - 1.0 / 3.5).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polycheb_algebra as algebra;
pub use polycheb_index as index;
pub use polycheb_scalar as scalar;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polycheb_algebra::{
        cheb_approximation, evaluate_base, ChebyshevError, Expansion, MulStrategy, NewtonConfig,
        Shape,
    };
    pub use polycheb_index::{MultiIndexTable, MAX_DEGREE};
    pub use polycheb_scalar::{RealScalar, Scalar};
}
