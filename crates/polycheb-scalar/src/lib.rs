//! # polycheb-scalar
//!
//! Scalar capabilities for Chebyshev expansion arithmetic.
//!
//! This crate provides:
//! - [`Scalar`]: the field-like trait every coefficient type implements
//! - [`RealScalar`]: ordered real scalars (enclosures, function fitting)
//! - The DCT-I kernel shared by fitting and transform-domain multiplication
//!
//! ## Implementations
//!
//! `f32`, `f64`, `Complex<f32>` and `Complex<f64>` route the DCT-I through
//! an FFT of the even extension. Any other scalar type falls back to the
//! direct O(n²) cosine sum.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dct;
pub mod traits;

pub use traits::{RealScalar, Scalar};
