//! # polycheb-index
//!
//! Graded multi-index tables for truncated multivariate expansions.
//!
//! A table for `(nvar, degree)` enumerates every exponent tuple with total
//! degree at most `degree` and fixes the flat coefficient position of each.
//! The table is basis-agnostic: it is the coordinate system shared by every
//! expansion of the same shape.
//!
//! ## Ordering
//!
//! Graded: increasing total degree, then lexicographic with the first
//! variable most significant and larger exponents first. For two variables
//! and degree 2:
//!
//! ```text
//! 0: (0,0)  1: (1,0)  2: (0,1)  3: (2,0)  4: (1,1)  5: (0,2)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod table;

pub use error::IndexError;
pub use table::{MultiIndexTable, MAX_DEGREE};
