//! Numerical kernels behind the expansion operators.
//!
//! This module contains:
//! - Direct multiplication through the product table
//! - Transform-domain (DCT-I) multiplication on a Lobatto grid
//! - The Clenshaw recurrence and its nested multivariate form

pub mod clenshaw;
pub mod direct;
pub mod transform;
