//! Errors raised by expansion arithmetic.

use polycheb_index::IndexError;
use thiserror::Error;

/// Errors that can occur in expansion arithmetic.
///
/// All of them are programmer errors surfaced at the call site; no
/// operation returns a partial result alongside an error.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChebyshevError {
    /// The requested `(nvar, degree)` is not admissible.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Binary operands differ in number of variables or degree.
    #[error("shape mismatch: {left_nvar} variables / degree {left_degree} vs {right_nvar} variables / degree {right_degree}")]
    ShapeMismatch {
        /// Variables of the left operand.
        left_nvar: usize,
        /// Degree of the left operand.
        left_degree: usize,
        /// Variables of the right operand.
        right_nvar: usize,
        /// Degree of the right operand.
        right_degree: usize,
    },

    /// A flat index past the end of the coefficient vector.
    #[error("basis index {index} is out of range for {len} coefficients")]
    BasisIndexOutOfRange {
        /// The rejected flat index.
        index: usize,
        /// Number of coefficients in the expansion.
        len: usize,
    },

    /// A coefficient vector of the wrong length.
    #[error("expected {expected} coefficients, got {got}")]
    CoefficientLength {
        /// Coefficient count of the shape.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// An evaluation point with the wrong number of coordinates.
    #[error("evaluation point has {got} coordinates, expected {expected}")]
    PointDimension {
        /// Number of variables.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },

    /// Division by a zero scalar.
    #[error("division by a zero scalar")]
    DivisionByZero,

    /// Inversion of an expansion whose constant term is zero.
    #[error("cannot invert an expansion whose constant coefficient is zero")]
    SingularInverse,

    /// The Newton residual never dropped below one.
    #[error("inverse iteration did not converge (residual {residual:e})")]
    InverseNotConverged {
        /// Best residual norm reached.
        residual: f64,
    },

    /// Wrong number of substitutions in a composition.
    #[error("composition expects {expected} substitutions, got {got}")]
    CompositionArity {
        /// Number of variables of the outer expansion.
        expected: usize,
        /// Number of substitutions supplied.
        got: usize,
    },

    /// A fitting interval with coinciding or non-finite ends.
    #[error("interval endpoints must be finite and distinct")]
    InvalidInterval,
}

/// Result type for expansion arithmetic.
pub type Result<T> = std::result::Result<T, ChebyshevError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_fields() {
        let err = ChebyshevError::ShapeMismatch {
            left_nvar: 2,
            left_degree: 4,
            right_nvar: 3,
            right_degree: 1,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: 2 variables / degree 4 vs 3 variables / degree 1"
        );

        let err = ChebyshevError::CompositionArity { expected: 2, got: 1 };
        assert_eq!(err.to_string(), "composition expects 2 substitutions, got 1");

        let err = ChebyshevError::InverseNotConverged { residual: 1.5 };
        assert_eq!(
            err.to_string(),
            "inverse iteration did not converge (residual 1.5e0)"
        );
    }

    #[test]
    fn test_index_error_is_transparent() {
        let err: ChebyshevError = IndexError::NoVariables.into();
        assert_eq!(err.to_string(), IndexError::NoVariables.to_string());
    }
}
