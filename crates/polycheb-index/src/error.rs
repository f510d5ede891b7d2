//! Errors raised while building multi-index tables.

use thiserror::Error;

/// Errors that can occur when a table shape is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The degree exceeds [`MAX_DEGREE`](crate::MAX_DEGREE).
    #[error("degree {degree} exceeds the maximum admissible degree {max}")]
    DegreeOutOfRange {
        /// The requested degree.
        degree: usize,
        /// The largest admissible degree.
        max: usize,
    },

    /// Zero variables were requested.
    #[error("an expansion needs at least one variable")]
    NoVariables,

    /// The entry count does not fit the table's index type.
    #[error("a table for {nvar} variables and degree {degree} has too many entries")]
    TableTooLarge {
        /// The requested number of variables.
        nvar: usize,
        /// The requested degree.
        degree: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_fields() {
        let err = IndexError::DegreeOutOfRange { degree: 101, max: 100 };
        assert_eq!(
            err.to_string(),
            "degree 101 exceeds the maximum admissible degree 100"
        );

        let err = IndexError::TableTooLarge { nvar: 40, degree: 90 };
        assert_eq!(
            err.to_string(),
            "a table for 40 variables and degree 90 has too many entries"
        );
    }
}
