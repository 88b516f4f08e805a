//! Error types for problem formulations

use thiserror::Error;

/// Errors that can occur while building a problem formulation
#[derive(Debug, Error)]
pub enum ProblemError {
    /// Preference vector length does not match the shift count
    #[error("Employee '{name}' has {given} preferences, expected {expected}")]
    PreferenceLength {
        name: String,
        given: usize,
        expected: usize,
    },

    /// Referenced an employee that was never added
    #[error("Unknown employee '{0}'")]
    UnknownEmployee(String),

    /// An employee name was added twice
    #[error("Duplicate employee '{0}'")]
    DuplicateEmployee(String),

    /// Covariance matrix shape does not match the stock list
    #[error("Covariance matrix is {rows}x{cols}, expected {expected}x{expected}")]
    CovarianceShape {
        rows: usize,
        cols: usize,
        expected: usize,
    },

    /// A selection target larger than the candidate set
    #[error("Cannot select {wanted} items out of {available}")]
    SelectionTooLarge { wanted: usize, available: usize },

    /// Model building failed
    #[error(transparent)]
    Model(#[from] annealq_model::ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_length_message() {
        let err = ProblemError::PreferenceLength {
            name: "Anna".to_string(),
            given: 3,
            expected: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Anna"));
        assert!(msg.contains("4"));
    }
}
