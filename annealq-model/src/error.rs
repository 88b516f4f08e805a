//! Error types for quadratic models

use crate::sample::Vartype;
use crate::variable::Variable;
use thiserror::Error;

/// Errors that can occur when building or evaluating quadratic models
#[derive(Debug, Error)]
pub enum ModelError {
    /// Sample does not assign a value to a model variable
    #[error("Sample is missing an assignment for variable {0}")]
    MissingAssignment(Variable),

    /// Sample value outside the domain of its vartype
    #[error("Value {value} is not valid for vartype {vartype:?}")]
    InvalidValue { vartype: Vartype, value: i8 },

    /// Sample vartype does not match the model vartype
    #[error("Expected a {expected:?} sample, got {actual:?}")]
    VartypeMismatch { expected: Vartype, actual: Vartype },

    /// Quadratic coefficient on the diagonal
    #[error("Quadratic term ({0}, {0}) is a self-loop; use add_linear instead")]
    SelfLoop(Variable),
}

impl ModelError {
    /// Create a vartype mismatch error
    pub fn vartype_mismatch(expected: Vartype, actual: Vartype) -> Self {
        Self::VartypeMismatch { expected, actual }
    }
}
