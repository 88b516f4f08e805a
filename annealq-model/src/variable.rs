//! Logical variable addressing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a logical problem variable
///
/// Provides compile-time type safety to prevent accidentally mixing logical
/// variable indices with physical qubit indices, which are plain `usize`.
///
/// # Example
/// ```
/// use annealq_model::Variable;
///
/// let a = Variable::new(0);
/// let b = Variable::new(1);
/// assert!(a < b);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(usize);

impl Variable {
    /// Create a new variable identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Variable {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<Variable> for usize {
    #[inline]
    fn from(var: Variable) -> Self {
        var.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_creation() {
        let v = Variable::new(5);
        assert_eq!(v.index(), 5);
    }

    #[test]
    fn test_variable_ordering() {
        let a = Variable::new(0);
        let b = Variable::new(1);
        assert!(a < b);
        assert_eq!(a, Variable::new(0));
    }

    #[test]
    fn test_variable_display() {
        assert_eq!(format!("{}", Variable::new(3)), "v3");
    }

    #[test]
    fn test_variable_conversions() {
        let v: Variable = 7.into();
        let i: usize = v.into();
        assert_eq!(i, 7);
    }
}
