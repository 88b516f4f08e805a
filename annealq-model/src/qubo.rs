//! QUBO coefficient mappings
//!
//! A Quadratic Unconstrained Binary Optimization problem is a mapping from
//! unordered pairs of variables to real weights: diagonal entries are linear
//! biases, off-diagonal entries are quadratic couplings. The objective is
//!
//! ```text
//! E(x) = sum_i Q[i,i] x_i + sum_{i<j} Q[i,j] x_i x_j,   x_i in {0, 1}
//! ```
//!
//! Pairs are stored canonically with the smaller variable first, so only one
//! of (i,j)/(j,i) is ever populated. Adding to a missing entry starts from
//! zero, matching the accumulate-into-a-default-map style these problems are
//! usually built with.

use crate::error::ModelError;
use crate::ising::IsingModel;
use crate::sample::{Sample, Vartype};
use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A QUBO model over binary variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuboModel {
    /// Canonical coefficient storage: (u, v) with u <= v
    coefficients: BTreeMap<(Variable, Variable), f64>,
}

/// Order a pair canonically with the smaller variable first
#[inline]
fn canonical(u: Variable, v: Variable) -> (Variable, Variable) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl QuboModel {
    /// Create an empty QUBO model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the linear bias of a variable
    ///
    /// Accumulates onto any existing bias; a missing entry starts at zero.
    pub fn add_linear(&mut self, var: Variable, bias: f64) {
        *self.coefficients.entry((var, var)).or_insert(0.0) += bias;
    }

    /// Add to the quadratic coupling between two distinct variables
    ///
    /// The pair is stored canonically, so `add_quadratic(a, b, w)` and
    /// `add_quadratic(b, a, w)` accumulate into the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfLoop`] if `u == v`.
    pub fn add_quadratic(&mut self, u: Variable, v: Variable, weight: f64) -> crate::Result<()> {
        if u == v {
            return Err(ModelError::SelfLoop(u));
        }
        *self.coefficients.entry(canonical(u, v)).or_insert(0.0) += weight;
        Ok(())
    }

    /// Overwrite the linear bias of a variable
    pub fn set_linear(&mut self, var: Variable, bias: f64) {
        self.coefficients.insert((var, var), bias);
    }

    /// Get the linear bias of a variable (zero if absent)
    pub fn linear(&self, var: Variable) -> f64 {
        self.coefficients.get(&(var, var)).copied().unwrap_or(0.0)
    }

    /// Get the quadratic coupling between two variables (zero if absent)
    pub fn quadratic(&self, u: Variable, v: Variable) -> f64 {
        if u == v {
            return 0.0;
        }
        self.coefficients.get(&canonical(u, v)).copied().unwrap_or(0.0)
    }

    /// All variables that appear in the model
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        for &(u, v) in self.coefficients.keys() {
            vars.insert(u);
            vars.insert(v);
        }
        vars
    }

    /// Number of distinct variables
    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    /// Number of off-diagonal couplings
    pub fn num_interactions(&self) -> usize {
        self.coefficients.keys().filter(|(u, v)| u != v).count()
    }

    /// Whether the model has no coefficients at all
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterate over linear terms as (variable, bias)
    pub fn iter_linear(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        self.coefficients
            .iter()
            .filter(|((u, v), _)| u == v)
            .map(|(&(u, _), &bias)| (u, bias))
    }

    /// Iterate over quadratic terms as ((u, v), weight) with u < v
    pub fn iter_quadratic(&self) -> impl Iterator<Item = ((Variable, Variable), f64)> + '_ {
        self.coefficients
            .iter()
            .filter(|((u, v), _)| u != v)
            .map(|(&pair, &weight)| (pair, weight))
    }

    /// Evaluate the objective for a binary assignment
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is not binary-valued or does not cover
    /// every model variable.
    pub fn energy(&self, sample: &Sample) -> crate::Result<f64> {
        if sample.vartype() != Vartype::Binary {
            return Err(ModelError::vartype_mismatch(Vartype::Binary, sample.vartype()));
        }

        let mut energy = 0.0;
        for (&(u, v), &weight) in &self.coefficients {
            let xu = sample.value(u).ok_or(ModelError::MissingAssignment(u))? as f64;
            if u == v {
                energy += weight * xu;
            } else {
                let xv = sample.value(v).ok_or(ModelError::MissingAssignment(v))? as f64;
                energy += weight * xu * xv;
            }
        }
        Ok(energy)
    }

    /// Convert to the equivalent Ising model
    ///
    /// See [`crate::convert::qubo_to_ising`] for the substitution used.
    pub fn to_ising(&self) -> IsingModel {
        crate::convert::qubo_to_ising(self)
    }
}

impl fmt::Display for QuboModel {
    /// Render as the upper-triangular coefficient matrix
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars: Vec<Variable> = self.variables().into_iter().collect();
        for &i in &vars {
            let mut row = String::new();
            for &j in &vars {
                let value = if j < i {
                    0.0
                } else if j == i {
                    self.linear(i)
                } else {
                    self.quadratic(i, j)
                };
                row.push_str(&format!("{}\t", value));
            }
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
