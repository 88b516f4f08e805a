//! Ising (h, J) models
//!
//! The spin formulation equivalent to a QUBO: linear biases `h` on variables
//! taking values in {-1, +1} and couplings `J` on unordered variable pairs,
//! plus the additive constant picked up when converting from a QUBO:
//!
//! ```text
//! E(s) = sum_i h[i] s_i + sum_{i<j} J[i,j] s_i s_j + offset
//! ```

use crate::error::ModelError;
use crate::qubo::QuboModel;
use crate::sample::{Sample, Vartype};
use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An Ising model over spin variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsingModel {
    h: BTreeMap<Variable, f64>,
    j: BTreeMap<(Variable, Variable), f64>,
    offset: f64,
}

#[inline]
fn canonical(u: Variable, v: Variable) -> (Variable, Variable) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl IsingModel {
    /// Create an empty Ising model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the linear bias of a variable
    pub fn add_linear(&mut self, var: Variable, bias: f64) {
        *self.h.entry(var).or_insert(0.0) += bias;
    }

    /// Add to the coupling between two distinct variables
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfLoop`] if `u == v`.
    pub fn add_quadratic(&mut self, u: Variable, v: Variable, weight: f64) -> crate::Result<()> {
        if u == v {
            return Err(ModelError::SelfLoop(u));
        }
        *self.j.entry(canonical(u, v)).or_insert(0.0) += weight;
        Ok(())
    }

    /// Add to the constant offset
    pub fn add_offset(&mut self, offset: f64) {
        self.offset += offset;
    }

    /// The constant offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Get the linear bias of a variable (zero if absent)
    pub fn linear(&self, var: Variable) -> f64 {
        self.h.get(&var).copied().unwrap_or(0.0)
    }

    /// Get the coupling between two variables (zero if absent)
    pub fn quadratic(&self, u: Variable, v: Variable) -> f64 {
        if u == v {
            return 0.0;
        }
        self.j.get(&canonical(u, v)).copied().unwrap_or(0.0)
    }

    /// All variables that appear in the model
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars: BTreeSet<Variable> = self.h.keys().copied().collect();
        for &(u, v) in self.j.keys() {
            vars.insert(u);
            vars.insert(v);
        }
        vars
    }

    /// Number of distinct variables
    pub fn num_variables(&self) -> usize {
        self.variables().len()
    }

    /// Number of couplings
    pub fn num_interactions(&self) -> usize {
        self.j.len()
    }

    /// Whether the model has no biases and no couplings
    pub fn is_empty(&self) -> bool {
        self.h.is_empty() && self.j.is_empty()
    }

    /// Iterate over linear biases as (variable, bias)
    pub fn iter_h(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        self.h.iter().map(|(&var, &bias)| (var, bias))
    }

    /// Iterate over couplings as ((u, v), weight) with u < v
    pub fn iter_j(&self) -> impl Iterator<Item = ((Variable, Variable), f64)> + '_ {
        self.j.iter().map(|(&pair, &weight)| (pair, weight))
    }

    /// Evaluate the objective for a spin assignment, offset included
    ///
    /// # Errors
    ///
    /// Returns an error if the sample is not spin-valued or does not cover
    /// every model variable.
    pub fn energy(&self, sample: &Sample) -> crate::Result<f64> {
        if sample.vartype() != Vartype::Spin {
            return Err(ModelError::vartype_mismatch(Vartype::Spin, sample.vartype()));
        }

        let mut energy = self.offset;
        for (&var, &bias) in &self.h {
            let s = sample.value(var).ok_or(ModelError::MissingAssignment(var))? as f64;
            energy += bias * s;
        }
        for (&(u, v), &weight) in &self.j {
            let su = sample.value(u).ok_or(ModelError::MissingAssignment(u))? as f64;
            let sv = sample.value(v).ok_or(ModelError::MissingAssignment(v))? as f64;
            energy += weight * su * sv;
        }
        Ok(energy)
    }

    /// Convert back to a QUBO model
    ///
    /// See [`crate::convert::ising_to_qubo`] for the substitution used.
    pub fn to_qubo(&self) -> (QuboModel, f64) {
        crate::convert::ising_to_qubo(self)
    }
}

impl fmt::Display for IsingModel {
    /// Render as the upper-triangular (h, J) matrix
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

#[cfg(test)]
mod tests {
    use super::*;

    fn var(i: usize) -> Variable {
        Variable::new(i)
    }

    #[test]
    fn test_couplings_canonical() {
        let mut ising = IsingModel::new();
        ising.add_quadratic(var(2), var(1), 0.5).unwrap();
        assert_eq!(ising.quadratic(var(1), var(2)), 0.5);
        assert_eq!(ising.num_interactions(), 1);
    }

    #[test]
    fn test_energy_includes_offset() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(1), 1.0);
        ising.add_offset(2.0);

        let up = Sample::spin([(var(1), 1)]);
        let down = Sample::spin([(var(1), -1)]);
        assert_eq!(ising.energy(&up).unwrap(), 3.0);
        assert_eq!(ising.energy(&down).unwrap(), 1.0);
    }

    #[test]
    fn test_energy_rejects_binary_sample() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(1), 1.0);
        assert!(ising.energy(&Sample::binary([(var(1), 1)])).is_err());
    }

    #[test]
    fn test_energy_missing_variable() {
        let mut ising = IsingModel::new();
        ising.add_quadratic(var(1), var(2), 1.0).unwrap();
        let partial = Sample::spin([(var(1), 1)]);
        assert!(matches!(
            ising.energy(&partial),
            Err(ModelError::MissingAssignment(v)) if v == var(2)
        ));
    }
}
