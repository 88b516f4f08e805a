//! Employee shift scheduling
//!
//! Assign each employee to exactly one shift, honoring ranked preferences
//! (lower is better), pairwise keep-apart / keep-together constraints, and
//! an optional balancing term that spreads staff across shifts.
//!
//! The discrete per-employee shift choice is one-hot encoded: variable
//! `(e, s)` means employee `e` works shift `s`, and a squared equality
//! penalty keeps each employee on exactly one shift.

use crate::error::ProblemError;
use annealq_model::{QuboModel, Sample, Variable};

/// Builder for a shift-scheduling QUBO
#[derive(Debug, Clone)]
pub struct ShiftScheduling {
    num_shifts: usize,
    names: Vec<String>,
    preferences: Vec<Vec<f64>>,
    same_shift_terms: Vec<(usize, usize, f64)>,
    one_shift_lagrange: f64,
    balance: bool,
}

impl ShiftScheduling {
    /// Create a problem with the given number of shifts
    pub fn new(num_shifts: usize) -> Self {
        Self {
            num_shifts,
            names: Vec::new(),
            preferences: Vec::new(),
            same_shift_terms: Vec::new(),
            one_shift_lagrange: 200.0,
            balance: false,
        }
    }

    /// Set the one-shift-per-employee penalty weight
    ///
    /// Must dominate the preference scale, or the penalty stops binding.
    pub fn with_one_shift_lagrange(mut self, lagrange: f64) -> Self {
        self.one_shift_lagrange = lagrange;
        self
    }

    /// Enable the balancing adjustment that spreads employees across shifts
    pub fn with_balance(mut self) -> Self {
        self.balance = true;
        self
    }

    /// Add an employee with one preference cost per shift (lower is better)
    ///
    /// # Errors
    ///
    /// Rejects duplicate names and preference vectors of the wrong length.
    pub fn add_employee(
        &mut self,
        name: impl Into<String>,
        preferences: Vec<f64>,
    ) -> crate::Result<()> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(ProblemError::DuplicateEmployee(name));
        }
        if preferences.len() != self.num_shifts {
            return Err(ProblemError::PreferenceLength {
                name,
                given: preferences.len(),
                expected: self.num_shifts,
            });
        }
        self.names.push(name);
        self.preferences.push(preferences);
        Ok(())
    }

    /// Add a pairwise same-shift term between two employees
    ///
    /// Positive weights keep the pair on different shifts; negative weights
    /// pull them onto the same one.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::UnknownEmployee`] for names not yet added.
    pub fn add_same_shift_term(
        &mut self,
        a: &str,
        b: &str,
        weight: f64,
    ) -> crate::Result<()> {
        let index = |name: &str| {
            self.names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| ProblemError::UnknownEmployee(name.to_string()))
        };
        let (ia, ib) = (index(a)?, index(b)?);
        self.same_shift_terms.push((ia, ib, weight));
        Ok(())
    }

    /// Employee names in insertion order
    pub fn employees(&self) -> &[String] {
        &self.names
    }

    /// The variable for (employee, shift)
    fn var(&self, employee: usize, shift: usize) -> Variable {
        Variable::new(employee * self.num_shifts + shift)
    }

    /// Build the QUBO
    pub fn to_qubo(&self) -> QuboModel {
        let mut qubo = QuboModel::new();
        let lagrange = self.one_shift_lagrange;

        for (e, prefs) in self.preferences.iter().enumerate() {
            for (s, &cost) in prefs.iter().enumerate() {
                // Preference cost plus the one-hot penalty's diagonal
                // (lagrange * (sum_s x - 1)^2, constant dropped)
                qubo.add_linear(self.var(e, s), cost - lagrange);
            }
            for s1 in 0..self.num_shifts {
                for s2 in (s1 + 1)..self.num_shifts {
                    qubo.add_quadratic(self.var(e, s1), self.var(e, s2), 2.0 * lagrange)
                        .expect("distinct shifts never form self-loops");
                }
            }
        }

        for &(a, b, weight) in &self.same_shift_terms {
            for s in 0..self.num_shifts {
                qubo.add_quadratic(self.var(a, s), self.var(b, s), weight)
                    .expect("distinct employees never form self-loops");
            }
        }

        if self.balance {
            for s in 0..self.num_shifts {
                for e1 in 0..self.names.len() {
                    qubo.add_linear(self.var(e1, s), -3.0);
                    for e2 in (e1 + 1)..self.names.len() {
                        qubo.add_quadratic(self.var(e1, s), self.var(e2, s), 2.0)
                            .expect("distinct employees never form self-loops");
                    }
                }
            }
        }

        qubo
    }

    /// Read a binary sample back into a per-shift roster
    ///
    /// Employees whose one-hot constraint ended up violated (no shift, or
    /// several) are reported separately instead of being silently placed.
    pub fn decode(&self, sample: &Sample) -> Roster {
        let mut shifts = vec![Vec::new(); self.num_shifts];
        let mut unassigned = Vec::new();

        for (e, name) in self.names.iter().enumerate() {
            let chosen: Vec<usize> = (0..self.num_shifts)
                .filter(|&s| sample.value(self.var(e, s)) == Some(1))
                .collect();
            match chosen.as_slice() {
                [shift] => shifts[*shift].push(name.clone()),
                _ => unassigned.push(name.clone()),
            }
        }

        Roster { shifts, unassigned }
    }
}

/// A decoded schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    /// Employees per shift
    pub shifts: Vec<Vec<String>>,
    /// Employees with a violated one-shift constraint
    pub unassigned: Vec<String>,
}
