//! Samples and energy-ordered sample collections
//!
//! A [`Sample`] is one assignment of values to variables, tagged with the
//! domain ([`Vartype`]) the values live in. A [`SampleSet`] is what a sampler
//! returns: records of (assignment, energy, occurrence count) kept sorted
//! best-first, so `first()` is always the lowest-energy solution seen.

use crate::variable::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The domain of a sample's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vartype {
    /// Values in {0, 1}
    Binary,
    /// Values in {-1, +1}
    Spin,
}

impl Vartype {
    /// Whether a raw value belongs to this domain
    pub fn contains(&self, value: i8) -> bool {
        match self {
            Vartype::Binary => value == 0 || value == 1,
            Vartype::Spin => value == -1 || value == 1,
        }
    }
}

/// One assignment of values to variables
///
/// Values outside the vartype's domain are a caller precondition violation;
/// use [`Sample::validate`] at trust boundaries (e.g. on data returned by a
/// remote service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    values: BTreeMap<Variable, i8>,
    vartype: Vartype,
}

impl Sample {
    /// Create a binary-valued sample from (variable, value) pairs
    pub fn binary<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Variable, i8)>,
    {
        Self {
            values: values.into_iter().collect(),
            vartype: Vartype::Binary,
        }
    }

    /// Create a spin-valued sample from (variable, value) pairs
    pub fn spin<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Variable, i8)>,
    {
        Self {
            values: values.into_iter().collect(),
            vartype: Vartype::Spin,
        }
    }

    /// The domain of this sample's values
    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    /// Look up the value assigned to a variable
    pub fn value(&self, var: Variable) -> Option<i8> {
        self.values.get(&var).copied()
    }

    /// Assign a value to a variable
    pub fn insert(&mut self, var: Variable, value: i8) {
        self.values.insert(var, value);
    }

    /// Remove a variable from the assignment
    pub fn remove(&mut self, var: Variable) -> Option<i8> {
        self.values.remove(&var)
    }

    /// Iterate over (variable, value) pairs in variable order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, i8)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sample assigns no variables
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check every value against the vartype domain
    pub fn validate(&self) -> crate::Result<()> {
        for &value in self.values.values() {
            if !self.vartype.contains(value) {
                return Err(crate::ModelError::InvalidValue {
                    vartype: self.vartype,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Convert to the spin domain (`0 -> -1`, `1 -> +1`)
    ///
    /// A sample already in the spin domain is returned unchanged.
    pub fn to_spin(&self) -> Sample {
        match self.vartype {
            Vartype::Spin => self.clone(),
            Vartype::Binary => Sample {
                values: self
                    .values
                    .iter()
                    .map(|(&var, &value)| (var, if value == 0 { -1 } else { 1 }))
                    .collect(),
                vartype: Vartype::Spin,
            },
        }
    }

    /// Convert to the binary domain (`-1 -> 0`, `+1 -> 1`)
    ///
    /// A sample already in the binary domain is returned unchanged.
    pub fn to_binary(&self) -> Sample {
        match self.vartype {
            Vartype::Binary => self.clone(),
            Vartype::Spin => Sample {
                values: self
                    .values
                    .iter()
                    .map(|(&var, &value)| (var, if value == -1 { 0 } else { 1 }))
                    .collect(),
                vartype: Vartype::Binary,
            },
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", var, value)?;
        }
        write!(f, "}}")
    }
}

/// One sampleset record: an assignment, its energy, and how often it was seen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// The assignment
    pub sample: Sample,
    /// Objective value of the assignment
    pub energy: f64,
    /// Number of reads that produced this assignment
    pub num_occurrences: usize,
}

/// Energy-ordered collection of sample records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSet {
    records: Vec<SampleRecord>,
}

impl SampleSet {
    /// Build a sampleset from records
    ///
    /// Records with identical assignments are aggregated (occurrence counts
    /// summed), and the result is sorted by ascending energy.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SampleRecord>,
    {
        let mut merged: Vec<SampleRecord> = Vec::new();
        for record in records {
            match merged.iter_mut().find(|r| r.sample == record.sample) {
                Some(existing) => existing.num_occurrences += record.num_occurrences,
                None => merged.push(record),
            }
        }
        merged.sort_by(|a, b| a.energy.total_cmp(&b.energy));
        Self { records: merged }
    }

    /// The lowest-energy record, if any samples were returned
    pub fn first(&self) -> Option<&SampleRecord> {
        self.records.first()
    }

    /// The `k` lowest-energy records
    pub fn lowest(&self, k: usize) -> &[SampleRecord] {
        &self.records[..k.min(self.records.len())]
    }

    /// Iterate over records best-first
    pub fn iter(&self) -> impl Iterator<Item = &SampleRecord> {
        self.records.iter()
    }

    /// Number of distinct assignments
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sampleset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total reads across all records
    pub fn total_occurrences(&self) -> usize {
        self.records.iter().map(|r| r.num_occurrences).sum()
    }

    /// Map every record's sample, keeping energies and counts
    ///
    /// Used when converting a whole sampleset between domains or from
    /// physical to logical indexing.
    pub fn map_samples<F>(&self, mut f: F) -> SampleSet
    where
        F: FnMut(&Sample) -> Sample,
    {
        SampleSet::from_records(self.records.iter().map(|r| SampleRecord {
            sample: f(&r.sample),
            energy: r.energy,
            num_occurrences: r.num_occurrences,
        }))
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12}  {:>6}  sample", "energy", "occ.")?;
        for record in &self.records {
            writeln!(
                f,
                "{:>12.4}  {:>6}  {}",
                record.energy, record.num_occurrences, record.sample
            )?;
        }
        Ok(())
    }
}
