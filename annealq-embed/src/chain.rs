//! Chain resolution: physical samples back to logical samples
//!
//! All qubits in a chain are supposed to agree; on real hardware they
//! sometimes do not (a "chain break"). Resolution is an explicit step with a
//! declared policy, and every call reports how many chains were broken so
//! callers can judge the quality of an embedding or chain strength.

use crate::embedding::Embedding;
use crate::error::EmbedError;
use annealq_model::{Sample, Variable};
use serde::{Deserialize, Serialize};

/// Policy for turning a chain's qubit values into one logical value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChainResolution {
    /// Any disagreement within a chain is an error
    Strict,
    /// Take the majority value; ties resolve to the value of the
    /// lowest-numbered qubit in the chain
    #[default]
    MajorityVote,
}

/// Diagnostics reported by chain resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainBreakStats {
    /// Chains whose qubits disagreed
    pub broken_chains: usize,
    /// Total chains resolved
    pub total_chains: usize,
}

impl ChainBreakStats {
    /// Fraction of chains that were broken (zero when there are no chains)
    pub fn break_rate(&self) -> f64 {
        if self.total_chains == 0 {
            0.0
        } else {
            self.broken_chains as f64 / self.total_chains as f64
        }
    }
}

/// Resolve a physical sample into a logical one
///
/// The physical sample is keyed by qubit index (each qubit submitted as its
/// own variable); the returned sample is keyed by logical variable and keeps
/// the physical sample's vartype.
///
/// # Errors
///
/// - [`EmbedError::MissingQubitValue`] if the sample does not cover a chain
///   qubit.
/// - [`EmbedError::ChainBreak`] under [`ChainResolution::Strict`] when any
///   chain disagrees internally.
pub fn resolve_chains(
    physical: &Sample,
    embedding: &Embedding,
    policy: ChainResolution,
) -> crate::Result<(Sample, ChainBreakStats)> {
    let mut stats = ChainBreakStats::default();
    let mut resolved: Vec<(Variable, i8)> = Vec::with_capacity(embedding.len());

    for (var, chain) in embedding.iter() {
        let mut first_value: Option<i8> = None;
        let mut tally: i32 = 0;
        let mut broken = false;

        for &qubit in chain {
            let value = physical
                .value(Variable::new(qubit))
                .ok_or(EmbedError::MissingQubitValue { variable: var, qubit })?;
            tally += value as i32;
            match first_value {
                None => first_value = Some(value),
                Some(first) if first != value => broken = true,
                Some(_) => {}
            }
        }

        let first = first_value.expect("chains are never empty");
        stats.total_chains += 1;

        let value = if !broken {
            first
        } else {
            stats.broken_chains += 1;
            match policy {
                ChainResolution::Strict => return Err(EmbedError::ChainBreak { variable: var }),
                ChainResolution::MajorityVote => {
                    // Spin: sign of the tally. Binary: compare ones against
                    // half the chain. A tie falls back to the lowest qubit's
                    // value (`first`, since chains iterate in qubit order).
                    let (low, margin) = match physical.vartype() {
                        annealq_model::Vartype::Spin => (-1, tally),
                        annealq_model::Vartype::Binary => (0, 2 * tally - chain.len() as i32),
                    };
                    if margin > 0 {
                        1
                    } else if margin < 0 {
                        low
                    } else {
                        first
                    }
                }
            }
        };

        resolved.push((var, value));
    }

    let sample = match physical.vartype() {
        annealq_model::Vartype::Spin => Sample::spin(resolved),
        annealq_model::Vartype::Binary => Sample::binary(resolved),
    };
    Ok((sample, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::Embedding;

    fn var(i: usize) -> Variable {
        Variable::new(i)
    }

    fn lifecycle_embedding() -> Embedding {
        Embedding::from_chains([
            (var(1), vec![1]),
            (var(2), vec![2]),
            (var(3), vec![3, 4]),
        ])
        .unwrap()
    }

    #[test]
    fn test_intact_chains_pass_through() {
        let physical = Sample::spin([(var(1), 1), (var(2), -1), (var(3), 1), (var(4), 1)]);
        let (logical, stats) =
            resolve_chains(&physical, &lifecycle_embedding(), ChainResolution::Strict).unwrap();

        assert_eq!(logical.value(var(1)), Some(1));
        assert_eq!(logical.value(var(2)), Some(-1));
        assert_eq!(logical.value(var(3)), Some(1));
        assert_eq!(logical.len(), 3);
        assert_eq!(stats.broken_chains, 0);
        assert_eq!(stats.break_rate(), 0.0);
    }

    #[test]
    fn test_strict_flags_disagreement() {
        // Qubits 3 and 4 disagree: this must surface, not be silently
        // resolved by dropping one of them
        let physical = Sample::spin([(var(1), 1), (var(2), 1), (var(3), 1), (var(4), -1)]);
        assert!(matches!(
            resolve_chains(&physical, &lifecycle_embedding(), ChainResolution::Strict),
            Err(EmbedError::ChainBreak { variable }) if variable == var(3)
        ));
    }

    #[test]
    fn test_majority_vote_resolves_and_reports() {
        let embedding = Embedding::from_chains([(var(1), vec![1, 2, 3])]).unwrap();
        let physical = Sample::spin([(var(1), -1), (var(2), 1), (var(3), 1)]);

        let (logical, stats) =
            resolve_chains(&physical, &embedding, ChainResolution::MajorityVote).unwrap();
        assert_eq!(logical.value(var(1)), Some(1));
        assert_eq!(stats.broken_chains, 1);
        assert_eq!(stats.total_chains, 1);
        assert_eq!(stats.break_rate(), 1.0);
    }

    #[test]
    fn test_majority_tie_takes_lowest_qubit() {
        let embedding = Embedding::from_chains([(var(1), vec![3, 4])]).unwrap();
        let physical = Sample::spin([(var(3), -1), (var(4), 1)]);

        let (logical, stats) =
            resolve_chains(&physical, &embedding, ChainResolution::MajorityVote).unwrap();
        assert_eq!(logical.value(var(1)), Some(-1));
        assert_eq!(stats.broken_chains, 1);
    }

    #[test]
    fn test_binary_majority() {
        let embedding = Embedding::from_chains([(var(1), vec![1, 2, 3])]).unwrap();
        let physical = Sample::binary([(var(1), 0), (var(2), 1), (var(3), 1)]);

        let (logical, _) =
            resolve_chains(&physical, &embedding, ChainResolution::MajorityVote).unwrap();
        assert_eq!(logical.value(var(1)), Some(1));
        assert_eq!(logical.vartype(), annealq_model::Vartype::Binary);
    }

    #[test]
    fn test_missing_qubit_value() {
        let physical = Sample::spin([(var(1), 1), (var(2), 1), (var(3), 1)]);
        assert!(matches!(
            resolve_chains(&physical, &lifecycle_embedding(), ChainResolution::MajorityVote),
            Err(EmbedError::MissingQubitValue { qubit: 4, .. })
        ));
    }
}
