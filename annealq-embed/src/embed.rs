//! Embedding application and scale normalization
//!
//! [`embed_ising`] rewrites a logical (h, J) problem onto a physical target
//! graph: linear biases are split evenly across each chain, logical couplings
//! are divided over the available inter-chain couplers, and a negative chain
//! coupling ties the qubits of each chain together. The result is the
//! hardware-ready [`PhysicalModel`] ("QMI"), which can then be normalized
//! into the device's bias/coupling ranges.

use crate::embedding::Embedding;
use crate::error::EmbedError;
use crate::topology::Topology;
use annealq_model::{IsingModel, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default magnitude of the intra-chain coupling
pub const DEFAULT_CHAIN_STRENGTH: f64 = 1.0;

/// Allowed magnitude ranges for physical biases and couplings
///
/// Annealing hardware typically allows a wider linear-bias range than
/// coupling range; typical annealing hardware accepts h in [-2, 2] and J in
/// [-1, 1], which is the default here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRanges {
    /// Maximum |h| the device accepts
    pub h_range: f64,
    /// Maximum |J| the device accepts
    pub j_range: f64,
}

impl Default for ScaleRanges {
    fn default() -> Self {
        Self {
            h_range: 2.0,
            j_range: 1.0,
        }
    }
}

/// A physical-qubit-indexed (th, tJ) model ready for submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalModel {
    /// Linear biases per physical qubit
    th: BTreeMap<usize, f64>,
    /// Couplings per physical edge, stored with the smaller qubit first
    tj: BTreeMap<(usize, usize), f64>,
    /// Chain coupling magnitude applied when the model was embedded
    chain_strength: f64,
}

#[inline]
fn canonical(q1: usize, q2: usize) -> (usize, usize) {
    if q1 <= q2 {
        (q1, q2)
    } else {
        (q2, q1)
    }
}

impl PhysicalModel {
    /// Linear bias on a physical qubit (zero if absent)
    pub fn linear(&self, qubit: usize) -> f64 {
        self.th.get(&qubit).copied().unwrap_or(0.0)
    }

    /// Coupling on a physical edge (zero if absent)
    pub fn quadratic(&self, q1: usize, q2: usize) -> f64 {
        self.tj.get(&canonical(q1, q2)).copied().unwrap_or(0.0)
    }

    /// Iterate over (qubit, bias) pairs
    pub fn iter_h(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.th.iter().map(|(&q, &bias)| (q, bias))
    }

    /// Iterate over ((q1, q2), coupling) pairs with q1 < q2
    pub fn iter_j(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.tj.iter().map(|(&edge, &weight)| (edge, weight))
    }

    /// The chain coupling magnitude used at embed time
    pub fn chain_strength(&self) -> f64 {
        self.chain_strength
    }

    /// Largest absolute linear bias
    pub fn max_abs_h(&self) -> f64 {
        self.th.values().fold(0.0, |acc, bias| acc.max(bias.abs()))
    }

    /// Largest absolute coupling
    pub fn max_abs_j(&self) -> f64 {
        self.tj.values().fold(0.0, |acc, weight| acc.max(weight.abs()))
    }

    /// The scale factor that maps this model into the given ranges
    ///
    /// `scale = max(max|tJ| / j_range, max|th| / h_range)`.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::DegenerateModel`] when every coefficient is
    /// zero, since dividing by the factor would be undefined.
    pub fn scale_factor(&self, ranges: &ScaleRanges) -> crate::Result<f64> {
        let factor = (self.max_abs_j() / ranges.j_range).max(self.max_abs_h() / ranges.h_range);
        if factor == 0.0 {
            return Err(EmbedError::DegenerateModel);
        }
        Ok(factor)
    }

    /// Divide every coefficient by the range-derived scale factor
    ///
    /// Returns the normalized model and the factor applied. After
    /// normalization `max|th| <= h_range` and `max|tJ| <= j_range`, and a
    /// second normalization divides by 1.
    pub fn normalized(&self, ranges: &ScaleRanges) -> crate::Result<(PhysicalModel, f64)> {
        let factor = self.scale_factor(ranges)?;
        let scaled = PhysicalModel {
            th: self.th.iter().map(|(&q, &bias)| (q, bias / factor)).collect(),
            tj: self
                .tj
                .iter()
                .map(|(&edge, &weight)| (edge, weight / factor))
                .collect(),
            chain_strength: self.chain_strength / factor,
        };
        Ok((scaled, factor))
    }

    /// View the physical problem as an Ising model keyed by qubit index
    ///
    /// Samplers operate on logical models; a physical problem is submitted
    /// by treating each qubit as its own variable. No offset is carried.
    pub fn to_ising(&self) -> IsingModel {
        let mut ising = IsingModel::new();
        for (&qubit, &bias) in &self.th {
            ising.add_linear(Variable::new(qubit), bias);
        }
        for (&(q1, q2), &weight) in &self.tj {
            ising
                .add_quadratic(Variable::new(q1), Variable::new(q2), weight)
                .expect("physical edges never connect a qubit to itself");
        }
        ising
    }
}

impl fmt::Display for PhysicalModel {
    /// Render as the upper-triangular (th, tJ) matrix over used qubits
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits: Vec<usize> = {
            let mut qs: Vec<usize> = self.th.keys().copied().collect();
            for &(q1, q2) in self.tj.keys() {
                qs.push(q1);
                qs.push(q2);
            }
            qs.sort_unstable();
            qs.dedup();
            qs
        };
        for &i in &qubits {
            let mut row = String::new();
            for &j in &qubits {
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

/// Rewrite a logical Ising model onto a physical target graph
///
/// - `h[i]` is split evenly across the qubits of `i`'s chain.
/// - `J[u,v]` is divided evenly over every available physical edge between
///   the two chains; if none exists the embedding cannot realize the
///   coupling and [`EmbedError::MissingCoupler`] is returned.
/// - A coupling of `-chain_strength` is added on every physical edge inside
///   a chain, encouraging the chain to agree on one value.
///
/// The embedding is validated against the target first, and every source
/// variable must have a chain.
pub fn embed_ising(
    source: &IsingModel,
    embedding: &Embedding,
    target: &Topology,
    chain_strength: f64,
) -> crate::Result<PhysicalModel> {
    embedding.validate(target)?;
    for var in source.variables() {
        if embedding.chain(var).is_none() {
            return Err(EmbedError::MissingChain(var));
        }
    }

    let mut model = PhysicalModel {
        chain_strength,
        ..Default::default()
    };

    // Split linear biases across chains
    for (var, bias) in source.iter_h() {
        let chain = embedding.chain(var).expect("chain presence checked above");
        let share = bias / chain.len() as f64;
        for &qubit in chain {
            *model.th.entry(qubit).or_insert(0.0) += share;
        }
    }

    // Place logical couplings on inter-chain edges
    for ((u, v), weight) in source.iter_j() {
        let chain_u = embedding.chain(u).expect("chain presence checked above");
        let chain_v = embedding.chain(v).expect("chain presence checked above");

        let available: Vec<(usize, usize)> = chain_u
            .iter()
            .flat_map(|&qu| {
                chain_v
                    .iter()
                    .filter(move |&&qv| target.are_connected(qu, qv))
                    .map(move |&qv| canonical(qu, qv))
            })
            .collect();

        if available.is_empty() {
            return Err(EmbedError::MissingCoupler(u, v));
        }

        let share = weight / available.len() as f64;
        for edge in available {
            *model.tj.entry(edge).or_insert(0.0) += share;
        }
    }

    // Tie chains together
    for (_, chain) in embedding.iter() {
        for &q1 in chain {
            for &q2 in chain.range((q1 + 1)..) {
                if target.are_connected(q1, q2) {
                    *model.tj.entry((q1, q2)).or_insert(0.0) += -chain_strength;
                }
            }
        }
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn var(i: usize) -> Variable {
        Variable::new(i)
    }

    /// Ising model from the lifecycle walk: h = {-7, -4.5, -5.5}, J = 12
    fn lifecycle_ising() -> IsingModel {
        let mut ising = IsingModel::new();
        ising.add_linear(var(1), -7.0);
        ising.add_linear(var(2), -4.5);
        ising.add_linear(var(3), -5.5);
        ising.add_quadratic(var(1), var(2), 12.0).unwrap();
        ising.add_quadratic(var(1), var(3), 12.0).unwrap();
        ising.add_quadratic(var(2), var(3), 12.0).unwrap();
        ising
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
    fn test_lifecycle_embedding_application() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let model =
            embed_ising(&lifecycle_ising(), &lifecycle_embedding(), &target, 1.0).unwrap();

        // Bias splitting: the two-qubit chain shares h[3]
        assert_abs_diff_eq!(model.linear(1), -7.0);
        assert_abs_diff_eq!(model.linear(2), -4.5);
        assert_abs_diff_eq!(model.linear(3), -2.75);
        assert_abs_diff_eq!(model.linear(4), -2.75);

        // Couplings land on the only available inter-chain edges
        assert_abs_diff_eq!(model.quadratic(1, 2), 12.0);
        assert_abs_diff_eq!(model.quadratic(2, 3), 12.0);
        assert_abs_diff_eq!(model.quadratic(1, 4), 12.0);

        // The single intra-chain bond
        assert_abs_diff_eq!(model.quadratic(3, 4), -1.0);

        // No physical edge that maps to neither a coupling nor a chain bond
        assert_eq!(model.iter_j().count(), 4);
    }

    #[test]
    fn test_missing_coupler_detected() {
        // Path 1-2-3: no edge can carry the (1,3) coupling
        let mut target = Topology::new();
        target.add_edge(1, 2);
        target.add_edge(2, 3);

        let mut ising = IsingModel::new();
        ising.add_quadratic(var(1), var(3), 1.0).unwrap();

        let embedding =
            Embedding::from_chains([(var(1), vec![1]), (var(2), vec![2]), (var(3), vec![3])])
                .unwrap();

        assert!(matches!(
            embed_ising(&ising, &embedding, &target, 1.0),
            Err(EmbedError::MissingCoupler(u, v)) if u == var(1) && v == var(3)
        ));
    }

    #[test]
    fn test_coupling_split_over_parallel_edges() {
        // Both qubits of chain 2 couple to the chain of variable 1
        let mut target = Topology::new();
        target.add_edge(1, 2);
        target.add_edge(1, 3);
        target.add_edge(2, 3);

        let mut ising = IsingModel::new();
        ising.add_quadratic(var(1), var(2), 6.0).unwrap();

        let embedding =
            Embedding::from_chains([(var(1), vec![1]), (var(2), vec![2, 3])]).unwrap();

        let model = embed_ising(&ising, &embedding, &target, 2.0).unwrap();
        assert_abs_diff_eq!(model.quadratic(1, 2), 3.0);
        assert_abs_diff_eq!(model.quadratic(1, 3), 3.0);
        assert_abs_diff_eq!(model.quadratic(2, 3), -2.0);
    }

    #[test]
    fn test_scale_factor_and_bounds() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let model =
            embed_ising(&lifecycle_ising(), &lifecycle_embedding(), &target, 1.0).unwrap();

        let ranges = ScaleRanges::default();
        let factor = model.scale_factor(&ranges).unwrap();
        // max(12 / 1, 7 / 2) = 12
        assert_abs_diff_eq!(factor, 12.0);

        let (scaled, applied) = model.normalized(&ranges).unwrap();
        assert_abs_diff_eq!(applied, 12.0);
        assert!(scaled.max_abs_j() <= ranges.j_range + 1e-12);
        assert!(scaled.max_abs_h() <= ranges.h_range + 1e-12);
        assert_abs_diff_eq!(scaled.quadratic(1, 2), 1.0);
        assert_abs_diff_eq!(scaled.linear(1), -7.0 / 12.0);
    }

    #[test]
    fn test_scaling_idempotent() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let model =
            embed_ising(&lifecycle_ising(), &lifecycle_embedding(), &target, 1.0).unwrap();

        let ranges = ScaleRanges::default();
        let (scaled, _) = model.normalized(&ranges).unwrap();
        let (rescaled, factor) = scaled.normalized(&ranges).unwrap();
        assert_abs_diff_eq!(factor, 1.0);
        assert_eq!(scaled, rescaled);
    }

    #[test]
    fn test_degenerate_model_rejected() {
        let model = PhysicalModel::default();
        assert!(matches!(
            model.scale_factor(&ScaleRanges::default()),
            Err(EmbedError::DegenerateModel)
        ));
    }

    #[test]
    fn test_to_ising_round_trip_indexing() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let model =
            embed_ising(&lifecycle_ising(), &lifecycle_embedding(), &target, 1.0).unwrap();

        let ising = model.to_ising();
        assert_abs_diff_eq!(ising.linear(Variable::new(3)), -2.75);
        assert_abs_diff_eq!(ising.quadratic(Variable::new(3), Variable::new(4)), -1.0);
    }
}
