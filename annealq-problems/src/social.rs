//! Social-network balance (friends and enemies)
//!
//! Split a signed social network into two factions so that friends end up
//! together and enemies apart. Per edge with sign `s` (+1 friendly, -1
//! hostile) the QUBO picks up `s` on each endpoint's diagonal and `-2s` on
//! the pair: a friendly edge contributes `(x_i - x_j)^2`, penalizing a
//! split, and a hostile edge the negative, rewarding one. Edges that end up
//! on the wrong side of that preference are "frustrated".

use crate::graph::ProblemGraph;
use annealq_model::{QuboModel, Sample, Variable};
use rand::Rng;
use std::collections::BTreeSet;

/// A signed social network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialNetwork {
    nodes: BTreeSet<usize>,
    /// (u, v, sign) with u < v and sign in {-1, +1}
    edges: Vec<(usize, usize, i8)>,
}

impl SocialNetwork {
    /// Build a network from signed edges
    ///
    /// Positive signs are friendly, negative hostile; zero-sign and
    /// self-loop entries are ignored.
    pub fn from_signed_edges(edges: &[(usize, usize, i8)]) -> Self {
        let mut network = Self::default();
        for &(u, v, sign) in edges {
            if u == v || sign == 0 {
                continue;
            }
            network.nodes.insert(u);
            network.nodes.insert(v);
            network
                .edges
                .push((u.min(v), u.max(v), if sign > 0 { 1 } else { -1 }));
        }
        network
    }

    /// Random network: an Erdős–Rényi graph with uniformly random edge signs
    pub fn random<R: Rng>(n: usize, edge_probability: f64, rng: &mut R) -> Self {
        let graph = ProblemGraph::gnp_random(n, edge_probability, rng);
        let mut network = Self::default();
        for node in graph.nodes() {
            network.nodes.insert(node);
        }
        for (u, v) in graph.edges() {
            let sign = if rng.gen::<bool>() { 1 } else { -1 };
            network.edges.push((u, v, sign));
        }
        network
    }

    /// All nodes, ascending
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().copied()
    }

    /// All signed edges
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i8)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of hostile edges
    pub fn num_hostile(&self) -> usize {
        self.edges.iter().filter(|(_, _, sign)| *sign < 0).count()
    }

    /// Build the faction-splitting QUBO
    pub fn to_qubo(&self) -> QuboModel {
        let mut qubo = QuboModel::new();
        for &(u, v, sign) in &self.edges {
            let (vu, vv) = (Variable::new(u), Variable::new(v));
            let s = sign as f64;
            qubo.add_linear(vu, s);
            qubo.add_linear(vv, s);
            qubo.add_quadratic(vu, vv, -2.0 * s)
                .expect("signed edges never form self-loops");
        }
        qubo
    }

    /// Count edges on the wrong side of their sign: friends split apart or
    /// enemies kept together
    pub fn frustrated(&self, sample: &Sample) -> usize {
        self.edges
            .iter()
            .filter(|&&(u, v, sign)| {
                let side = |node: usize| sample.value(Variable::new(node)).unwrap_or(0);
                let split = side(u) != side(v);
                if sign > 0 {
                    split
                } else {
                    !split
                }
            })
            .count()
    }

    /// Read a binary sample back into the two factions
    pub fn decode(&self, sample: &Sample) -> Factions {
        let mut faction0 = Vec::new();
        let mut faction1 = Vec::new();
        for node in self.nodes() {
            match sample.value(Variable::new(node)) {
                Some(1) => faction1.push(node),
                _ => faction0.push(node),
            }
        }
        Factions {
            faction0,
            faction1,
            frustrated: self.frustrated(sample),
        }
    }
}

/// A decoded faction split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factions {
    /// Nodes assigned 0
    pub faction0: Vec<usize>,
    /// Nodes assigned 1
    pub faction1: Vec<usize>,
    /// Relationships violated by the split
    pub frustrated: usize,
}
