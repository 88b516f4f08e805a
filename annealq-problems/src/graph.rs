//! Small undirected graphs for problem construction

use annealq_model::{Sample, Variable};
use rand::Rng;
use std::collections::BTreeSet;

/// Undirected problem graph over integer node ids
///
/// Nodes are implied by the edge list; isolated nodes can be added
/// explicitly. This is deliberately minimal: just what the formulations in
/// this crate need to turn a graph into a QUBO and read a partition back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemGraph {
    nodes: BTreeSet<usize>,
    edges: Vec<(usize, usize)>,
}

impl ProblemGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list
    ///
    /// Self-loops and duplicate edges are ignored.
    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new();
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Erdős–Rényi random graph over nodes `0..n` with edge probability `p`
    pub fn gnp_random<R: Rng>(n: usize, p: f64, rng: &mut R) -> Self {
        let mut graph = Self::new();
        for u in 0..n {
            graph.add_node(u);
            for v in (u + 1)..n {
                if rng.gen::<f64>() < p {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    /// Add an isolated node (no-op if present)
    pub fn add_node(&mut self, node: usize) {
        self.nodes.insert(node);
    }

    /// Add an undirected edge, inserting its endpoints
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        let edge = (u.min(v), u.max(v));
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
        self.nodes.insert(u);
        self.nodes.insert(v);
    }

    /// All nodes, ascending
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes.iter().copied()
    }

    /// All edges as (u, v) with u < v, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Count edges whose endpoints fall on different sides of a binary
    /// partition
    ///
    /// Nodes the sample does not assign are treated as side 0.
    pub fn cut_size(&self, sample: &Sample) -> usize {
        self.edges
            .iter()
            .filter(|&&(u, v)| {
                let side = |node: usize| sample.value(Variable::new(node)).unwrap_or(0);
                side(u) != side(v)
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_edges_dedupes() {
        let graph = ProblemGraph::from_edges(&[(1, 2), (2, 1), (1, 1)]);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn test_gnp_extremes() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty = ProblemGraph::gnp_random(5, 0.0, &mut rng);
        assert_eq!(empty.num_edges(), 0);
        assert_eq!(empty.num_nodes(), 5);

        let full = ProblemGraph::gnp_random(5, 1.0, &mut rng);
        assert_eq!(full.num_edges(), 10);
    }

    #[test]
    fn test_cut_size() {
        let graph = ProblemGraph::from_edges(&[(1, 2), (2, 3), (1, 3)]);
        let sample = Sample::binary([
            (Variable::new(1), 0),
            (Variable::new(2), 1),
            (Variable::new(3), 0),
        ]);
        assert_eq!(graph.cut_size(&sample), 2);
    }
}
