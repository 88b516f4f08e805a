//! Maximum cut
//!
//! Split a graph's nodes into two sets so that as many edges as possible
//! cross between them. Per edge (i, j) the QUBO picks up `-1` on each
//! endpoint's diagonal and `+2` on the pair, so a crossing edge contributes
//! `-1` and a non-crossing edge `0`: the cut size is the negated energy.

use crate::graph::ProblemGraph;
use annealq_model::{QuboModel, Sample, Variable};

/// Build the max-cut QUBO for a graph
pub fn max_cut_qubo(graph: &ProblemGraph) -> QuboModel {
    let mut qubo = QuboModel::new();
    for (i, j) in graph.edges() {
        let (vi, vj) = (Variable::new(i), Variable::new(j));
        qubo.add_linear(vi, -1.0);
        qubo.add_linear(vj, -1.0);
        qubo.add_quadratic(vi, vj, 2.0)
            .expect("graph edges never form self-loops");
    }
    qubo
}

/// A decoded cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutSolution {
    /// Nodes assigned 0
    pub set0: Vec<usize>,
    /// Nodes assigned 1
    pub set1: Vec<usize>,
    /// Number of edges crossing the cut
    pub cut_size: usize,
}

/// Read a binary sample back into the two node sets and the cut size
pub fn decode_cut(graph: &ProblemGraph, sample: &Sample) -> CutSolution {
    let mut set0 = Vec::new();
    let mut set1 = Vec::new();
    for node in graph.nodes() {
        match sample.value(Variable::new(node)) {
            Some(1) => set1.push(node),
            _ => set0.push(node),
        }
    }
    CutSolution {
        set0,
        set1,
        cut_size: graph.cut_size(sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five-node demo graph
    fn demo_graph() -> ProblemGraph {
        ProblemGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 5)])
    }

    /// Evaluate every assignment of the graph's nodes
    fn brute_force_best(graph: &ProblemGraph, qubo: &QuboModel) -> (f64, usize) {
        let nodes: Vec<usize> = graph.nodes().collect();
        let mut best_energy = f64::INFINITY;
        let mut best_cut = 0;
        for mask in 0u32..(1 << nodes.len()) {
            let sample = Sample::binary(
                nodes
                    .iter()
                    .enumerate()
                    .map(|(bit, &node)| (Variable::new(node), ((mask >> bit) & 1) as i8)),
            );
            let energy = qubo.energy(&sample).unwrap();
            if energy < best_energy {
                best_energy = energy;
                best_cut = graph.cut_size(&sample);
            }
        }
        (best_energy, best_cut)
    }

    #[test]
    fn test_energy_is_negated_cut_size() {
        let graph = demo_graph();
        let qubo = max_cut_qubo(&graph);

        let sample = Sample::binary([
            (Variable::new(1), 0),
            (Variable::new(2), 1),
            (Variable::new(3), 1),
            (Variable::new(4), 0),
            (Variable::new(5), 1),
        ]);
        let energy = qubo.energy(&sample).unwrap();
        assert_eq!(-energy as usize, graph.cut_size(&sample));
    }

    #[test]
    fn test_demo_graph_best_cut_is_five() {
        let graph = demo_graph();
        let qubo = max_cut_qubo(&graph);
        let (best_energy, best_cut) = brute_force_best(&graph, &qubo);
        assert_eq!(best_energy, -5.0);
        assert_eq!(best_cut, 5);
    }

    #[test]
    fn test_decode_cut() {
        let graph = demo_graph();
        let sample = Sample::binary([
            (Variable::new(1), 0),
            (Variable::new(2), 1),
            (Variable::new(3), 1),
            (Variable::new(4), 0),
            (Variable::new(5), 0),
        ]);
        let solution = decode_cut(&graph, &sample);
        assert_eq!(solution.set0, vec![1, 4, 5]);
        assert_eq!(solution.set1, vec![2, 3]);
        assert_eq!(solution.cut_size, 5);
    }
}
