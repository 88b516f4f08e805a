//! Physical qubit connectivity graphs
//!
//! Adapted working-graph representation for annealing hardware: an
//! undirected graph over arbitrary qubit identifiers. Real devices expose
//! sparse topologies, so chains of physical qubits stand in for logical
//! variables; the graph queries here are what embedding application and
//! chain validation need.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Undirected physical-qubit graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Adjacency list: qubit -> connected qubits
    edges: BTreeMap<usize, BTreeSet<usize>>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycle over the given qubits, in order
    ///
    /// A single qubit yields a lone node; two qubits yield one edge.
    pub fn cycle(qubits: &[usize]) -> Self {
        let mut graph = Self::new();
        match qubits {
            [] => {}
            [q] => {
                graph.add_qubit(*q);
            }
            _ => {
                for window in qubits.windows(2) {
                    graph.add_edge(window[0], window[1]);
                }
                if qubits.len() > 2 {
                    graph.add_edge(qubits[qubits.len() - 1], qubits[0]);
                }
            }
        }
        graph
    }

    /// Rectangular grid with nearest-neighbor couplers, qubits numbered
    /// row-major from zero
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut graph = Self::new();
        for row in 0..rows {
            for col in 0..cols {
                let qubit = row * cols + col;
                if col + 1 < cols {
                    graph.add_edge(qubit, qubit + 1);
                }
                if row + 1 < rows {
                    graph.add_edge(qubit, qubit + cols);
                }
            }
        }
        graph
    }

    /// Fully connected graph over qubits `0..n`
    pub fn complete(n: usize) -> Self {
        let mut graph = Self::new();
        for i in 0..n {
            graph.add_qubit(i);
            for j in (i + 1)..n {
                graph.add_edge(i, j);
            }
        }
        graph
    }

    /// Add a qubit with no couplers (no-op if present)
    pub fn add_qubit(&mut self, qubit: usize) {
        self.edges.entry(qubit).or_default();
    }

    /// Add an undirected edge between two qubits, inserting them as needed
    pub fn add_edge(&mut self, q1: usize, q2: usize) {
        if q1 == q2 {
            return;
        }
        self.edges.entry(q1).or_default().insert(q2);
        self.edges.entry(q2).or_default().insert(q1);
    }

    /// Whether the topology contains a qubit
    pub fn contains(&self, qubit: usize) -> bool {
        self.edges.contains_key(&qubit)
    }

    /// Whether two qubits share a coupler
    pub fn are_connected(&self, q1: usize, q2: usize) -> bool {
        self.edges
            .get(&q1)
            .map(|neighbors| neighbors.contains(&q2))
            .unwrap_or(false)
    }

    /// Neighbors of a qubit
    pub fn neighbors(&self, qubit: usize) -> Option<&BTreeSet<usize>> {
        self.edges.get(&qubit)
    }

    /// Number of couplers attached to a qubit
    pub fn degree(&self, qubit: usize) -> usize {
        self.edges.get(&qubit).map(|n| n.len()).unwrap_or(0)
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.edges.len()
    }

    /// All qubits, ascending
    pub fn qubits(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.keys().copied()
    }

    /// All edges as (u, v) with u < v, ascending
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges
            .iter()
            .flat_map(|(&u, neighbors)| neighbors.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }

    /// Whether a set of qubits induces a connected subgraph
    ///
    /// The empty set is not connected; a singleton is. Qubits missing from
    /// the topology make the set disconnected.
    pub fn is_connected_subset(&self, qubits: &BTreeSet<usize>) -> bool {
        let Some(&start) = qubits.iter().next() else {
            return false;
        };
        if !qubits.iter().all(|q| self.contains(*q)) {
            return false;
        }

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(neighbors) = self.neighbors(current) {
                for &next in neighbors {
                    if qubits.contains(&next) && visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        visited.len() == qubits.len()
    }
}
