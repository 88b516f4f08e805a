//! Embeddings: logical variables mapped to chains of physical qubits

use crate::error::EmbedError;
use crate::topology::Topology;
use annealq_model::{IsingModel, Variable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A minor embedding: each logical variable owns a non-empty chain of
/// physical qubits
///
/// At solve time every qubit in a chain is expected to take the same value;
/// the chain coupling added by [`crate::embed_ising`] encourages that, and
/// [`crate::resolve_chains`] deals with the cases where it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embedding {
    chains: BTreeMap<Variable, BTreeSet<usize>>,
}

impl Embedding {
    /// Build an embedding from (variable, chain) pairs
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::EmptyChain`] if any chain has no qubits.
    pub fn from_chains<I, C>(chains: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (Variable, C)>,
        C: IntoIterator<Item = usize>,
    {
        let mut map = BTreeMap::new();
        for (var, chain) in chains {
            let chain: BTreeSet<usize> = chain.into_iter().collect();
            if chain.is_empty() {
                return Err(EmbedError::EmptyChain(var));
            }
            map.insert(var, chain);
        }
        Ok(Self { chains: map })
    }

    /// The chain for a variable, if present
    pub fn chain(&self, var: Variable) -> Option<&BTreeSet<usize>> {
        self.chains.get(&var)
    }

    /// Iterate over (variable, chain) pairs in variable order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &BTreeSet<usize>)> {
        self.chains.iter().map(|(&var, chain)| (var, chain))
    }

    /// Logical variables covered by the embedding
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.chains.keys().copied()
    }

    /// Every physical qubit used by any chain
    pub fn physical_qubits(&self) -> BTreeSet<usize> {
        self.chains.values().flatten().copied().collect()
    }

    /// Number of chains
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the embedding maps no variables
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Check structural validity against a target graph
    ///
    /// Chains must be pairwise disjoint, reference only qubits the target
    /// has, and each induce a connected subgraph.
    pub fn validate(&self, target: &Topology) -> crate::Result<()> {
        let mut owner: BTreeMap<usize, Variable> = BTreeMap::new();
        for (&var, chain) in &self.chains {
            for &qubit in chain {
                if !target.contains(qubit) {
                    return Err(EmbedError::UnknownQubit { variable: var, qubit });
                }
                if let Some(&first) = owner.get(&qubit) {
                    return Err(EmbedError::OverlappingChains {
                        qubit,
                        first,
                        second: var,
                    });
                }
                owner.insert(qubit, var);
            }
            if !target.is_connected_subset(chain) {
                return Err(EmbedError::DisconnectedChain(var));
            }
        }
        Ok(())
    }
}

/// Source of embeddings for a given problem and target graph
///
/// Decouples the arithmetic core from any particular embedding-search
/// algorithm: a fixed hand-picked map, an external search tool, or a test
/// stub all plug in the same way.
pub trait EmbeddingProvider {
    /// Produce an embedding of `source`'s variables into `target`
    fn embed(&self, source: &IsingModel, target: &Topology) -> crate::Result<Embedding>;
}

/// A caller-supplied, fixed embedding
///
/// The provider validates the stored embedding against the target and checks
/// that every source variable is covered.
#[derive(Debug, Clone)]
pub struct FixedEmbedding {
    embedding: Embedding,
}

impl FixedEmbedding {
    /// Wrap a pre-computed embedding
    pub fn new(embedding: Embedding) -> Self {
        Self { embedding }
    }
}

impl EmbeddingProvider for FixedEmbedding {
    fn embed(&self, source: &IsingModel, target: &Topology) -> crate::Result<Embedding> {
        self.embedding.validate(target)?;
        for var in source.variables() {
            if self.embedding.chain(var).is_none() {
                return Err(EmbedError::MissingChain(var));
            }
        }
        Ok(self.embedding.clone())
    }
}

/// Trivial provider mapping variable `i` to the single qubit `i`
///
/// Suitable when the target graph already carries a coupler for every
/// logical interaction (e.g. a fully connected test topology).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEmbedder;

impl EmbeddingProvider for IdentityEmbedder {
    fn embed(&self, source: &IsingModel, target: &Topology) -> crate::Result<Embedding> {
        let embedding = Embedding::from_chains(
            source.variables().into_iter().map(|var| (var, [var.index()])),
        )?;
        embedding.validate(target)?;
        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_chain_rejected() {
        let result = Embedding::from_chains([(var(1), Vec::<usize>::new())]);
        assert!(matches!(result, Err(EmbedError::EmptyChain(v)) if v == var(1)));
    }

    #[test]
    fn test_validate_accepts_lifecycle_embedding() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        assert!(lifecycle_embedding().validate(&target).is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let embedding =
            Embedding::from_chains([(var(1), vec![1, 2]), (var(2), vec![2])]).unwrap();
        assert!(matches!(
            embedding.validate(&target),
            Err(EmbedError::OverlappingChains { qubit: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_disconnected_chain() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let embedding = Embedding::from_chains([(var(1), vec![1, 3])]).unwrap();
        assert!(matches!(
            embedding.validate(&target),
            Err(EmbedError::DisconnectedChain(v)) if v == var(1)
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_qubit() {
        let target = Topology::cycle(&[1, 2, 3, 4]);
        let embedding = Embedding::from_chains([(var(1), vec![9])]).unwrap();
        assert!(matches!(
            embedding.validate(&target),
            Err(EmbedError::UnknownQubit { qubit: 9, .. })
        ));
    }

    #[test]
    fn test_fixed_provider_requires_full_cover() {
        let mut source = IsingModel::new();
        source.add_linear(var(1), 1.0);
        source.add_linear(var(5), 1.0);

        let target = Topology::cycle(&[1, 2, 3, 4]);
        let provider = FixedEmbedding::new(lifecycle_embedding());
        assert!(matches!(
            provider.embed(&source, &target),
            Err(EmbedError::MissingChain(v)) if v == var(5)
        ));
    }

    #[test]
    fn test_identity_embedder() {
        let mut source = IsingModel::new();
        source.add_quadratic(var(0), var(1), 1.0).unwrap();

        let target = Topology::complete(3);
        let embedding = IdentityEmbedder.embed(&source, &target).unwrap();
        assert_eq!(embedding.chain(var(0)), Some(&BTreeSet::from([0])));
        assert_eq!(embedding.chain(var(1)), Some(&BTreeSet::from([1])));
    }
}
