//! Error types for embedding operations

use annealq_model::Variable;
use thiserror::Error;

/// Errors that can occur while embedding, scaling, or resolving chains
#[derive(Debug, Error)]
pub enum EmbedError {
    /// All coefficients are zero, so the scale factor is undefined
    #[error("Degenerate model: all coefficients are zero, scale factor undefined")]
    DegenerateModel,

    /// A logical variable has no chain in the embedding
    #[error("Invalid embedding: variable {0} has no chain")]
    MissingChain(Variable),

    /// A chain contains no physical qubits
    #[error("Invalid embedding: chain for variable {0} is empty")]
    EmptyChain(Variable),

    /// Two chains claim the same physical qubit
    #[error("Invalid embedding: qubit {qubit} appears in chains for {first} and {second}")]
    OverlappingChains {
        qubit: usize,
        first: Variable,
        second: Variable,
    },

    /// A chain references a qubit the target graph does not have
    #[error("Invalid embedding: chain for variable {variable} uses qubit {qubit} not present in the target graph")]
    UnknownQubit { variable: Variable, qubit: usize },

    /// A chain is not a connected subgraph of the target
    #[error("Invalid embedding: chain for variable {0} is not connected in the target graph")]
    DisconnectedChain(Variable),

    /// No physical edge is available to carry a logical coupling
    #[error("Invalid embedding: no physical edge available for coupling ({0}, {1})")]
    MissingCoupler(Variable, Variable),

    /// Physical qubits in a chain disagree on their value
    #[error("Chain break: qubits in the chain for variable {variable} disagree")]
    ChainBreak { variable: Variable },

    /// A physical sample does not cover a chain qubit
    #[error("Physical sample is missing a value for qubit {qubit} in the chain for {variable}")]
    MissingQubitValue { variable: Variable, qubit: usize },
}
