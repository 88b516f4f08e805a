//! Minor embedding and physical-model arithmetic
//!
//! A logical Ising problem rarely matches the connectivity of annealing
//! hardware. This crate provides the pieces that bridge the two:
//! - [`Topology`]: the physical qubit graph of a target device
//! - [`Embedding`]: logical variable -> chain of physical qubits
//! - [`embed_ising`]: rewrite (h, J) onto the physical graph
//! - [`PhysicalModel`]: the hardware-ready "QMI" representation, with
//!   range-aware scale normalization
//! - [`resolve_chains`]: turn a physical sample back into a logical one,
//!   detecting and resolving chain breaks
//!
//! Automatic embedding *search* is out of scope; embeddings come from an
//! injected [`EmbeddingProvider`].

pub mod chain;
pub mod embed;
pub mod embedding;
pub mod error;
pub mod topology;

pub use chain::{resolve_chains, ChainBreakStats, ChainResolution};
pub use embed::{embed_ising, PhysicalModel, ScaleRanges, DEFAULT_CHAIN_STRENGTH};
pub use embedding::{Embedding, EmbeddingProvider, FixedEmbedding, IdentityEmbedder};
pub use error::EmbedError;
pub use topology::Topology;

/// Type alias for results in annealq-embed
pub type Result<T> = std::result::Result<T, EmbedError>;
