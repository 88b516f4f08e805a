//! Samplers for quadratic models
//!
//! This crate provides the execution seam of the annealq toolkit:
//! - [`Sampler`]: a unified trait for anything that can draw low-energy
//!   samples from an Ising/QUBO model
//! - [`SimulatedAnnealingSampler`]: a local Metropolis annealer (feature
//!   `local`, on by default)
//! - [`RemoteSampler`]: a blocking client for an annealing cloud service
//!   (feature `cloud`)
//! - [`EmbeddingComposite`]: wraps a sampler with embedding application,
//!   scale normalization, and chain resolution
//! - [`QuboLifecycle`]: the full QUBO -> Ising -> QMI -> sample -> QUBO
//!   round trip as a staged pipeline with named checkpoints
//!
//! # Example
//!
//! ```
//! use annealq_model::{QuboModel, Variable};
//! use annealq_sampler::{Sampler, SampleParams, SimulatedAnnealingSampler};
//!
//! let mut qubo = QuboModel::new();
//! qubo.add_linear(Variable::new(0), -1.0);
//!
//! let sampler = SimulatedAnnealingSampler::seeded(7);
//! let params = SampleParams::new().with_num_reads(10);
//! let best = sampler.sample_qubo(&qubo, &params).unwrap();
//! assert_eq!(best.first().unwrap().sample.value(Variable::new(0)), Some(1));
//! ```

pub mod composite;
pub mod error;
pub mod lifecycle;
pub mod params;
pub mod sampler;

#[cfg(feature = "local")]
pub mod local;

#[cfg(feature = "cloud")]
pub mod remote;

pub use composite::EmbeddingComposite;
pub use error::SamplerError;
pub use lifecycle::{Checkpoint, LifecycleOutcome, QuboLifecycle};
pub use params::SampleParams;
pub use sampler::{Sampler, SolverProperties};

#[cfg(feature = "local")]
pub use local::{SimulatedAnnealingConfig, SimulatedAnnealingSampler};

#[cfg(feature = "cloud")]
pub use remote::{JobStatus, RemoteConfig, RemoteSampler};

/// Type alias for results in annealq-sampler
pub type Result<T> = std::result::Result<T, SamplerError>;
