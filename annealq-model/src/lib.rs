//! Core quadratic-model types for the annealq toolkit
//!
//! This crate provides the fundamental types for formulating binary
//! optimization problems:
//! - [`Variable`]: Type-safe logical variable addressing
//! - [`QuboModel`]: Quadratic Unconstrained Binary Optimization coefficients
//! - [`IsingModel`]: Equivalent spin formulation with linear biases and couplings
//! - [`SampleSet`]: Energy-ordered collections of solver samples
//!
//! # Example
//! ```
//! use annealq_model::{QuboModel, Variable};
//!
//! let mut qubo = QuboModel::new();
//! let (a, b) = (Variable::new(0), Variable::new(1));
//! qubo.add_linear(a, -1.0);
//! qubo.add_linear(b, -1.0);
//! qubo.add_quadratic(a, b, 2.0);
//!
//! let ising = qubo.to_ising();
//! assert_eq!(ising.linear(a), 0.0);
//! ```

pub mod convert;
pub mod error;
pub mod ising;
pub mod qubo;
pub mod sample;
pub mod variable;

// Re-exports for convenience
pub use convert::{ising_to_qubo, qubo_to_ising};
pub use error::ModelError;
pub use ising::IsingModel;
pub use qubo::QuboModel;
pub use sample::{Sample, SampleRecord, SampleSet, Vartype};
pub use variable::Variable;

/// Type alias for results in annealq-model
pub type Result<T> = std::result::Result<T, ModelError>;
