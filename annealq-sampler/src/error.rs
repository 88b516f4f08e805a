//! Error types for sampler operations

use thiserror::Error;

/// Errors that can occur while sampling
#[derive(Debug, Error)]
pub enum SamplerError {
    /// Invalid sampling parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Embedding, scaling, or chain-resolution failure
    #[error(transparent)]
    Embed(#[from] annealq_embed::EmbedError),

    /// Model construction or evaluation failure
    #[error(transparent)]
    Model(#[from] annealq_model::ModelError),

    /// Credentials rejected by the remote service
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Problem submission rejected
    #[error("Problem submission failed: {0}")]
    SubmissionFailed(String),

    /// Remote solve failed: network or service error
    #[error("Remote solve failure: {0}")]
    RemoteSolveFailure(String),

    /// Job id unknown to the service
    #[error("Job not found: {job_id}")]
    JobNotFound { job_id: String },

    /// Remote solve did not finish within the polling budget
    #[error("Remote solve timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Sampler cannot be used right now
    #[error("Sampler unavailable: {0}")]
    Unavailable(String),

    /// The service returned an empty or malformed answer
    #[error("Malformed answer from service: {0}")]
    MalformedAnswer(String),
}
