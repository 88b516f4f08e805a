//! Sampling request parameters

/// Parameters for one sampling request
///
/// These travel with the request; sampler-specific knobs (annealing
/// schedules, polling budgets) live on the sampler's own configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleParams {
    /// Number of reads (independent anneals) to draw
    pub num_reads: usize,

    /// Human-readable label attached to the submission
    pub label: Option<String>,

    /// Seed for deterministic local sampling
    ///
    /// Ignored by remote hardware, which is physically stochastic.
    pub seed: Option<u64>,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            num_reads: 100,
            label: None,
            seed: None,
        }
    }
}

impl SampleParams {
    /// Create parameters with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of reads
    pub fn with_num_reads(mut self, num_reads: usize) -> Self {
        self.num_reads = num_reads;
        self
    }

    /// Set the submission label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the seed for deterministic local sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the parameters
    pub fn validate(&self) -> crate::Result<()> {
        if self.num_reads == 0 {
            return Err(crate::SamplerError::InvalidParams(
                "num_reads must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
