//! The QUBO lifecycle as a staged pipeline
//!
//! The full round trip — QUBO -> Ising -> embedded QMI -> scaled QMI ->
//! sampleset -> resolved spins -> binary solution — expressed as a sequence
//! of named checkpoints. Each stage yields its intermediate artifact to an
//! observer callback, so a host application decides whether to pause, log,
//! render, or just proceed; the pipeline itself never blocks on input.

use crate::params::SampleParams;
use crate::sampler::Sampler;
use annealq_embed::{
    embed_ising, resolve_chains, ChainBreakStats, ChainResolution, Embedding, EmbeddingProvider,
    PhysicalModel, ScaleRanges, Topology, DEFAULT_CHAIN_STRENGTH,
};
use annealq_model::{IsingModel, QuboModel, Sample, SampleSet};

/// A named intermediate result of the lifecycle pipeline
#[derive(Debug)]
pub enum Checkpoint<'a> {
    /// The logical QUBO as supplied
    Qubo(&'a QuboModel),
    /// After conversion to spin variables
    Ising(&'a IsingModel),
    /// After embedding onto the physical graph (unscaled QMI)
    Embedded(&'a PhysicalModel),
    /// After range normalization
    Scaled {
        model: &'a PhysicalModel,
        factor: f64,
    },
    /// The raw physical sampleset
    Sampled(&'a SampleSet),
    /// Best physical sample resolved to logical spins
    Resolved {
        sample: &'a Sample,
        stats: ChainBreakStats,
    },
    /// The logical solution mapped back to binary values
    Solution(&'a Sample),
}

impl Checkpoint<'_> {
    /// Stage name, stable across releases
    pub fn name(&self) -> &'static str {
        match self {
            Checkpoint::Qubo(_) => "qubo",
            Checkpoint::Ising(_) => "ising",
            Checkpoint::Embedded(_) => "embedded",
            Checkpoint::Scaled { .. } => "scaled",
            Checkpoint::Sampled(_) => "sampled",
            Checkpoint::Resolved { .. } => "resolved",
            Checkpoint::Solution(_) => "solution",
        }
    }
}

/// Everything the pipeline produced, returned after the final stage
#[derive(Debug)]
pub struct LifecycleOutcome {
    /// The Ising conversion of the input
    pub ising: IsingModel,
    /// The embedding used
    pub embedding: Embedding,
    /// Unscaled physical model
    pub physical: PhysicalModel,
    /// Scaled physical model as submitted
    pub scaled: PhysicalModel,
    /// Scale factor applied
    pub scale_factor: f64,
    /// Raw physical sampleset
    pub sampleset: SampleSet,
    /// Best sample resolved to logical spins
    pub best_spins: Sample,
    /// Chain diagnostics for the best sample
    pub chain_stats: ChainBreakStats,
    /// Binary solution to the original QUBO
    pub solution: Sample,
}

/// Staged QUBO-to-solution pipeline
pub struct QuboLifecycle<S, P> {
    sampler: S,
    provider: P,
    target: Topology,
    chain_strength: f64,
    ranges: ScaleRanges,
    resolution: ChainResolution,
}

impl<S: Sampler, P: EmbeddingProvider> QuboLifecycle<S, P> {
    /// Create a pipeline over a sampler, an embedding provider, and a target
    /// graph
    pub fn new(sampler: S, provider: P, target: Topology) -> Self {
        Self {
            sampler,
            provider,
            target,
            chain_strength: DEFAULT_CHAIN_STRENGTH,
            ranges: ScaleRanges::default(),
            resolution: ChainResolution::MajorityVote,
        }
    }

    /// Set the intra-chain coupling magnitude
    pub fn with_chain_strength(mut self, chain_strength: f64) -> Self {
        self.chain_strength = chain_strength;
        self
    }

    /// Set the device bias/coupling ranges
    pub fn with_ranges(mut self, ranges: ScaleRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set the chain-resolution policy
    pub fn with_resolution(mut self, resolution: ChainResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Drive all stages, yielding each checkpoint to the observer
    ///
    /// # Errors
    ///
    /// Any stage failure aborts the pipeline: invalid embeddings and
    /// degenerate models from the physical layer, sampling failures from the
    /// sampler, and chain breaks under a strict resolution policy.
    pub fn run<F>(
        &self,
        qubo: &QuboModel,
        params: &SampleParams,
        mut observer: F,
    ) -> crate::Result<LifecycleOutcome>
    where
        F: FnMut(Checkpoint<'_>),
    {
        observer(Checkpoint::Qubo(qubo));

        let ising = qubo.to_ising();
        observer(Checkpoint::Ising(&ising));

        let embedding = self.provider.embed(&ising, &self.target)?;
        let physical = embed_ising(&ising, &embedding, &self.target, self.chain_strength)?;
        observer(Checkpoint::Embedded(&physical));

        let (scaled, scale_factor) = physical.normalized(&self.ranges)?;
        observer(Checkpoint::Scaled {
            model: &scaled,
            factor: scale_factor,
        });

        let sampleset = self.sampler.sample_ising(&scaled.to_ising(), params)?;
        observer(Checkpoint::Sampled(&sampleset));

        let best_physical = sampleset.first().ok_or_else(|| {
            crate::SamplerError::MalformedAnswer("sampler returned no samples".to_string())
        })?;
        let (best_spins, chain_stats) =
            resolve_chains(&best_physical.sample, &embedding, self.resolution)?;
        observer(Checkpoint::Resolved {
            sample: &best_spins,
            stats: chain_stats,
        });

        let solution = best_spins.to_binary();
        observer(Checkpoint::Solution(&solution));

        Ok(LifecycleOutcome {
            ising,
            embedding,
            physical,
            scaled,
            scale_factor,
            sampleset,
            best_spins,
            chain_stats,
            solution,
        })
    }
}
