//! Embedding composite: a sampler wrapper that handles the physical layer
//!
//! Wraps any [`Sampler`] together with an [`EmbeddingProvider`], applying the
//! full physical workflow on every request: embed the logical model onto the
//! target graph, normalize into the device ranges, sample, resolve chains,
//! and recompute logical energies. Problem code keeps talking in logical
//! variables; the composite owns every physical detail.

use crate::params::SampleParams;
use crate::sampler::{Sampler, SolverProperties};
use annealq_embed::{
    embed_ising, resolve_chains, ChainBreakStats, ChainResolution, EmbeddingProvider,
    Topology, DEFAULT_CHAIN_STRENGTH,
};
use annealq_model::{IsingModel, SampleRecord, SampleSet};

/// A sampler that embeds logical problems onto a physical target graph
pub struct EmbeddingComposite<S, P> {
    sampler: S,
    provider: P,
    target: Topology,
    chain_strength: f64,
    resolution: ChainResolution,
    properties: SolverProperties,
    name: String,
}

impl<S: Sampler, P: EmbeddingProvider> EmbeddingComposite<S, P> {
    /// Wrap a sampler with an embedding provider and an explicit target graph
    pub fn new(sampler: S, provider: P, target: Topology) -> Self {
        let name = format!("embedding+{}", sampler.name());
        let properties = SolverProperties {
            topology: Some(target.clone()),
            ..sampler.properties().clone()
        };
        Self {
            sampler,
            provider,
            target,
            chain_strength: DEFAULT_CHAIN_STRENGTH,
            resolution: ChainResolution::MajorityVote,
            properties,
            name,
        }
    }

    /// Wrap a sampler, taking the target graph from its advertised properties
    ///
    /// # Errors
    ///
    /// Returns [`crate::SamplerError::Unavailable`] if the sampler does not
    /// advertise a topology.
    pub fn from_properties(sampler: S, provider: P) -> crate::Result<Self> {
        let target = sampler.properties().topology.clone().ok_or_else(|| {
            crate::SamplerError::Unavailable(
                "sampler does not advertise a topology to embed onto".to_string(),
            )
        })?;
        Ok(Self::new(sampler, provider, target))
    }

    /// Set the intra-chain coupling magnitude
    pub fn with_chain_strength(mut self, chain_strength: f64) -> Self {
        self.chain_strength = chain_strength;
        self
    }

    /// Set the chain-resolution policy
    pub fn with_resolution(mut self, resolution: ChainResolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// The wrapped sampler
    pub fn inner(&self) -> &S {
        &self.sampler
    }

    /// Sample and additionally report aggregate chain-break diagnostics
    ///
    /// The stats accumulate over every distinct physical sample that came
    /// back; a nonzero break rate is the signal to raise the chain strength
    /// or find a better embedding.
    pub fn sample_ising_with_stats(
        &self,
        model: &IsingModel,
        params: &SampleParams,
    ) -> crate::Result<(SampleSet, ChainBreakStats)> {
        params.validate()?;

        let embedding = self.provider.embed(model, &self.target)?;
        let physical = embed_ising(model, &embedding, &self.target, self.chain_strength)?;
        let (scaled, _factor) = physical.normalized(&self.properties.ranges)?;

        let physical_set = self.sampler.sample_ising(&scaled.to_ising(), params)?;

        let mut stats = ChainBreakStats::default();
        let mut records = Vec::with_capacity(physical_set.len());
        for record in physical_set.iter() {
            let (logical, record_stats) =
                resolve_chains(&record.sample, &embedding, self.resolution)?;
            stats.broken_chains += record_stats.broken_chains;
            stats.total_chains += record_stats.total_chains;

            // Physical energies are scaled and carry chain bonds; report the
            // logical model's energy instead
            let energy = model.energy(&logical)?;
            records.push(SampleRecord {
                sample: logical,
                energy,
                num_occurrences: record.num_occurrences,
            });
        }

        Ok((SampleSet::from_records(records), stats))
    }
}

impl<S: Sampler, P: EmbeddingProvider + Send + Sync> Sampler for EmbeddingComposite<S, P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn properties(&self) -> &SolverProperties {
        &self.properties
    }

    fn sample_ising(&self, model: &IsingModel, params: &SampleParams) -> crate::Result<SampleSet> {
        let (set, _stats) = self.sample_ising_with_stats(model, params)?;
        Ok(set)
    }

    fn is_available(&self) -> bool {
        self.sampler.is_available()
    }
}
