//! Local simulated-annealing sampler
//!
//! A software stand-in for annealing hardware: Metropolis sweeps over a
//! geometric inverse-temperature schedule, with each read an independent
//! restart. Reads run in parallel and are deterministic under a fixed seed,
//! which makes this the sampler of choice for tests and offline
//! experimentation.

use crate::params::SampleParams;
use crate::sampler::{Sampler, SolverProperties};
use annealq_model::{IsingModel, Sample, SampleRecord, SampleSet, Variable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Configuration for the simulated annealer
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedAnnealingConfig {
    /// Metropolis sweeps per read
    ///
    /// One sweep proposes a flip of every variable once.
    ///
    /// Default: 1000
    pub sweeps: usize,

    /// Inverse-temperature schedule endpoints (hot, cold)
    ///
    /// If None, a range is derived from the model's coefficients: hot enough
    /// that uphill moves start out likely, cold enough that the smallest
    /// energy step freezes out.
    ///
    /// Default: None (auto)
    pub beta_range: Option<(f64, f64)>,
}

impl Default for SimulatedAnnealingConfig {
    fn default() -> Self {
        Self {
            sweeps: 1000,
            beta_range: None,
        }
    }
}

impl SimulatedAnnealingConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sweeps per read
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Set an explicit inverse-temperature schedule
    pub fn with_beta_range(mut self, hot: f64, cold: f64) -> Self {
        self.beta_range = Some((hot, cold));
        self
    }
}

/// Local Metropolis simulated-annealing sampler
pub struct SimulatedAnnealingSampler {
    config: SimulatedAnnealingConfig,
    default_seed: Option<u64>,
    properties: SolverProperties,
}

impl Default for SimulatedAnnealingSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedAnnealingSampler {
    /// Create a sampler with default configuration
    pub fn new() -> Self {
        Self::with_config(SimulatedAnnealingConfig::default())
    }

    /// Create a sampler with custom configuration
    pub fn with_config(config: SimulatedAnnealingConfig) -> Self {
        Self {
            config,
            default_seed: None,
            properties: SolverProperties::software(),
        }
    }

    /// Create a deterministic sampler
    ///
    /// Request-level seeds in [`SampleParams`] take precedence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: SimulatedAnnealingConfig::default(),
            default_seed: Some(seed),
            properties: SolverProperties::software(),
        }
    }

    /// Derive a beta schedule from the model when none was configured
    fn beta_range(&self, problem: &IndexedProblem) -> (f64, f64) {
        if let Some(range) = self.config.beta_range {
            return range;
        }

        // Largest and smallest possible single-flip energy steps
        let mut max_delta: f64 = 0.0;
        let mut min_gap = f64::INFINITY;
        for i in 0..problem.h.len() {
            let reach: f64 = problem.h[i].abs()
                + problem.neighbors[i].iter().map(|(_, w)| w.abs()).sum::<f64>();
            max_delta = max_delta.max(2.0 * reach);
            if problem.h[i] != 0.0 {
                min_gap = min_gap.min(2.0 * problem.h[i].abs());
            }
            for &(_, w) in &problem.neighbors[i] {
                if w != 0.0 {
                    min_gap = min_gap.min(2.0 * w.abs());
                }
            }
        }

        if max_delta == 0.0 {
            // Flat landscape; any schedule samples uniformly
            return (0.1, 1.0);
        }
        if !min_gap.is_finite() {
            min_gap = max_delta;
        }

        // Start accepting uphill moves about half the time, end with the
        // smallest step frozen out
        ((2.0f64).ln() / max_delta, (1000.0f64).ln() / min_gap)
    }

    fn anneal_one(
        &self,
        problem: &IndexedProblem,
        betas: &[f64],
        rng: &mut StdRng,
    ) -> Vec<i8> {
        let n = problem.h.len();
        let mut spins: Vec<i8> = (0..n).map(|_| if rng.gen::<bool>() { 1 } else { -1 }).collect();

        for &beta in betas {
            for i in 0..n {
                let mut local_field = problem.h[i];
                for &(j, weight) in &problem.neighbors[i] {
                    local_field += weight * spins[j] as f64;
                }
                let delta = -2.0 * spins[i] as f64 * local_field;
                if delta <= 0.0 || rng.gen::<f64>() < (-beta * delta).exp() {
                    spins[i] = -spins[i];
                }
            }
        }

        spins
    }
}

/// Model flattened into index space for the inner loop
struct IndexedProblem {
    vars: Vec<Variable>,
    h: Vec<f64>,
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl IndexedProblem {
    fn build(model: &IsingModel) -> Self {
        let vars: Vec<Variable> = model.variables().into_iter().collect();
        let index: std::collections::BTreeMap<Variable, usize> =
            vars.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let h = vars.iter().map(|&v| model.linear(v)).collect();
        let mut neighbors = vec![Vec::new(); vars.len()];
        for ((u, v), weight) in model.iter_j() {
            let (iu, iv) = (index[&u], index[&v]);
            neighbors[iu].push((iv, weight));
            neighbors[iv].push((iu, weight));
        }

        Self { vars, h, neighbors }
    }
}

impl Sampler for SimulatedAnnealingSampler {
    fn name(&self) -> &str {
        "simulated-annealing"
    }

    fn properties(&self) -> &SolverProperties {
        &self.properties
    }

    fn sample_ising(&self, model: &IsingModel, params: &SampleParams) -> crate::Result<SampleSet> {
        params.validate()?;

        let problem = IndexedProblem::build(model);
        let (hot, cold) = self.beta_range(&problem);

        // Geometric interpolation from hot to cold
        let sweeps = self.config.sweeps.max(1);
        let ratio = (cold / hot).powf(1.0 / (sweeps.saturating_sub(1)).max(1) as f64);
        let betas: Vec<f64> = (0..sweeps).scan(hot, |beta, _| {
            let current = *beta;
            *beta *= ratio;
            Some(current)
        }).collect();

        let base_seed = params.seed.or(self.default_seed);

        let records: Vec<SampleRecord> = (0..params.num_reads)
            .into_par_iter()
            .map(|read| {
                let mut rng = match base_seed {
                    // Decorrelate reads while keeping each one reproducible
                    Some(seed) => StdRng::seed_from_u64(
                        seed.wrapping_add((read as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
                    ),
                    None => StdRng::from_entropy(),
                };
                let spins = self.anneal_one(&problem, &betas, &mut rng);
                let sample =
                    Sample::spin(problem.vars.iter().copied().zip(spins.iter().copied()));
                let energy = model
                    .energy(&sample)
                    .expect("annealer assigns every model variable");
                SampleRecord {
                    sample,
                    energy,
                    num_occurrences: 1,
                }
            })
            .collect();

        Ok(SampleSet::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(i: usize) -> Variable {
        Variable::new(i)
    }

    #[test]
    fn test_finds_single_variable_ground_state() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(0), 2.0);

        let sampler = SimulatedAnnealingSampler::seeded(1);
        let set = sampler
            .sample_ising(&ising, &SampleParams::new().with_num_reads(20))
            .unwrap();
        assert_eq!(set.first().unwrap().sample.value(var(0)), Some(-1));
        assert_eq!(set.first().unwrap().energy, -2.0);
    }

    #[test]
    fn test_ferromagnetic_pair_aligns() {
        let mut ising = IsingModel::new();
        ising.add_quadratic(var(0), var(1), -1.0).unwrap();

        let sampler = SimulatedAnnealingSampler::seeded(3);
        let set = sampler
            .sample_ising(&ising, &SampleParams::new().with_num_reads(20))
            .unwrap();
        let best = &set.first().unwrap().sample;
        assert_eq!(best.value(var(0)), best.value(var(1)));
        assert_eq!(set.first().unwrap().energy, -1.0);
    }

    #[test]
    fn test_seed_makes_runs_reproducible() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(0), 0.5);
        ising.add_quadratic(var(0), var(1), 1.5).unwrap();
        ising.add_quadratic(var(1), var(2), -0.5).unwrap();

        let sampler = SimulatedAnnealingSampler::new();
        let params = SampleParams::new().with_num_reads(8).with_seed(99);
        let a = sampler.sample_ising(&ising, &params).unwrap();
        let b = sampler.sample_ising(&ising, &params).unwrap();

        let collect = |set: &SampleSet| -> Vec<(f64, usize)> {
            set.iter().map(|r| (r.energy, r.num_occurrences)).collect()
        };
        assert_eq!(collect(&a), collect(&b));
    }

    #[test]
    fn test_reads_are_aggregated() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(0), 10.0);

        let sampler = SimulatedAnnealingSampler::seeded(5);
        let set = sampler
            .sample_ising(&ising, &SampleParams::new().with_num_reads(50))
            .unwrap();
        assert_eq!(set.total_occurrences(), 50);
        // Strong bias: every read should land in the same state
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_zero_reads_rejected() {
        let ising = IsingModel::new();
        let sampler = SimulatedAnnealingSampler::new();
        assert!(sampler
            .sample_ising(&ising, &SampleParams::new().with_num_reads(0))
            .is_err());
    }
}
