//! Core sampler trait and solver properties

use crate::params::SampleParams;
use annealq_embed::{ScaleRanges, Topology};
use annealq_model::{IsingModel, QuboModel, SampleSet};
use serde::{Deserialize, Serialize};

/// Trait for anything that can draw low-energy samples from a quadratic model
///
/// This provides a unified interface over local heuristics and remote
/// annealing hardware, so problem code never depends on where samples come
/// from.
///
/// # Example
///
/// ```no_run
/// use annealq_sampler::{Sampler, SampleParams};
/// use annealq_model::QuboModel;
///
/// fn best_energy<S: Sampler>(sampler: &S, qubo: &QuboModel) -> f64 {
///     let set = sampler.sample_qubo(qubo, &SampleParams::new()).expect("sampling failed");
///     set.first().expect("no samples").energy
/// }
/// ```
pub trait Sampler: Send + Sync {
    /// Get the sampler name
    fn name(&self) -> &str;

    /// Get the solver's advertised properties
    fn properties(&self) -> &SolverProperties;

    /// Draw samples from an Ising model
    ///
    /// The returned set is ordered best-first. Energies include the model's
    /// offset when computed locally; a remote service's reported energies
    /// are passed through unchanged.
    fn sample_ising(&self, model: &IsingModel, params: &SampleParams) -> crate::Result<SampleSet>;

    /// Draw samples from a QUBO model
    ///
    /// Default implementation converts to Ising, samples, and maps the
    /// results back to the binary domain.
    fn sample_qubo(&self, qubo: &QuboModel, params: &SampleParams) -> crate::Result<SampleSet> {
        let ising = qubo.to_ising();
        let set = self.sample_ising(&ising, params)?;
        Ok(set.map_samples(|sample| sample.to_binary()))
    }

    /// Check if the sampler can be used right now
    fn is_available(&self) -> bool {
        true
    }
}

/// Properties a solver advertises about itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverProperties {
    /// Number of physical qubits (zero means unbounded, e.g. a software
    /// sampler)
    pub num_qubits: usize,

    /// Working graph of the device (None = all-to-all)
    pub topology: Option<Topology>,

    /// Allowed bias/coupling magnitudes
    pub ranges: ScaleRanges,

    /// Maximum reads per request (None = unlimited)
    pub max_num_reads: Option<usize>,
}

impl Default for SolverProperties {
    fn default() -> Self {
        Self::software()
    }
}

impl SolverProperties {
    /// Properties of a software sampler: no topology or size restrictions
    pub fn software() -> Self {
        Self {
            num_qubits: 0,
            topology: None,
            ranges: ScaleRanges::default(),
            max_num_reads: None,
        }
    }

    /// Properties of an annealing device with a fixed working graph
    pub fn hardware(topology: Topology, ranges: ScaleRanges) -> Self {
        Self {
            num_qubits: topology.num_qubits(),
            topology: Some(topology),
            ranges,
            max_num_reads: Some(10_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annealq_model::{Sample, SampleRecord, Variable};

    // Minimal sampler that always answers with a fixed ground state
    struct FixedAnswer;

    impl Sampler for FixedAnswer {
        fn name(&self) -> &str {
            "fixed-answer"
        }

        fn properties(&self) -> &SolverProperties {
            static PROPS: std::sync::OnceLock<SolverProperties> = std::sync::OnceLock::new();
            PROPS.get_or_init(SolverProperties::software)
        }

        fn sample_ising(
            &self,
            model: &IsingModel,
            _params: &SampleParams,
        ) -> crate::Result<SampleSet> {
            let sample = Sample::spin(model.variables().into_iter().map(|v| (v, -1)));
            let energy = model.energy(&sample)?;
            Ok(SampleSet::from_records([SampleRecord {
                sample,
                energy,
                num_occurrences: 1,
            }]))
        }
    }

    #[test]
    fn test_default_qubo_path_converts_domains() {
        let mut qubo = QuboModel::new();
        qubo.add_linear(Variable::new(0), 5.0);

        let set = FixedAnswer.sample_qubo(&qubo, &SampleParams::new()).unwrap();
        let record = set.first().unwrap();
        // Spin -1 maps back to binary 0, and the Ising energy (with offset)
        // equals the QUBO energy of the mapped sample
        assert_eq!(record.sample.value(Variable::new(0)), Some(0));
        assert_eq!(record.energy, qubo.energy(&record.sample).unwrap());
    }

    #[test]
    fn test_hardware_properties() {
        let props = SolverProperties::hardware(Topology::cycle(&[0, 1, 2]), ScaleRanges::default());
        assert_eq!(props.num_qubits, 3);
        assert!(props.topology.is_some());
    }
}
