//! QUBO <-> Ising conversion
//!
//! Both directions are the closed-form substitution `x = (1 + s) / 2`.
//! Forward:
//!
//! ```text
//! h[i]    = Q[i,i]/2 + sum_{j != i} Q[i,j]/4
//! J[i,j]  = Q[i,j]/4
//! offset  = sum_i Q[i,i]/2 + sum_{i<j} Q[i,j]/4
//! ```
//!
//! The offset is carried on the [`IsingModel`] so that QUBO and Ising
//! energies agree on corresponding assignments. The transform is a pure
//! linear map with no failure modes; missing keys contribute zero.

use crate::ising::IsingModel;
use crate::qubo::QuboModel;
use crate::sample::{Sample, Vartype};

/// Convert a QUBO model to the equivalent Ising model
pub fn qubo_to_ising(qubo: &QuboModel) -> IsingModel {
    let mut ising = IsingModel::new();

    for (var, bias) in qubo.iter_linear() {
        ising.add_linear(var, bias / 2.0);
        ising.add_offset(bias / 2.0);
    }

    for ((u, v), weight) in qubo.iter_quadratic() {
        let quarter = weight / 4.0;
        // u != v is guaranteed by QuboModel's canonical storage
        ising
            .add_quadratic(u, v, quarter)
            .expect("canonical QUBO pair is never a self-loop");
        ising.add_linear(u, quarter);
        ising.add_linear(v, quarter);
        ising.add_offset(quarter);
    }

    ising
}

/// Convert an Ising model back to a QUBO model
///
/// Returns the QUBO together with the constant `offset` such that
/// `qubo.energy(x) + offset == ising.energy(s)` for corresponding
/// assignments.
pub fn ising_to_qubo(ising: &IsingModel) -> (QuboModel, f64) {
    let mut qubo = QuboModel::new();

    for (var, bias) in ising.iter_h() {
        qubo.add_linear(var, 2.0 * bias);
    }

    for ((u, v), weight) in ising.iter_j() {
        qubo.add_quadratic(u, v, 4.0 * weight)
            .expect("canonical Ising pair is never a self-loop");
        qubo.add_linear(u, -2.0 * weight);
        qubo.add_linear(v, -2.0 * weight);
    }

    // Forward-converting the rebuilt QUBO reproduces (h, J); the residual
    // constant keeps total energies equal.
    let forward_offset: f64 = qubo.iter_linear().map(|(_, bias)| bias / 2.0).sum::<f64>()
        + qubo.iter_quadratic().map(|(_, weight)| weight / 4.0).sum::<f64>();

    (qubo, ising.offset() - forward_offset)
}

/// Map a spin sample to the binary domain (`-1 -> 0`, `+1 -> 1`)
pub fn spin_to_binary(sample: &Sample) -> Sample {
    debug_assert_eq!(sample.vartype(), Vartype::Spin);
    sample.to_binary()
}

/// Map a binary sample to the spin domain (`0 -> -1`, `1 -> +1`)
pub fn binary_to_spin(sample: &Sample) -> Sample {
    debug_assert_eq!(sample.vartype(), Vartype::Binary);
    sample.to_spin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;
    use approx::assert_abs_diff_eq;

    fn var(i: usize) -> Variable {
        Variable::new(i)
    }

    /// Three-variable QUBO from the lifecycle walkthrough demo
    fn lifecycle_qubo() -> QuboModel {
        let mut q = QuboModel::new();
        q.add_linear(var(1), -62.0);
        q.add_linear(var(2), -57.0);
        q.add_linear(var(3), -59.0);
        q.add_quadratic(var(1), var(2), 48.0).unwrap();
        q.add_quadratic(var(1), var(3), 48.0).unwrap();
        q.add_quadratic(var(2), var(3), 48.0).unwrap();
        q
    }

    #[test]
    fn test_lifecycle_conversion_literals() {
        let ising = qubo_to_ising(&lifecycle_qubo());

        // h[i] = Q[i,i]/2 + sum_j Q[i,j]/4
        assert_abs_diff_eq!(ising.linear(var(1)), -62.0 / 2.0 + (48.0 + 48.0) / 4.0);
        assert_abs_diff_eq!(ising.linear(var(1)), -7.0);
        assert_abs_diff_eq!(ising.linear(var(2)), -4.5);
        assert_abs_diff_eq!(ising.linear(var(3)), -5.5);

        // J[i,j] = Q[i,j]/4
        assert_abs_diff_eq!(ising.quadratic(var(1), var(2)), 12.0);
        assert_abs_diff_eq!(ising.quadratic(var(1), var(3)), 12.0);
        assert_abs_diff_eq!(ising.quadratic(var(2), var(3)), 12.0);

        // offset = sum Q[i,i]/2 + sum Q[i,j]/4
        assert_abs_diff_eq!(ising.offset(), -89.0 + 36.0);
    }

    #[test]
    fn test_energies_agree_across_conversion() {
        let qubo = lifecycle_qubo();
        let ising = qubo_to_ising(&qubo);

        for bits in 0u8..8 {
            let sample = Sample::binary([
                (var(1), (bits & 1) as i8),
                (var(2), ((bits >> 1) & 1) as i8),
                (var(3), ((bits >> 2) & 1) as i8),
            ]);
            let spins = binary_to_spin(&sample);
            assert_abs_diff_eq!(
                qubo.energy(&sample).unwrap(),
                ising.energy(&spins).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_round_trip_reproduces_structure() {
        let qubo = lifecycle_qubo();
        let ising = qubo_to_ising(&qubo);
        let (back, offset) = ising_to_qubo(&ising);

        for (v, bias) in qubo.iter_linear() {
            assert_abs_diff_eq!(back.linear(v), bias, epsilon = 1e-12);
        }
        for ((u, v), weight) in qubo.iter_quadratic() {
            assert_abs_diff_eq!(back.quadratic(u, v), weight, epsilon = 1e-12);
        }
        // Conversion started from a plain QUBO, so no residual constant
        assert_abs_diff_eq!(offset, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reverse_offset_tracks_energy() {
        let mut ising = IsingModel::new();
        ising.add_linear(var(1), -1.5);
        ising.add_quadratic(var(1), var(2), 0.75).unwrap();
        ising.add_offset(3.0);

        let (qubo, offset) = ising_to_qubo(&ising);

        for bits in 0u8..4 {
            let sample = Sample::binary([
                (var(1), (bits & 1) as i8),
                (var(2), ((bits >> 1) & 1) as i8),
            ]);
            let spins = binary_to_spin(&sample);
            assert_abs_diff_eq!(
                qubo.energy(&sample).unwrap() + offset,
                ising.energy(&spins).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_spin_binary_mapping() {
        let spins = Sample::spin([(var(1), -1), (var(2), 1)]);
        let bits = spin_to_binary(&spins);
        assert_eq!(bits.value(var(1)), Some(0));
        assert_eq!(bits.value(var(2)), Some(1));
        assert_eq!(binary_to_spin(&bits), spins);
    }
}
