//! Number partitioning
//!
//! Split a set of numbers into two subsets with equal sums. With `C` the
//! total sum, minimizing `(C - 2 * sum_selected)^2` drives the selected
//! subset toward half the total; expanding the square gives the QUBO below,
//! whose energy is `difference^2 - C^2`. A perfect partition therefore sits
//! at energy `-C^2`.

use annealq_model::{QuboModel, Sample, Variable};

/// Build the number-partitioning QUBO
///
/// Variable `i` selects `values[i]` into the first subset.
pub fn number_partitioning_qubo(values: &[i64]) -> QuboModel {
    let total: i64 = values.iter().sum();
    let mut qubo = QuboModel::new();

    for (i, &value) in values.iter().enumerate() {
        let vi = Variable::new(i);
        qubo.add_linear(vi, (-4 * total * value + 4 * value * value) as f64);
        for (j, &other) in values.iter().enumerate().skip(i + 1) {
            qubo.add_quadratic(vi, Variable::new(j), (8 * value * other) as f64)
                .expect("distinct indices never form self-loops");
        }
    }

    qubo
}

/// A decoded partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Values selected by the sample
    pub set0: Vec<i64>,
    /// The remaining values
    pub set1: Vec<i64>,
    /// Absolute difference of the two subset sums
    pub difference: i64,
}

/// Read a binary sample back into the two subsets
pub fn decode_partition(values: &[i64], sample: &Sample) -> Partition {
    let mut set0 = Vec::new();
    let mut set1 = Vec::new();
    for (i, &value) in values.iter().enumerate() {
        if sample.value(Variable::new(i)) == Some(1) {
            set0.push(value);
        } else {
            set1.push(value);
        }
    }
    let difference = (set0.iter().sum::<i64>() - set1.iter().sum::<i64>()).abs();
    Partition {
        set0,
        set1,
        difference,
    }
}
