//! Number partitioning
//!
//! Splits a set of numbers into two subsets with equal (or as close as
//! possible) sums.
//!
//! Run with: cargo run --example number_partitioning

use annealq_problems::number_partitioning::{decode_partition, number_partitioning_qubo};
use annealq_sampler::{SampleParams, Sampler, SimulatedAnnealingSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let values = [25, 7, 13, 31, 42, 17, 21, 10];
    let qubo = number_partitioning_qubo(&values);

    let sampler = SimulatedAnnealingSampler::new();
    let params = SampleParams::new()
        .with_num_reads(1000)
        .with_label("Training - Number Partitioning");
    let sampleset = sampler.sample_qubo(&qubo, &params)?;

    let best = sampleset.first().ok_or("no samples returned")?;
    let partition = decode_partition(&values, &best.sample);

    println!("Values: {:?}", values);
    println!(
        "Set 0: {:?} (sum {})",
        partition.set0,
        partition.set0.iter().sum::<i64>()
    );
    println!(
        "Set 1: {:?} (sum {})",
        partition.set1,
        partition.set1.iter().sum::<i64>()
    );
    println!("Difference: {}", partition.difference);

    Ok(())
}
