//! The QUBO lifecycle, stage by stage
//!
//! Walks a three-variable QUBO through every stage of the pipeline —
//! conversion, embedding, scaling, sampling, chain resolution — printing
//! the intermediate representation at each named checkpoint.
//!
//! Run with: cargo run --example qubo_lifecycle

use annealq_embed::{Embedding, FixedEmbedding, Topology};
use annealq_model::{QuboModel, Variable};
use annealq_sampler::{Checkpoint, QuboLifecycle, SampleParams, SimulatedAnnealingSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let var = Variable::new;

    // A three-variable problem small enough to follow by hand
    let mut qubo = QuboModel::new();
    qubo.add_linear(var(1), -62.0);
    qubo.add_linear(var(2), -57.0);
    qubo.add_linear(var(3), -59.0);
    qubo.add_quadratic(var(1), var(2), 48.0)?;
    qubo.add_quadratic(var(1), var(3), 48.0)?;
    qubo.add_quadratic(var(2), var(3), 48.0)?;

    // Hand-picked embedding onto a four-qubit ring: variable 3 gets a
    // two-qubit chain
    let embedding = Embedding::from_chains([
        (var(1), vec![1]),
        (var(2), vec![2]),
        (var(3), vec![3, 4]),
    ])?;
    let target = Topology::cycle(&[1, 2, 3, 4]);

    let pipeline = QuboLifecycle::new(
        SimulatedAnnealingSampler::seeded(2024),
        FixedEmbedding::new(embedding),
        target,
    )
    .with_chain_strength(60.0);

    let params = SampleParams::new()
        .with_num_reads(100)
        .with_label("Training - QUBO Lifecycle");

    let outcome = pipeline.run(&qubo, &params, |checkpoint| match checkpoint {
        Checkpoint::Qubo(model) => {
            println!("\nQUBO:\n\n{}", model);
        }
        Checkpoint::Ising(model) => {
            println!("\nConverting QUBO to Ising ...\n\nIsing:\n\n{}", model);
        }
        Checkpoint::Embedded(model) => {
            println!(
                "\nEmbedding logical problem into physical layout ...\n\nQMI (unscaled):\n\n{}",
                model
            );
        }
        Checkpoint::Scaled { model, factor } => {
            println!("\nScaling physical problem by {} ...\n\nQMI (scaled):\n\n{}", factor, model);
        }
        Checkpoint::Sampled(set) => {
            println!("\nBest QMI solution found:\n");
            if let Some(record) = set.first() {
                println!("{}", record.sample);
            }
        }
        Checkpoint::Resolved { sample, stats } => {
            println!("\nConverting QMI solution to Ising ...\n");
            println!("Best Ising solution found:\n\n{}", sample);
            println!("\nChain breaks: {}/{}", stats.broken_chains, stats.total_chains);
        }
        Checkpoint::Solution(sample) => {
            println!("\nConverting Ising solution to QUBO ...\n");
            println!("Best QUBO solution found:\n\n{}", sample);
        }
    })?;

    println!(
        "\nSolution energy: {}",
        qubo.energy(&outcome.solution)?
    );
    Ok(())
}
