//! Maximum cut on a small network
//!
//! Splits a six-edge graph into two sets with as many crossing edges as
//! possible, the classic way to build redundancy into a network: the more
//! connections between the two groups, the more failures it tolerates.
//!
//! Run with: cargo run --example max_cut

use annealq_problems::max_cut::{decode_cut, max_cut_qubo};
use annealq_problems::ProblemGraph;
use annealq_sampler::{SampleParams, Sampler, SimulatedAnnealingSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = ProblemGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 5)]);
    let qubo = max_cut_qubo(&graph);

    let sampler = SimulatedAnnealingSampler::new();
    let params = SampleParams::new()
        .with_num_reads(10)
        .with_label("Example - Maximum Cut");
    let sampleset = sampler.sample_qubo(&qubo, &params)?;

    println!("{}", "-".repeat(60));
    println!("{:>15}{:>15}{:^15}{:^15}", "Set 0", "Set 1", "Energy", "Cut Size");
    println!("{}", "-".repeat(60));
    for record in sampleset.iter() {
        let cut = decode_cut(&graph, &record.sample);
        println!(
            "{:>15}{:>15}{:^15}{:^15}",
            format!("{:?}", cut.set0),
            format!("{:?}", cut.set1),
            record.energy,
            cut.cut_size
        );
    }

    Ok(())
}
