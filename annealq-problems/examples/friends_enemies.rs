//! Splitting a signed social network into two factions
//!
//! Generates a random network of friendly and hostile relationships and
//! looks for the split that leaves the fewest relationships frustrated.
//!
//! Run with: cargo run --example friends_enemies

use annealq_problems::social::SocialNetwork;
use annealq_sampler::{SampleParams, Sampler, SimulatedAnnealingSampler};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(7);
    let network = SocialNetwork::random(10, 0.6, &mut rng);

    println!(
        "Network: {} people, {} relationships ({} hostile)",
        network.nodes().count(),
        network.edges().count(),
        network.num_hostile()
    );

    let sampler = SimulatedAnnealingSampler::new();
    let params = SampleParams::new().with_num_reads(100);
    let sampleset = sampler.sample_qubo(&network.to_qubo(), &params)?;

    let best = sampleset.first().ok_or("no samples returned")?;
    let factions = network.decode(&best.sample);

    println!("\nFaction 0: {:?}", factions.faction0);
    println!("Faction 1: {:?}", factions.faction1);
    println!(
        "Frustrated relationships: {}/{}",
        factions.frustrated,
        network.edges().count()
    );

    Ok(())
}
