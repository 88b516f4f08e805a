//! Portfolio selection over ten demo tickers
//!
//! Chooses two stocks maximizing expected monthly returns while keeping
//! pairwise variance low, then repeats the selection under a budget.
//!
//! Run with: cargo run --example stock_selection

use annealq_problems::portfolio::{demo_stocks, PortfolioSelection};
use annealq_sampler::{SampleParams, Sampler, SimulatedAnnealingSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (stocks, variance) = demo_stocks();
    let sampler = SimulatedAnnealingSampler::new();
    let params = SampleParams::new()
        .with_num_reads(500)
        .with_label("Training - Stock Selection");

    // Part 1: returns and variance only
    let problem = PortfolioSelection::new(stocks.clone(), variance.clone(), 2)?;
    let sampleset = sampler.sample_qubo(&problem.to_qubo(), &params)?;
    let best = sampleset.first().ok_or("no samples returned")?;
    let solution = problem.decode(&best.sample);

    println!("\nUnconstrained selection:\n");
    println!(
        "  {:?}  spend {:.2}  expected return {:.2}",
        solution.codes, solution.spend, solution.expected_return
    );

    // Part 2: the same selection under a spending budget
    let problem = PortfolioSelection::new(stocks, variance, 2)?.with_budget(120.0);
    let sampleset = sampler.sample_qubo(&problem.to_qubo(), &params)?;
    let best = sampleset.first().ok_or("no samples returned")?;
    let solution = problem.decode(&best.sample);

    println!("\nBudget-constrained selection (at most 120):\n");
    println!(
        "  {:?}  spend {:.2}  expected return {:.2}",
        solution.codes, solution.spend, solution.expected_return
    );

    Ok(())
}
