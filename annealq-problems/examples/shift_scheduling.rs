//! Employee shift scheduling with restrictions
//!
//! Eight employees rank four shifts; two of them cannot work together and
//! two would like to. The balancing term spreads staff evenly.
//!
//! Run with: cargo run --example shift_scheduling

use annealq_problems::scheduling::ShiftScheduling;
use annealq_sampler::{SampleParams, Sampler, SimulatedAnnealingSampler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut problem = ShiftScheduling::new(4);

    // Ranked preferences per shift, lower is better; 100 marks a shift the
    // employee cannot work
    problem.add_employee("Anna", vec![1.0, 2.0, 3.0, 100.0])?;
    problem.add_employee("Bill", vec![3.0, 2.0, 1.0, 4.0])?;
    problem.add_employee("Chris", vec![4.0, 2.0, 3.0, 1.0])?;
    problem.add_employee("Diane", vec![4.0, 1.0, 2.0, 3.0])?;
    problem.add_employee("Erica", vec![1.0, 2.0, 3.0, 4.0])?;
    problem.add_employee("Frank", vec![3.0, 2.0, 1.0, 4.0])?;
    problem.add_employee("George", vec![4.0, 2.0, 3.0, 1.0])?;
    problem.add_employee("Harriet", vec![4.0, 1.0, 2.0, 3.0])?;

    // Bill and Frank cannot work during the same shift
    problem.add_same_shift_term("Bill", "Frank", 100.0)?;
    // Erica and Harriet would like to work the same shift
    problem.add_same_shift_term("Erica", "Harriet", -100.0)?;

    let problem = problem.with_balance();
    let qubo = problem.to_qubo();

    let sampler = SimulatedAnnealingSampler::new();
    let params = SampleParams::new()
        .with_num_reads(200)
        .with_label("Training - Employee Scheduling");
    let sampleset = sampler.sample_qubo(&qubo, &params)?;

    let best = sampleset.first().ok_or("no samples returned")?;
    let roster = problem.decode(&best.sample);

    for (shift, employees) in roster.shifts.iter().enumerate() {
        println!("Shift: {} \tEmployee(s): {:?}", shift + 1, employees);
    }
    if !roster.unassigned.is_empty() {
        println!("Constraint violations: {:?}", roster.unassigned);
    }

    Ok(())
}
