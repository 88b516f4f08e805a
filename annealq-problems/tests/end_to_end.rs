//! End-to-end tests: problem formulations driven through real samplers

use annealq_embed::{Embedding, FixedEmbedding, Topology};
use annealq_model::Variable;
use annealq_problems::max_cut::{decode_cut, max_cut_qubo};
use annealq_problems::number_partitioning::{decode_partition, number_partitioning_qubo};
use annealq_problems::scheduling::ShiftScheduling;
use annealq_problems::ProblemGraph;
use annealq_sampler::{EmbeddingComposite, SampleParams, Sampler, SimulatedAnnealingSampler};

#[test]
fn max_cut_through_an_embedding_composite() {
    // Triangle cut, embedded onto a four-qubit ring: node 3 needs a
    // two-qubit chain to reach both neighbors
    let graph = ProblemGraph::from_edges(&[(1, 2), (2, 3), (1, 3)]);
    let qubo = max_cut_qubo(&graph);

    let embedding = Embedding::from_chains([
        (Variable::new(1), vec![1]),
        (Variable::new(2), vec![2]),
        (Variable::new(3), vec![3, 4]),
    ])
    .unwrap();

    let composite = EmbeddingComposite::new(
        SimulatedAnnealingSampler::seeded(31),
        FixedEmbedding::new(embedding),
        Topology::cycle(&[1, 2, 3, 4]),
    )
    .with_chain_strength(4.0);

    let sampleset = composite
        .sample_qubo(&qubo, &SampleParams::new().with_num_reads(50))
        .unwrap();
    let best = sampleset.first().unwrap();
    let cut = decode_cut(&graph, &best.sample);

    // A triangle cuts at most two edges
    assert_eq!(cut.cut_size, 2);
    assert_eq!(best.energy, -2.0);
}

#[test]
fn scheduling_finds_the_preferred_roster() {
    let mut problem = ShiftScheduling::new(2);
    problem.add_employee("Anna", vec![1.0, 5.0]).unwrap();
    problem.add_employee("Bill", vec![5.0, 1.0]).unwrap();
    problem.add_employee("Chris", vec![1.0, 5.0]).unwrap();

    let sampler = SimulatedAnnealingSampler::seeded(41);
    let sampleset = sampler
        .sample_qubo(&problem.to_qubo(), &SampleParams::new().with_num_reads(100))
        .unwrap();
    let roster = problem.decode(&sampleset.first().unwrap().sample);

    assert_eq!(roster.shifts[0], vec!["Anna", "Chris"]);
    assert_eq!(roster.shifts[1], vec!["Bill"]);
    assert!(roster.unassigned.is_empty());
}

#[test]
fn number_partitioning_reaches_a_perfect_split() {
    let values = [4, 2, 7, 1];
    let qubo = number_partitioning_qubo(&values);

    let sampler = SimulatedAnnealingSampler::seeded(53);
    let sampleset = sampler
        .sample_qubo(&qubo, &SampleParams::new().with_num_reads(200))
        .unwrap();
    let partition = decode_partition(&values, &sampleset.first().unwrap().sample);

    // 4 + 2 + 1 == 7
    assert_eq!(partition.difference, 0);
}
