use annealq_model::{qubo_to_ising, QuboModel, Variable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Dense QUBO over `n` variables with every pair coupled
fn dense_qubo(n: usize) -> QuboModel {
    let mut q = QuboModel::new();
    for i in 0..n {
        q.add_linear(Variable::new(i), -(i as f64));
        for j in (i + 1)..n {
            q.add_quadratic(Variable::new(i), Variable::new(j), (i + j) as f64)
                .unwrap();
        }
    }
    q
}

fn benchmark_qubo_to_ising(c: &mut Criterion) {
    let mut group = c.benchmark_group("qubo_to_ising");

    for n in [8, 32, 128] {
        let qubo = dense_qubo(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qubo, |b, qubo| {
            b.iter(|| black_box(qubo_to_ising(qubo)));
        });
    }

    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let qubo = dense_qubo(32);
    let ising = qubo_to_ising(&qubo);

    c.bench_function("ising_to_qubo/32", |b| {
        b.iter(|| black_box(ising.to_qubo()));
    });
}

criterion_group!(benches, benchmark_qubo_to_ising, benchmark_round_trip);
criterion_main!(benches);
