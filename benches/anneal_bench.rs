//! Criterion benchmarks for the annealing engine.
//!
//! Synthetic rosters with a ring of exclusion pairs, sized to measure how
//! the loop scales with roster size and group count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grouper::anneal::{AnnealConfig, AnnealRunner, GroupingProblem};
use grouper::solution::{ExclusionPair, StudentId};

fn ring_problem(num_students: u64, num_groups: usize, num_pairs: u64) -> GroupingProblem {
    let students: Vec<StudentId> = (1..=num_students).map(StudentId::new).collect();
    let pairs: Vec<ExclusionPair> = (1..=num_pairs)
        .map(|i| ExclusionPair::new(i, i % num_students + 1))
        .collect();
    GroupingProblem::new(students, num_groups, pairs).expect("valid instance")
}

fn bench_anneal_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);

    for &(num_students, num_groups) in &[(20u64, 4usize), (60, 6), (200, 10)] {
        let problem = ring_problem(num_students, num_groups, num_students / 4);
        let config = AnnealConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_students),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = AnnealRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_anneal_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_steps");
    group.sample_size(10);

    let problem = ring_problem(60, 6, 15);
    for &steps in &[1000usize, 5000, 20000] {
        let config = AnnealConfig::default().with_seed(42).with_steps(steps);
        group.bench_with_input(
            BenchmarkId::from_parameter(steps),
            &(problem.clone(), config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = AnnealRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_anneal_run, bench_anneal_steps);
criterion_main!(benches);
