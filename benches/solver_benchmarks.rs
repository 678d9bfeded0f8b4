use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use necto::{
    problems::n_queens::NQueens,
    solver::strategy::{BacktrackingSearch, ForwardCheckingSearch, SearchStrategy},
};

fn bench_n_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens");

    for n in [4usize, 6] {
        let problem = Arc::new(NQueens::new(n).unwrap());

        group.bench_with_input(BenchmarkId::new("backtracking", n), &n, |b, _| {
            b.iter(|| {
                let mut search = BacktrackingSearch::new(Arc::clone(&problem));
                search.run();
                black_box(search.solutions().len())
            })
        });

        group.bench_with_input(BenchmarkId::new("forward_checking", n), &n, |b, _| {
            b.iter(|| {
                let mut search = ForwardCheckingSearch::new(Arc::clone(&problem));
                search.run();
                black_box(search.solutions().len())
            })
        });

        group.bench_with_input(BenchmarkId::new("mrv_forward_checking", n), &n, |b, _| {
            b.iter(|| {
                let mut search = ForwardCheckingSearch::with_mrv(Arc::clone(&problem));
                search.run();
                black_box(search.solutions().len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_n_queens);
criterion_main!(benches);
