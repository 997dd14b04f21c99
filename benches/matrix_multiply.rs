//! Benchmarks for sparse matrix multiplication and addition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_matrix::{MultiplyConfig, MultiplyStrategy, SparseMatrix};

/// Banded test matrix with `band` diagonals on each side of the main one
fn create_banded_matrix(n: usize, band: usize) -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        let lo = i.saturating_sub(band);
        let hi = (i + band).min(n - 1);
        for j in lo..=hi {
            matrix.set_element(i, j, (i + j) as i64 % 7 + 1).unwrap();
        }
    }
    matrix
}

fn bench_multiply_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for &n in &[100usize, 400] {
        let a = create_banded_matrix(n, 2);
        let b = create_banded_matrix(n, 2);

        let configs = [
            ("row_indexed", MultiplyConfig::default()),
            (
                "column_scan",
                MultiplyConfig::default().with_strategy(MultiplyStrategy::ColumnScan),
            ),
            (
                "parallel",
                MultiplyConfig::default()
                    .with_parallel(true)
                    .with_parallel_row_threshold(1),
            ),
        ];

        for (name, config) in configs.iter() {
            group.bench_with_input(BenchmarkId::new(*name, n), &n, |bench, _| {
                bench.iter(|| black_box(a.multiply_with(&b, config).unwrap()))
            });
        }
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let a = create_banded_matrix(1000, 3);
    let b = create_banded_matrix(1000, 1);

    c.bench_function("add_banded_1000", |bench| {
        bench.iter(|| black_box(a.add(&b).unwrap()))
    });
}

criterion_group!(benches, bench_multiply_strategies, bench_add);
criterion_main!(benches);
