use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dancing_cover::generate::seeded_matrix;
use dancing_cover::Dlx;

fn bench_build(c: &mut Criterion) {
    let matrix = seeded_matrix(42, 2000, 21, 0.5);
    c.bench_function("dlx_build_2000x21", |b| {
        b.iter(|| Dlx::new(black_box(&matrix)).unwrap())
    });
}

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("dlx_count_solutions");
    for &(rows, cols, density) in &[(200, 12, 0.25), (400, 16, 0.2), (500, 30, 0.1)] {
        let matrix = seeded_matrix(42, rows, cols, density);
        let mut dlx = Dlx::new(&matrix).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}@{density}")),
            &(),
            |b, _| b.iter(|| black_box(dlx.count_solutions())),
        );
    }
    group.finish();
}

fn bench_first_solution(c: &mut Criterion) {
    let matrix = seeded_matrix(7, 2000, 21, 0.5);
    let mut dlx = Dlx::new(&matrix).unwrap();
    c.bench_function("dlx_first_solution_2000x21", |b| {
        b.iter(|| black_box(dlx.solve_first()))
    });
}

criterion_group!(benches, bench_build, bench_count, bench_first_solution);
criterion_main!(benches);
