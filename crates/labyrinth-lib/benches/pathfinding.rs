use criterion::{criterion_group, criterion_main, Criterion};
use labyrinth_lib::{load_maze, solve, Grid, SearchAlgorithm};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/corridor.txt")
}

static CORRIDOR: Lazy<Grid> = Lazy::new(|| load_maze(&fixture_path()).expect("fixture loads"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let grid = &*CORRIDOR;

    for algorithm in SearchAlgorithm::ALL {
        c.bench_function(&format!("{algorithm}_corridor"), |b| {
            b.iter(|| {
                let outcome = solve(grid, algorithm).expect("route exists");
                black_box((outcome.solution.len(), outcome.explored_count))
            });
        });
    }
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
