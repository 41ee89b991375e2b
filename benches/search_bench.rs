use criterion::{criterion_group, criterion_main, Criterion};
use maze_pathfinding::{
    solver::{bfs::BfsSolver, dijkstra::DijkstraSolver},
    Grid, GridSolver,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut codes: Vec<Vec<i64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.25) as i64).collect())
        .collect();
    codes[0][0] = 2;
    codes[n - 1][n - 1] = 3;
    Grid::new(&codes, None, None).unwrap()
}

fn maze_bench_solver<S: GridSolver>(c: &mut Criterion, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 128] {
        let grids: Vec<Grid> = (0..16).map(|_| random_grid(n, &mut rng)).collect();
        c.bench_function(format!("{n}x{n}, {}", solver.name()).as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(solver.solve(grid));
                }
            })
        });
    }
}

fn maze_bench(c: &mut Criterion) {
    maze_bench_solver(c, BfsSolver);
    maze_bench_solver(c, DijkstraSolver);
}

criterion_group!(benches, maze_bench);
criterion_main!(benches);
