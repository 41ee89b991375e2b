/// Fuzzes both solvers on many random grids: paths must be valid, shortest, agree between the
/// two algorithms and exist exactly when the end shares a connected component with the start.
use grid_util::point::Point;
use maze_pathfinding::{run_bfs, run_dijkstra, CellState, Grid, SearchResult};
use rand::prelude::*;
use std::collections::{HashSet, VecDeque};

fn random_codes(n: usize, rng: &mut StdRng) -> Vec<Vec<i64>> {
    let mut codes: Vec<Vec<i64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_bool(0.4) as i64).collect())
        .collect();
    codes[0][0] = CellState::Start.code() as i64;
    codes[n - 1][n - 1] = CellState::End.code() as i64;
    codes
}

fn visualize_grid(grid: &Grid) {
    println!("{grid}");
}

/// Step distance from start to end by flood fill, independent of the solvers.
fn flood_distance(grid: &Grid) -> Option<usize> {
    let mut seen = HashSet::from([grid.start()]);
    let mut queue = VecDeque::from([(grid.start(), 0)]);
    while let Some((p, d)) = queue.pop_front() {
        if p == grid.end() {
            return Some(d);
        }
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let q = Point::new(p.x + dx, p.y + dy);
            if grid.can_move_to(q) && seen.insert(q) {
                queue.push_back((q, d + 1));
            }
        }
    }
    None
}

fn assert_consistent(grid: &Grid, result: &SearchResult) {
    let visited: HashSet<Point> = result.visited.iter().copied().collect();
    assert_eq!(visited.len(), result.visited.len(), "duplicate in trace");
    assert_eq!(result.visited.first(), Some(&grid.start()));
    for p in &result.path {
        assert!(visited.contains(p), "path cell {p:?} never visited");
        assert!(grid.can_move_to(*p));
    }
    let mut previous = grid.start();
    for p in &result.path {
        assert_eq!((p.x - previous.x).abs() + (p.y - previous.y).abs(), 1);
        previous = *p;
    }
    if !result.path.is_empty() {
        assert_eq!(result.path.last(), Some(&grid.end()));
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = Grid::new(&random_codes(N, &mut rng), None, None).unwrap();
        let reachable = grid.reachable(&grid.start(), &grid.end());
        let distance = flood_distance(&grid);
        for result in [run_bfs(&grid), run_dijkstra(&grid)] {
            assert_consistent(&grid, &result);
            // Show the grid if the outcome disagrees with the components
            if result.path.is_empty() == reachable {
                visualize_grid(&grid);
            }
            assert_eq!(!result.path.is_empty(), reachable);
            assert_eq!(result.path.len(), distance.unwrap_or(0));
        }
    }
}

#[test]
fn unreachable_end_visits_start_component() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(1);
    let mut checked = 0;
    while checked < 200 {
        let grid = Grid::new(&random_codes(N, &mut rng), None, None).unwrap();
        if grid.reachable(&grid.start(), &grid.end()) {
            continue;
        }
        let component: HashSet<Point> = (0..N as i32)
            .flat_map(|y| (0..N as i32).map(move |x| Point::new(x, y)))
            .filter(|p| grid.reachable(&grid.start(), p))
            .collect();
        for result in [run_bfs(&grid), run_dijkstra(&grid)] {
            assert!(result.path.is_empty());
            let visited: HashSet<Point> = result.visited.iter().copied().collect();
            assert_eq!(visited, component);
        }
        checked += 1;
    }
}

#[test]
fn deterministic_across_fresh_grids() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..100 {
        let codes = random_codes(12, &mut rng);
        let first = Grid::new(&codes, None, None).unwrap();
        let second = Grid::new(&codes, None, None).unwrap();
        assert_eq!(run_bfs(&first), run_bfs(&second));
        assert_eq!(run_dijkstra(&first), run_dijkstra(&second));
        // Searching leaves the grid usable for another run
        assert_eq!(run_bfs(&first), run_bfs(&first));
    }
}

#[test]
fn wall_row_separates_start_and_end() {
    let grid: Grid = "S...\n....\n####\n...E".parse().unwrap();
    for result in [run_bfs(&grid), run_dijkstra(&grid)] {
        assert!(result.path.is_empty());
        assert_eq!(result.visited.len(), 8);
    }
}
