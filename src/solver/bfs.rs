use grid_util::point::Point;

use crate::search::bfs_trace;
use crate::{grid::Grid, solver::GridSolver, SearchResult};

/// Breadth-first search. A cell is claimed the moment it is queued, so it is queued at most
/// once; the trace records cells as they leave the queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self, grid: &Grid) -> SearchResult {
        let goal = grid.end();
        let (visited, path) = bfs_trace(
            &grid.start(),
            |node: &Point| grid.neighbours(node),
            |node| *node == goal,
        );
        SearchResult { visited, path }
    }
}
