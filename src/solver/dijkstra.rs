use grid_util::point::Point;

use crate::search::dijkstra_trace;
use crate::{grid::Grid, solver::GridSolver, SearchResult, UNIT_COST};

/// Dijkstra's algorithm with every step costing [UNIT_COST]. The trace records cells when
/// they are finalized, i.e. popped from the queue for the first time, so cells discovered
/// several times still show up once. Cells at equal distance are finalized in row-major
/// order, which is why the trace generally differs from breadth-first search.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn solve(&self, grid: &Grid) -> SearchResult {
        let goal = grid.end();
        let (visited, path) = dijkstra_trace(
            &grid.start(),
            |node: &Point| {
                grid.neighbours(node)
                    .into_iter()
                    .map(|p| (p, UNIT_COST))
            },
            |node| grid.get_ix_point(node),
            |node| *node == goal,
        );
        SearchResult { visited, path }
    }
}
