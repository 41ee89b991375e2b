use core::fmt;
use std::str::FromStr;

use log::info;

use crate::{grid::Grid, SearchResult};

pub mod bfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// A search strategy over a [Grid]. Solvers only read the grid; all bookkeeping lives inside
/// a single [solve](Self::solve) call.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Searches from the grid's start to its end.
    fn solve(&self, grid: &Grid) -> SearchResult;
}

/// Finds the shortest path with Dijkstra's algorithm at uniform step cost.
pub fn run_dijkstra(grid: &Grid) -> SearchResult {
    DijkstraSolver.solve(grid)
}

/// Finds the shortest path with breadth-first search.
pub fn run_bfs(grid: &Grid) -> SearchResult {
    BfsSolver.solve(grid)
}

/// The algorithm selector of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Bfs,
}

impl Algorithm {
    pub fn solver(self) -> &'static dyn GridSolver {
        match self {
            Algorithm::Dijkstra => &DijkstraSolver,
            Algorithm::Bfs => &BfsSolver,
        }
    }

    pub fn solve(self, grid: &Grid) -> SearchResult {
        let solver = self.solver();
        info!("Running {} on {}x{} grid", solver.name(), grid.size(), grid.size());
        let result = solver.solve(grid);
        info!(
            "{} visited {} cells, path has {} steps",
            solver.name(),
            result.visited.len(),
            result.path.len()
        );
        result
    }
}

/// Returned when a selector names neither algorithm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bfs" => Ok(Algorithm::Bfs),
            other => Err(UnknownAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Bfs => write!(f, "bfs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_are_exact() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(
            "BFS".parse::<Algorithm>(),
            Err(UnknownAlgorithm("BFS".to_owned()))
        );
        assert!("astar".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Bfs.to_string(), "bfs");
    }

    #[test]
    fn selector_dispatches_to_solver() {
        let grid: Grid = "S.\n.E".parse().unwrap();
        assert_eq!(Algorithm::Bfs.solve(&grid), run_bfs(&grid));
        assert_eq!(Algorithm::Dijkstra.solve(&grid), run_dijkstra(&grid));
        assert_eq!(Algorithm::Dijkstra.solver().name(), "dijkstra");
    }
}
