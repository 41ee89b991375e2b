//! # maze_pathfinding
//!
//! Shortest paths on square grid mazes with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm). Movement is
//! 4-directional and every step costs the same, so both find paths of equal length. Besides
//! the path, each search reports the order in which cells were settled, which is what a
//! front end needs to animate the search.
//!
//! ```
//! use maze_pathfinding::{run_bfs, Grid};
//!
//! let grid: Grid = "S.#\n..#\n..E".parse().unwrap();
//! let result = run_bfs(&grid);
//! assert_eq!(result.path.len(), 4);
//! ```
pub mod cell;
pub mod error;
pub mod grid;
pub mod request;
mod result;
mod search;
pub mod solver;

pub use cell::CellState;
pub use error::{Endpoint, GridError};
pub use grid::Grid;
pub use request::{Coordinates, Request, Response};
pub use result::SearchResult;
pub use solver::{run_bfs, run_dijkstra, Algorithm, GridSolver};

/// Cost of a single step between two adjacent cells.
pub const UNIT_COST: i32 = 1;
