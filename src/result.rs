use grid_util::point::Point;
use serde::{Serialize, Serializer};

/// What a search reports back: the order cells were settled in, which drives the caller's
/// animation, and the route from the cell after the start up to and including the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(serialize_with = "serialize_points")]
    pub visited: Vec<Point>,
    /// Empty if the end could not be reached or coincides with the start.
    #[serde(serialize_with = "serialize_points")]
    pub path: Vec<Point>,
}

impl SearchResult {
    /// Visited cells as `(row, col)` pairs.
    pub fn visited_cells(&self) -> Vec<(usize, usize)> {
        self.visited.iter().map(row_col).collect()
    }

    /// Path cells as `(row, col)` pairs.
    pub fn path_cells(&self) -> Vec<(usize, usize)> {
        self.path.iter().map(row_col).collect()
    }
}

fn row_col(point: &Point) -> (usize, usize) {
    (point.y as usize, point.x as usize)
}

/// Writes points as `[row, col]` pairs.
fn serialize_points<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| [p.y, p.x]))
}
