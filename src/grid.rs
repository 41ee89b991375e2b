use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::{info, warn};
use petgraph::unionfind::UnionFind;

use crate::cell::CellState;
use crate::error::{Endpoint, GridError};
use crate::SearchResult;

/// Row and column offsets in the order neighbours are reported: up, down, left, right.
const CARDINAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A square maze built from integer cell codes. Positions are [Point]s with `x` the column and
/// `y` the row.
///
/// The grid is never changed by a search; solvers keep their own visited and distance maps,
/// so the same [Grid] can be searched any number of times. Connected components of open
/// cells are computed once at construction and back the [reachable](Self::reachable) query.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
    start: Point,
    end: Point,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from rows of cell codes. The first [CellState::Start] and
    /// [CellState::End] cells in row-major order are the endpoints; `start` and `end`, given
    /// as `(row, col)`, are only used when the grid carries no such cell.
    pub fn new(
        rows: &[Vec<i64>],
        start: Option<(i64, i64)>,
        end: Option<(i64, i64)>,
    ) -> Result<Grid, GridError> {
        let states = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| CellState::try_from(code))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_states(states, start, end)
    }

    /// Same as [new](Self::new) for already decoded states.
    pub fn from_states(
        rows: Vec<Vec<CellState>>,
        start: Option<(i64, i64)>,
        end: Option<(i64, i64)>,
    ) -> Result<Grid, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != size) {
            return Err(GridError::NotSquare {
                row,
                len: r.len(),
                size,
            });
        }
        let cells: Vec<CellState> = rows.into_iter().flatten().collect();

        let mut found_start = None;
        let mut found_end = None;
        for (row, col) in iproduct!(0..size, 0..size) {
            let slot = match cells[row * size + col] {
                CellState::Start => &mut found_start,
                CellState::End => &mut found_end,
                _ => continue,
            };
            let point = Point::new(col as i32, row as i32);
            match slot {
                None => *slot = Some(point),
                Some(first) => warn!(
                    "Ignoring extra {} marker at ({}, {}), keeping ({}, {})",
                    cells[row * size + col],
                    row,
                    col,
                    first.y,
                    first.x
                ),
            }
        }

        let start = Self::resolve(Endpoint::Start, found_start, start, size)?;
        let end = Self::resolve(Endpoint::End, found_end, end, size)?;
        let mut grid = Grid {
            size,
            cells,
            start,
            end,
            components: UnionFind::new(size * size),
        };
        for (endpoint, point) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.can_move_to(point) {
                return Err(GridError::Blocked {
                    endpoint,
                    row: point.y as usize,
                    col: point.x as usize,
                });
            }
        }
        grid.generate_components();
        info!(
            "Built {}x{} grid, start ({}, {}), end ({}, {})",
            size, size, start.y, start.x, end.y, end.x
        );
        Ok(grid)
    }

    /// Picks the marked cell if there is one, otherwise the bounds-checked override.
    fn resolve(
        endpoint: Endpoint,
        found: Option<Point>,
        requested: Option<(i64, i64)>,
        size: usize,
    ) -> Result<Point, GridError> {
        match (found, requested) {
            (Some(point), Some((row, col))) => {
                if (row, col) != (point.y as i64, point.x as i64) {
                    warn!(
                        "{} cell ({}, {}) in grid overrides requested ({}, {})",
                        endpoint, point.y, point.x, row, col
                    );
                }
                Ok(point)
            }
            (Some(point), None) => Ok(point),
            (None, Some((row, col))) => {
                let bound = size as i64;
                if (0..bound).contains(&row) && (0..bound).contains(&col) {
                    Ok(Point::new(col as i32, row as i32))
                } else {
                    Err(GridError::OutOfBounds {
                        endpoint,
                        row,
                        col,
                        size,
                    })
                }
            }
            (None, None) => Err(GridError::Missing(endpoint)),
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        let bound = self.size as i32;
        point.x >= 0 && point.y >= 0 && point.x < bound && point.y < bound
    }

    /// The decoded input state at `point`, [None] outside the grid.
    pub fn state(&self, point: Point) -> Option<CellState> {
        self.in_bounds(point).then(|| self.cells[self.get_ix_point(&point)])
    }

    pub fn can_move_to(&self, point: Point) -> bool {
        self.state(point).is_some_and(CellState::is_open)
    }

    /// Row-major index of an in-bounds point.
    pub fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.size + point.x as usize
    }

    /// The open cells one step away from `point`, ordered up, down, left, right. Cells already
    /// seen by a search are not filtered out here.
    pub fn neighbours(&self, point: &Point) -> Vec<Point> {
        CARDINAL_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| Point::new(point.x + d_col, point.y + d_row))
            .filter(|&p| self.can_move_to(p))
            .collect()
    }

    /// Links every open cell to its open right and lower neighbours.
    fn generate_components(&mut self) {
        let n = self.size as i32;
        for (y, x) in iproduct!(0..n, 0..n) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.get_ix_point(&point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    let ix = self.get_ix_point(&p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Checks if two open cells share a connected component.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        self.can_move_to(*a)
            && self.can_move_to(*b)
            && self
                .components
                .equiv(self.get_ix_point(a), self.get_ix_point(b))
    }

    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        !self.reachable(a, b)
    }

    /// The input states with a search result drawn over them: visited cells become
    /// [CellState::Visited] and path cells [CellState::Path]. Start and end keep their markers.
    pub fn painted(&self, result: &SearchResult) -> Vec<Vec<CellState>> {
        let mut cells = self.cells.clone();
        let marks = result
            .visited
            .iter()
            .map(|p| (p, CellState::Visited))
            .chain(result.path.iter().map(|p| (p, CellState::Path)));
        for (point, state) in marks {
            if self.in_bounds(*point) && *point != self.start && *point != self.end {
                cells[self.get_ix_point(point)] = state;
            }
        }
        cells[self.get_ix_point(&self.start)] = CellState::Start;
        cells[self.get_ix_point(&self.end)] = CellState::End;
        cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            writeln!(f, "{}", row.iter().join(""))?;
        }
        Ok(())
    }
}

/// Parses the symbols written by [Display](fmt::Display): `.` empty, `#` wall, `S` start,
/// `E` end, `o` visited and `*` path. Surrounding whitespace on each line is ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(CellState::Empty),
                        '#' => Ok(CellState::Wall),
                        'S' => Ok(CellState::Start),
                        'E' => Ok(CellState::End),
                        'o' => Ok(CellState::Visited),
                        '*' => Ok(CellState::Path),
                        other => Err(GridError::InvalidCellState(other as i64)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_states(rows, None, None)
    }
}
