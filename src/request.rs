//! The JSON request and response exchanged with the front end.
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{Algorithm, Grid, GridError, SearchResult};

/// Message sent back for a selector that names no known algorithm.
pub const INVALID_ALGORITHM: &str = "Invalid algorithm";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coordinates {
    pub row: i64,
    pub col: i64,
}

impl From<Coordinates> for (i64, i64) {
    fn from(c: Coordinates) -> (i64, i64) {
        (c.row, c.col)
    }
}

/// A single search request. `start` and `end` are only consulted when the grid has no
/// start or end cell of its own.
#[derive(Clone, Debug, Deserialize)]
pub struct Request {
    pub grid: Vec<Vec<i64>>,
    pub start: Option<Coordinates>,
    pub end: Option<Coordinates>,
    pub algorithm: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Solved(SearchResult),
    Error { error: String },
}

impl Response {
    pub fn error(message: impl Into<String>) -> Response {
        Response::Error {
            error: message.into(),
        }
    }
}

impl Request {
    pub fn from_json(input: &str) -> serde_json::Result<Request> {
        serde_json::from_str(input)
    }

    pub fn build_grid(&self) -> Result<Grid, GridError> {
        Grid::new(
            &self.grid,
            self.start.map(Into::into),
            self.end.map(Into::into),
        )
    }

    /// Runs the requested search. An unknown selector is answered with an error response
    /// without building the grid; an invalid grid is an error.
    pub fn handle(&self) -> Result<Response, GridError> {
        let algorithm = match self.algorithm.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(e) => {
                warn!("{e}");
                return Ok(Response::error(INVALID_ALGORITHM));
            }
        };
        info!(
            "Grid size: {}x{}",
            self.grid.len(),
            self.grid.first().map_or(0, Vec::len)
        );
        let grid = self.build_grid()?;
        Ok(Response::Solved(algorithm.solve(&grid)))
    }
}
