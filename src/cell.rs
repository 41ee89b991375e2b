use core::fmt;

use crate::error::GridError;

/// The role of a single grid position. The discriminants are the integer codes used by the
/// request format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
    Visited = 4,
    Path = 5,
}

impl CellState {
    /// Everything but a wall can be stepped on. [CellState::Visited] and [CellState::Path]
    /// only ever come from earlier results being fed back in and count as floor.
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }

    /// The integer code of this state.
    pub fn code(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Visited => 'o',
            CellState::Path => '*',
        }
    }
}

impl TryFrom<i64> for CellState {
    type Error = GridError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::Wall),
            2 => Ok(CellState::Start),
            3 => Ok(CellState::End),
            4 => Ok(CellState::Visited),
            5 => Ok(CellState::Path),
            _ => Err(GridError::InvalidCellState(code)),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_request_encoding() {
        for code in 0..=5i64 {
            let state = CellState::try_from(code).unwrap();
            assert_eq!(i64::from(state.code()), code);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            CellState::try_from(6i64),
            Err(GridError::InvalidCellState(6))
        );
        assert!(CellState::try_from(-1i64).is_err());
    }

    #[test]
    fn only_walls_are_closed() {
        assert!(!CellState::Wall.is_open());
        assert!(CellState::Visited.is_open());
        assert!(CellState::End.is_open());
    }
}
