use std::fmt;
use std::str::FromStr;

use super::board::SIZE;

/// A validated board coordinate. Values can only be constructed inside the
/// 8x8 grid, so cell accessors indexed by `Coord` never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Error returned when a string does not name a cell in `a1`..`h8` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCoordError;

impl Coord {
    /// Create a coordinate, or `None` if either index is off the grid.
    pub fn new(row: usize, col: usize) -> Option<Coord> {
        if row < SIZE && col < SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Iterate every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord { row, col }))
    }

    /// Step one cell along a `(row, col)` delta, or `None` at the board edge.
    pub(crate) fn step(self, (dr, dc): (i32, i32)) -> Option<Coord> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col) {
            Some(Coord {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse console move notation: a lowercase column letter `a`-`h`
    /// followed by a row digit `1`-`8`, e.g. `d3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='h') => c as usize - 'a' as usize,
            _ => return Err(ParseCoordError),
        };
        let row = match chars.next() {
            Some(c @ '1'..='8') => c as usize - '1' as usize,
            _ => return Err(ParseCoordError),
        };
        if chars.next().is_some() {
            return Err(ParseCoordError);
        }
        Ok(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}
