//! Board cells and jump geometry.
//!
//! ## Layout
//!
//! ```text
//!             0,0
//!          1,0   1,1
//!       2,0   2,1   2,2
//!    3,0   3,1   3,2   3,3
//! 4,0   4,1   4,2   4,3   4,4
//! ```
//!
//! A cell is addressed by `(row, offset)` with `offset <= row`. Each cell has
//! a fixed set of jump destinations: cells two steps away along a row or
//! either diagonal. The set depends only on the grid, never on which cells
//! hold pegs, so it is computed once for all 15 cells and shared.
//!
//! ## Usage
//!
//! ```
//! use peg_jump::core::Position;
//!
//! let apex = Position::new(0, 0);
//! let jumps: Vec<_> = apex.jumps().to_vec();
//! assert_eq!(jumps, vec![Position::new(2, 0), Position::new(2, 2)]);
//!
//! // The captured cell sits halfway between source and destination.
//! let from = Position::new(2, 0);
//! assert_eq!((apex - from) / 2 + from, Position::new(1, 0));
//! ```

use std::ops::{Add, Div, Sub};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::PegError;

/// Number of rows on the board.
pub const ROWS: u8 = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (ROWS as usize * (ROWS as usize + 1)) / 2;

/// Jump destinations of a single cell. No cell on the 5-row board has more
/// than four.
pub type Jumps = SmallVec<[Position; 4]>;

/// One cell of the triangular board.
///
/// Ordering is lexicographic by `(row, offset)`, i.e. row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    offset: u8,
}

impl Position {
    /// Create a position.
    ///
    /// Panics when `(row, offset)` is off the board. Use [`Position::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(row: u8, offset: u8) -> Self {
        assert!(row < ROWS && offset <= row, "Position outside the board");
        Self { row, offset }
    }

    /// Create a position, rejecting cells off the board.
    pub fn try_new(row: u8, offset: u8) -> Result<Self, PegError> {
        if Self::in_bounds(row, offset) {
            Ok(Self { row, offset })
        } else {
            Err(PegError::OutOfBounds { row, offset })
        }
    }

    /// Check whether `(row, offset)` names a cell on the board.
    #[must_use]
    pub const fn in_bounds(row: u8, offset: u8) -> bool {
        row < ROWS && offset <= row
    }

    /// Row, `0..5` from the apex down.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Offset within the row, `0..=row` from the left.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// Row-major index in `0..CELL_COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        let row = self.row as usize;
        row * (row + 1) / 2 + self.offset as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().nth(index)
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..=row).map(move |offset| Position { row, offset }))
    }

    /// Cells reachable by a single jump, assuming the cells exist.
    ///
    /// Occupancy is not considered. The returned slice is shared by every
    /// `Position` with the same coordinates.
    #[must_use]
    pub fn jumps(self) -> &'static [Position] {
        &jump_table()[self.index()]
    }

    /// Check whether `other` is one jump away.
    #[must_use]
    pub fn can_jump_to(self, other: Position) -> bool {
        self.jumps().contains(&other)
    }

    /// Cell between `self` and a jump destination `to`.
    ///
    /// Only meaningful when `to` is in [`Position::jumps`].
    #[must_use]
    pub fn midpoint(self, to: Position) -> Position {
        (self - to) / 2 + to
    }

    /// Scan the grid for this cell's jump destinations.
    ///
    /// Two cells are linked when they are two rows apart with offsets equal
    /// or two apart, or in the same row with offsets two apart. The numeric
    /// rule also admits (2,2)-(4,0), which lie on no line of the grid.
    #[must_use]
    pub fn derive_jumps(self) -> Jumps {
        Self::all().filter(|&other| links(self, other)).collect()
    }
}

fn links(a: Position, b: Position) -> bool {
    let rows = a.row.abs_diff(b.row);
    let offsets = a.offset.abs_diff(b.offset);
    let numeric = (rows == 2 && (offsets == 0 || offsets == 2)) || (rows == 0 && offsets == 2);
    numeric && !is_broken_diagonal(a, b)
}

fn is_broken_diagonal(a: Position, b: Position) -> bool {
    const LEFT: Position = Position::new(2, 2);
    const RIGHT: Position = Position::new(4, 0);
    (a == LEFT && b == RIGHT) || (a == RIGHT && b == LEFT)
}

fn jump_table() -> &'static [Jumps] {
    static TABLE: OnceLock<Vec<Jumps>> = OnceLock::new();
    TABLE.get_or_init(|| Position::all().map(Position::derive_jumps).collect())
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PegError;

    fn try_from((row, offset): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(row, offset)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.offset)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.offset)
    }
}

/// Signed difference between two positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Delta {
    /// Row difference.
    pub rows: i8,
    /// Offset difference.
    pub offsets: i8,
}

impl Sub for Position {
    type Output = Delta;

    fn sub(self, other: Position) -> Delta {
        Delta {
            rows: self.row as i8 - other.row as i8,
            offsets: self.offset as i8 - other.offset as i8,
        }
    }
}

impl Add for Delta {
    type Output = Delta;

    fn add(self, other: Delta) -> Delta {
        Delta {
            rows: self.rows + other.rows,
            offsets: self.offsets + other.offsets,
        }
    }
}

impl Div<i8> for Delta {
    type Output = Delta;

    fn div(self, divisor: i8) -> Delta {
        Delta {
            rows: self.rows / divisor,
            offsets: self.offsets / divisor,
        }
    }
}

impl Add<Position> for Delta {
    type Output = Position;

    /// Panics if the result leaves the board.
    fn add(self, pos: Position) -> Position {
        pos + self
    }
}

impl Add<Delta> for Position {
    type Output = Position;

    /// Panics if the result leaves the board.
    fn add(self, delta: Delta) -> Position {
        let row = self.row as i8 + delta.rows;
        let offset = self.offset as i8 + delta.offsets;
        assert!(row >= 0 && offset >= 0, "Position outside the board");
        Position::new(row as u8, offset as u8)
    }
}
