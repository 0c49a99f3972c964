//! The peg set: which cells of the triangle currently hold a peg.
//!
//! Backed by `im::OrdSet` so that cloning a board is O(1). The rules
//! functions hand out fresh boards on every successful move, and the solver
//! and playouts clone boards at every step.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::error::PegError;
use super::position::{Position, ROWS};

/// Set of occupied cells.
///
/// Every element is a valid cell by construction of [`Position`].
/// Deserialization goes through [`Board::new`], so an empty list is
/// rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct Board {
    pegs: OrdSet<Position>,
}

impl Board {
    /// Create a board with pegs on `occupied`.
    ///
    /// Duplicate cells collapse. Fails with [`PegError::EmptyBoard`] when no
    /// cell is given.
    pub fn new(occupied: impl IntoIterator<Item = Position>) -> Result<Self, PegError> {
        let pegs: OrdSet<Position> = occupied.into_iter().collect();
        if pegs.is_empty() {
            return Err(PegError::EmptyBoard);
        }
        Ok(Self { pegs })
    }

    /// Create a board from raw `(row, offset)` pairs, rejecting cells off the
    /// board.
    pub fn from_cells(cells: &[(u8, u8)]) -> Result<Self, PegError> {
        let positions = cells
            .iter()
            .map(|&(row, offset)| Position::try_new(row, offset))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(positions)
    }

    /// Board with no pegs.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Board with every cell filled.
    #[must_use]
    pub fn full() -> Self {
        Self {
            pegs: Position::all().collect(),
        }
    }

    /// Board with every cell filled except `hole`.
    #[must_use]
    pub fn with_hole(hole: Position) -> Self {
        let mut board = Self::full();
        board.pegs.remove(&hole);
        board
    }

    /// Check whether `pos` holds a peg.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.pegs.contains(&pos)
    }

    /// Number of pegs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Check whether no pegs remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.pegs.iter().copied()
    }

    /// Empty cells in row-major order.
    pub fn holes(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| !self.contains(pos))
    }

    /// Occupancy bitmask, bit `i` set when the cell with index `i` holds a peg.
    #[must_use]
    pub fn mask(&self) -> u16 {
        self.pegs.iter().fold(0, |mask, pos| mask | (1 << pos.index()))
    }

    /// Rebuild a board from [`Board::mask`].
    #[must_use]
    pub fn from_mask(mask: u16) -> Self {
        Self {
            pegs: Position::all().filter(|pos| mask & (1 << pos.index()) != 0).collect(),
        }
    }

    /// Move the peg on `mv.from` to `mv.to` and remove `captured`.
    ///
    /// Callers check legality first.
    pub(crate) fn jump(&mut self, mv: Move, captured: Position) {
        self.pegs.remove(&mv.from);
        self.pegs.remove(&captured);
        self.pegs.insert(mv.to);
    }

    /// Reverse of [`Board::jump`].
    pub(crate) fn unjump(&mut self, mv: Move, captured: Position) {
        self.pegs.remove(&mv.to);
        self.pegs.insert(captured);
        self.pegs.insert(mv.from);
    }
}

impl TryFrom<Vec<Position>> for Board {
    type Error = PegError;

    fn try_from(cells: Vec<Position>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<Board> for Vec<Position> {
    fn from(board: Board) -> Self {
        board.iter().collect()
    }
}

/// Renders the board as a centered triangle, `o` for a peg and `.` for a
/// hole.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            let indent = (ROWS - 1 - row) as usize;
            write!(f, "{:indent$}", "")?;
            for offset in 0..=row {
                if offset > 0 {
                    write!(f, " ")?;
                }
                let cell = if self.contains(Position::new(row, offset)) { 'o' } else { '.' };
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::CELL_COUNT;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Board::new(Vec::new()), Err(PegError::EmptyBoard));
    }

    #[test]
    fn test_from_cells_rejects_off_board() {
        assert_eq!(
            Board::from_cells(&[(0, 0), (3, 4)]),
            Err(PegError::OutOfBounds { row: 3, offset: 4 })
        );
        assert_eq!(Board::from_cells(&[]), Err(PegError::EmptyBoard));
    }

    #[test]
    fn test_duplicates_collapse() {
        let board = Board::from_cells(&[(1, 0), (1, 0), (2, 2)]).unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_with_hole() {
        let board = Board::with_hole(Position::new(0, 0));
        assert_eq!(board.len(), CELL_COUNT - 1);
        assert!(!board.contains(Position::new(0, 0)));
        assert_eq!(board.holes().collect::<Vec<_>>(), vec![Position::new(0, 0)]);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a = Board::from_cells(&[(4, 4), (0, 0), (2, 1)]).unwrap();
        let b = Board::from_cells(&[(2, 1), (4, 4), (0, 0)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.iter().collect::<Vec<_>>(),
            vec![Position::new(0, 0), Position::new(2, 1), Position::new(4, 4)]
        );
    }

    #[test]
    fn test_mask_round_trip() {
        let board = Board::from_cells(&[(0, 0), (2, 1), (4, 4)]).unwrap();
        let mask = board.mask();
        assert_eq!(mask, 0b100_0000_0001_0001);
        assert_eq!(Board::from_mask(mask), board);
        assert_eq!(Board::full().mask(), (1 << CELL_COUNT) - 1);
    }

    #[test]
    fn test_jump_and_unjump() {
        let start = Board::with_hole(Position::new(0, 0));
        let mv = Move::new(Position::new(2, 0), Position::new(0, 0));
        let captured = Position::new(1, 0);

        let mut board = start.clone();
        board.jump(mv, captured);
        assert_eq!(board.len(), start.len() - 1);
        assert!(board.contains(mv.to));
        assert!(!board.contains(mv.from));
        assert!(!board.contains(captured));

        board.unjump(mv, captured);
        assert_eq!(board, start);
    }

    #[test]
    fn test_display() {
        let board = Board::with_hole(Position::new(0, 0));
        let expected = "    .\n   o o\n  o o o\n o o o o\no o o o o\n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_serialization() {
        let board = Board::from_cells(&[(1, 1), (3, 0)]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[[1,1],[3,0]]");
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Board>("[]").is_err());
        assert!(serde_json::from_str::<Board>("[[2,3]]").is_err());

        let board: Board = serde_json::from_str("[[4,4],[0,0],[4,4]]").unwrap();
        assert_eq!(board, Board::from_cells(&[(0, 0), (4, 4)]).unwrap());
    }
}
