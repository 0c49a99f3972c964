//! Move application.

use crate::core::{Board, Move, Position};

use super::validator::captured_by;

/// Apply a move, returning the resulting board and whether it succeeded.
///
/// An illegal move returns an unchanged copy of `board` and `false`. The
/// input is never modified; boards clone in O(1).
///
/// ```
/// use peg_jump::core::{Board, Position};
/// use peg_jump::rules::apply_move;
///
/// let board = Board::with_hole(Position::new(0, 0));
/// let (next, ok) = apply_move(&board, Position::new(2, 2), Position::new(0, 0));
/// assert!(ok);
/// assert_eq!(next.len(), board.len() - 1);
/// ```
#[must_use]
pub fn apply_move(board: &Board, from: Position, to: Position) -> (Board, bool) {
    let mut next = board.clone();
    let ok = next.apply(Move::new(from, to)).is_some();
    (next, ok)
}

impl Board {
    /// Apply `mv` in place.
    ///
    /// On success the source and captured pegs are removed and the
    /// destination filled, and the captured cell is returned. On an illegal
    /// move the board is left untouched and `None` is returned.
    pub fn apply(&mut self, mv: Move) -> Option<Position> {
        let captured = captured_by(self, mv)?;
        self.jump(mv, captured);
        Some(captured)
    }
}
