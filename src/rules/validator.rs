//! Move legality.

use crate::core::{Board, Move, Position};

/// Check whether the peg on `from` may jump to `to`.
///
/// A move is legal when:
/// 1. `from` holds a peg,
/// 2. `to` is empty,
/// 3. `to` is one of `from`'s jump destinations,
/// 4. the cell between them holds a peg.
///
/// ```
/// use peg_jump::core::{Board, Position};
/// use peg_jump::rules::is_legal_move;
///
/// let board = Board::with_hole(Position::new(0, 0));
/// assert!(is_legal_move(&board, Position::new(2, 0), Position::new(0, 0)));
/// assert!(!is_legal_move(&board, Position::new(1, 0), Position::new(0, 0)));
/// ```
#[must_use]
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    captured_by(board, Move::new(from, to)).is_some()
}

/// The peg a legal move removes, or `None` if the move is illegal.
pub(crate) fn captured_by(board: &Board, mv: Move) -> Option<Position> {
    if !board.contains(mv.from) || board.contains(mv.to) {
        return None;
    }
    let captured = mv.captured()?;
    board.contains(captured).then_some(captured)
}
