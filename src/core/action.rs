//! Move representation: a peg jumping from one cell to another.
//!
//! A move is just the (from, to) pair the driver supplies. The captured
//! cell is derived, never stored, so a `Move` is valid to construct for any
//! two cells. Legality is decided by `rules::is_legal_move`.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A jump from `from` to `to`.
///
/// ## Example
///
/// ```
/// use peg_jump::core::{Move, Position};
///
/// let mv = Move::new(Position::new(2, 0), Position::new(0, 0));
/// assert_eq!(mv.captured(), Some(Position::new(1, 0)));
///
/// // Not a jump shape, so nothing is captured.
/// let bad = Move::new(Position::new(1, 0), Position::new(0, 0));
/// assert_eq!(bad.captured(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the peg leaves.
    pub from: Position,
    /// Cell the peg lands on.
    pub to: Position,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Check whether `to` is one of `from`'s jump destinations.
    #[must_use]
    pub fn is_jump_shape(&self) -> bool {
        self.from.can_jump_to(self.to)
    }

    /// The cell jumped over, if this is a jump shape.
    #[must_use]
    pub fn captured(&self) -> Option<Position> {
        self.is_jump_shape().then(|| self.from.midpoint(self.to))
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A move as recorded in a game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move played.
    pub mv: Move,

    /// The peg removed by the move.
    pub captured: Position,

    /// Position of the move in the game, starting at 0.
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, captured: Position, sequence: u32) -> Self {
        Self {
            mv,
            captured,
            sequence,
        }
    }
}
