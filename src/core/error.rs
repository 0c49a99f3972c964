//! Error type for board construction and the game driver.
//!
//! The rules functions themselves never fail: an illegal move is a normal
//! `false` outcome. Errors only arise when building positions and boards
//! from untrusted input, or when a `Game` driver is asked to do something
//! its state does not allow.

use derive_more::{Display, Error};

use super::action::Move;
use crate::rules::Outcome;

/// Errors produced by constructors and the `Game` driver.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PegError {
    /// A (row, offset) pair outside the 15-cell triangle.
    #[display("cell ({row}, {offset}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: u8,
        /// Requested offset within the row.
        offset: u8,
    },

    /// A board was requested with no pegs on it.
    #[display("a board needs at least one peg")]
    EmptyBoard,

    /// The move is not legal on the current board.
    #[display("illegal move {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },

    /// The game has already reached a terminal outcome.
    #[display("game is over ({outcome})")]
    GameOver {
        /// The terminal outcome.
        outcome: Outcome,
    },

    /// Undo requested with an empty history.
    #[display("nothing to undo")]
    NothingToUndo,

    /// Redo requested with nothing undone.
    #[display("nothing to redo")]
    NothingToRedo,
}
