//! Terminal-state detection.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Move};

use super::validator::captured_by;

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// At least one legal move exists.
    InProgress,
    /// At most one peg left.
    Win,
    /// Two or more pegs and no legal move.
    Lose,
}

impl Outcome {
    /// Check whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}

/// Classify `board` as won, lost, or in progress.
///
/// Fewer than two pegs is a win. Otherwise every peg's jump destinations are
/// scanned; any legal jump means the game goes on.
///
/// ```
/// use peg_jump::core::Board;
/// use peg_jump::rules::{classify, Outcome};
///
/// let stuck = Board::from_cells(&[(0, 0), (4, 4)]).unwrap();
/// assert_eq!(classify(&stuck), Outcome::Lose);
/// ```
#[must_use]
pub fn classify(board: &Board) -> Outcome {
    if board.len() < 2 {
        return Outcome::Win;
    }
    if moves(board).next().is_some() {
        Outcome::InProgress
    } else {
        Outcome::Lose
    }
}

/// All legal moves, ordered by source then destination (row-major).
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    moves(board).collect()
}

fn moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    board.iter().flat_map(move |from| {
        from.jumps()
            .iter()
            .map(move |&to| Move::new(from, to))
            .filter(move |&mv| captured_by(board, mv).is_some())
    })
}
