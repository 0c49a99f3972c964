//! Start-layout configuration.
//!
//! The rules never hardcode which cell starts empty. Drivers describe the
//! opening layout with a `BoardConfig` (or load one via serde) and build the
//! initial `Board` from it.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::PegError;
use super::position::Position;

/// Which cells start without a peg.
///
/// Every other cell starts occupied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cells left empty at the start.
    pub empty: Vec<Position>,
}

impl BoardConfig {
    /// Create a configuration with every cell filled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic opening: only the apex is empty.
    #[must_use]
    pub fn classic() -> Self {
        Self::new().with_empty(Position::new(0, 0))
    }

    /// Leave `pos` empty at the start.
    #[must_use]
    pub fn with_empty(mut self, pos: Position) -> Self {
        if !self.empty.contains(&pos) {
            self.empty.push(pos);
        }
        self
    }

    /// Number of pegs the start layout holds.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        Position::all().filter(|pos| !self.empty.contains(pos)).count()
    }

    /// Build the starting board.
    ///
    /// Fails with [`PegError::EmptyBoard`] when every cell is left empty.
    pub fn build(&self) -> Result<Board, PegError> {
        Board::new(Position::all().filter(|pos| !self.empty.contains(pos)))
    }
}
