//! Single-player game session.

use tracing::{debug, info, instrument};

use crate::core::{Board, BoardConfig, Move, MoveRecord, PegError, Position};
use crate::rules::{classify, legal_moves, Outcome};

/// A game in progress, with move history.
#[derive(Clone, Debug)]
pub struct Game {
    start: Board,
    board: Board,
    outcome: Outcome,
    history: Vec<MoveRecord>,
    /// Undone moves, most recent last.
    redo: Vec<MoveRecord>,
}

impl Game {
    /// Start a game from `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let outcome = classify(&board);
        Self {
            start: board.clone(),
            board,
            outcome,
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Start a game from a start-layout configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, PegError> {
        Ok(Self::new(config.build()?))
    }

    /// The classic game: every cell but the apex holds a peg.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Board::with_hole(Position::new(0, 0)))
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board the game started from.
    #[must_use]
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Number of pegs left.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.board.len()
    }

    /// Legal moves on the current board.
    #[must_use]
    pub fn hints(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    /// Jump the peg on `from` to `to`.
    ///
    /// On success returns the new outcome. An illegal move leaves the game
    /// unchanged. A successful move clears the redo stack.
    #[instrument(skip(self))]
    pub fn play(&mut self, from: Position, to: Position) -> Result<Outcome, PegError> {
        if self.outcome.is_terminal() {
            return Err(PegError::GameOver {
                outcome: self.outcome,
            });
        }

        let mv = Move::new(from, to);
        let Some(captured) = self.board.apply(mv) else {
            debug!(%mv, "Rejected illegal move");
            return Err(PegError::IllegalMove { mv });
        };

        let record = MoveRecord::new(mv, captured, self.history.len() as u32);
        self.history.push(record);
        self.redo.clear();
        debug!(%mv, %captured, "Applied move");

        self.reclassify();
        Ok(self.outcome)
    }

    /// Take back the last move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, PegError> {
        let record = self.history.pop().ok_or(PegError::NothingToUndo)?;
        self.board.unjump(record.mv, record.captured);
        self.redo.push(record);
        debug!(mv = %record.mv, "Undid move");

        self.reclassify();
        Ok(record.mv)
    }

    /// Replay the most recently undone move.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<Move, PegError> {
        let record = self.redo.pop().ok_or(PegError::NothingToRedo)?;
        self.board.jump(record.mv, record.captured);
        self.history.push(record);
        debug!(mv = %record.mv, "Redid move");

        self.reclassify();
        Ok(record.mv)
    }

    /// Check whether `undo` would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check whether `redo` would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Discard all moves and return to the start board.
    pub fn reset(&mut self) {
        *self = Self::new(self.start.clone());
    }

    fn reclassify(&mut self) {
        self.outcome = classify(&self.board);
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, pegs = self.board.len(), moves = self.history.len(), "Game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, offset: u8) -> Position {
        Position::new(row, offset)
    }

    #[test]
    fn test_classic_start() {
        let game = Game::classic();
        assert_eq!(game.peg_count(), 14);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.hints().len(), 2);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_from_config() {
        let game = Game::from_config(&BoardConfig::new().with_empty(pos(2, 1))).unwrap();
        assert_eq!(game.peg_count(), 14);
        assert!(!game.board().contains(pos(2, 1)));
    }

    #[test]
    fn test_play_and_history() {
        let mut game = Game::classic();
        let outcome = game.play(pos(2, 0), pos(0, 0)).unwrap();

        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(game.peg_count(), 13);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].captured, pos(1, 0));
        assert_eq!(game.history()[0].sequence, 0);
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut game = Game::classic();
        let before = game.board().clone();

        let err = game.play(pos(1, 0), pos(0, 0)).unwrap_err();
        assert_eq!(
            err,
            PegError::IllegalMove {
                mv: Move::new(pos(1, 0), pos(0, 0))
            }
        );
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_redo() {
        let mut game = Game::classic();
        game.play(pos(2, 0), pos(0, 0)).unwrap();
        game.play(pos(4, 0), pos(2, 0)).unwrap();
        let after_two = game.board().clone();

        assert_eq!(game.undo().unwrap(), Move::new(pos(4, 0), pos(2, 0)));
        assert_eq!(game.undo().unwrap(), Move::new(pos(2, 0), pos(0, 0)));
        assert_eq!(game.board(), game.start());
        assert_eq!(game.undo(), Err(PegError::NothingToUndo));

        game.redo().unwrap();
        game.redo().unwrap();
        assert_eq!(game.board(), &after_two);
        assert_eq!(game.redo(), Err(PegError::NothingToRedo));
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut game = Game::classic();
        game.play(pos(2, 0), pos(0, 0)).unwrap();
        game.undo().unwrap();
        assert!(game.can_redo());

        game.play(pos(2, 2), pos(0, 0)).unwrap();
        assert!(!game.can_redo());
    }

    #[test]
    fn test_terminal_rejects_moves() {
        let board = Board::from_cells(&[(4, 4), (4, 3)]).unwrap();
        let mut game = Game::new(board);

        assert_eq!(game.play(pos(4, 4), pos(4, 2)), Ok(Outcome::Win));
        assert_eq!(
            game.play(pos(4, 2), pos(4, 4)),
            Err(PegError::GameOver { outcome: Outcome::Win })
        );

        // Undo reopens the game.
        game.undo().unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::classic();
        game.play(pos(2, 2), pos(0, 0)).unwrap();
        game.reset();

        assert_eq!(game.board(), game.start());
        assert!(game.history().is_empty());
        assert!(!game.can_redo());
    }
}
