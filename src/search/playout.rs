//! Random playouts.
//!
//! A playout picks uniformly among the legal moves until the board is
//! terminal. Runs are deterministic for a given seed: each playout draws
//! from its own fork of the configured RNG.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, GameRng, Move};
use crate::rules::{classify, legal_moves, Outcome};

use super::config::PlayoutConfig;

/// One finished random game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playout {
    /// Moves played, in order.
    pub moves: Vec<Move>,
    /// Final classification, never `InProgress`.
    pub outcome: Outcome,
    /// Pegs left at the end.
    pub pegs_left: usize,
}

/// Aggregate results of a batch of playouts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Playouts run.
    pub playouts: u32,
    /// Playouts that ended with at most one peg.
    pub wins: u32,
    /// Playouts that got stuck.
    pub losses: u32,
    /// The playout with the fewest pegs left; the earliest wins ties.
    pub best: Option<Playout>,
}

impl PlayoutSummary {
    /// Fraction of playouts won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            self.wins as f64 / self.playouts as f64
        }
    }

    fn record(&mut self, playout: Playout) {
        self.playouts += 1;
        match playout.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::InProgress => {}
        }
        let better = self
            .best
            .as_ref()
            .map_or(true, |best| playout.pegs_left < best.pegs_left);
        if better {
            self.best = Some(playout);
        }
    }
}

/// Play random legal moves from `board` until the game ends.
pub fn random_playout(board: &Board, rng: &mut GameRng) -> Playout {
    let mut board = board.clone();
    let mut moves = Vec::new();

    loop {
        let legal = legal_moves(&board);
        let Some(&mv) = rng.choose(&legal) else {
            break;
        };
        if board.apply(mv).is_none() {
            break;
        }
        moves.push(mv);
    }

    Playout {
        moves,
        outcome: classify(&board),
        pegs_left: board.len(),
    }
}

/// Run `config.count` playouts from `board`.
#[instrument(skip(board), fields(pegs = board.len()))]
pub fn run_playouts(board: &Board, config: &PlayoutConfig) -> PlayoutSummary {
    let mut rng = GameRng::new(config.seed);
    let mut summary = PlayoutSummary::default();

    for _ in 0..config.count {
        let mut branch = rng.fork();
        summary.record(random_playout(board, &mut branch));
    }

    debug!(
        wins = summary.wins,
        losses = summary.losses,
        best = summary.best.as_ref().map(|p| p.pegs_left),
        "Playouts finished"
    );
    summary
}
