//! Depth-first solver.
//!
//! Explores legal moves in row-major order and backtracks on dead ends.
//! A position that cannot reach the goal is remembered by its occupancy
//! bitmask, so each of the at most 2^15 positions is expanded once.

use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::{info, instrument};

use crate::core::{Board, Move};
use crate::rules::legal_moves;

use super::config::SolverConfig;
use super::stats::SearchStats;

/// Result of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// Moves that take the board to a single peg, in order.
    Solved(Vec<Move>),
    /// No sequence of moves reaches the goal.
    Unsolvable,
    /// The node budget ran out first.
    BudgetExhausted,
}

enum Step {
    Found,
    Dead,
    OutOfBudget,
}

/// Peg-solitaire solver.
pub struct Solver {
    config: SolverConfig,
    dead: FxHashSet<u16>,
    path: Vec<Move>,
    stats: SearchStats,
}

impl Solver {
    /// Create a new solver.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            dead: FxHashSet::default(),
            path: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Get the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Statistics from the last solve.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for a winning move sequence from `board`.
    ///
    /// An empty board has no peg left to win with and is
    /// [`Solution::Unsolvable`].
    #[instrument(skip(self, board), fields(pegs = board.len()))]
    pub fn solve(&mut self, board: &Board) -> Solution {
        self.dead.clear();
        self.path.clear();
        self.stats.reset();
        let start = Instant::now();

        let mut board = board.clone();
        let step = self.search(&mut board);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.stats.dead_positions = self.dead.len() as u64;

        let solution = match step {
            Step::Found => Solution::Solved(std::mem::take(&mut self.path)),
            Step::Dead => Solution::Unsolvable,
            Step::OutOfBudget => Solution::BudgetExhausted,
        };
        info!(
            nodes = self.stats.nodes_expanded,
            dead_hits = self.stats.dead_hits,
            time_us = self.stats.time_us,
            nodes_per_second = self.stats.nodes_per_second(),
            hit_rate = self.stats.hit_rate(),
            solved = matches!(solution, Solution::Solved(_)),
            "Solve finished"
        );
        solution
    }

    fn search(&mut self, board: &mut Board) -> Step {
        if board.is_empty() {
            return Step::Dead;
        }
        if board.len() == 1 {
            let on_target = self.config.target.map_or(true, |cell| board.contains(cell));
            return if on_target { Step::Found } else { Step::Dead };
        }

        let key = board.mask();
        if self.dead.contains(&key) {
            self.stats.dead_hits += 1;
            return Step::Dead;
        }
        if self.config.max_nodes > 0 && self.stats.nodes_expanded >= self.config.max_nodes {
            return Step::OutOfBudget;
        }

        self.stats.nodes_expanded += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.path.len() as u16);

        for mv in legal_moves(board) {
            let Some(captured) = board.apply(mv) else {
                continue;
            };
            self.path.push(mv);

            match self.search(board) {
                Step::Found => return Step::Found,
                Step::OutOfBudget => return Step::OutOfBudget,
                Step::Dead => {}
            }

            self.path.pop();
            board.unjump(mv, captured);
        }

        self.dead.insert(key);
        Step::Dead
    }
}
