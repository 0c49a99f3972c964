//! # peg-jump
//!
//! Rules engine for triangular peg solitaire on the 15-cell, 5-row board.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: legality, move application and outcome detection are
//!    deterministic functions of a `Board`. No globals, no hidden state.
//!
//! 2. **No presentation**: the crate owns no pixels, timers or input
//!    devices. Drivers map user gestures to `(from, to)` pairs and render
//!    the resulting `Board` themselves.
//!
//! 3. **Configurable start**: which cells begin empty is a parameter
//!    (`BoardConfig`), not a constant.
//!
//! ## Architecture
//!
//! - **Static geometry**: every cell's jump destinations are derived once
//!   and shared; occupancy never changes them.
//!
//! - **Persistent boards**: `Board` is backed by `im::OrdSet`, so handing
//!   out a fresh board per move is O(1).
//!
//! ## Modules
//!
//! - `core`: cells, boards, moves, configuration, errors, RNG
//! - `rules`: move validation, application and terminal detection
//! - `game`: the `Game` driver with history and undo
//! - `search`: solver and random playouts
//!
//! ## Example
//!
//! ```
//! use peg_jump::{classify, Game, Outcome, Position};
//!
//! let mut game = Game::classic();
//! let outcome = game.play(Position::new(2, 0), Position::new(0, 0)).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(classify(game.board()), Outcome::InProgress);
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Delta, GameRng, Jumps, Move, MoveRecord, PegError,
    Position, CELL_COUNT, ROWS,
};

pub use crate::rules::{apply_move, classify, is_legal_move, legal_moves, Outcome};

pub use crate::game::Game;

pub use crate::search::{
    random_playout, run_playouts, Playout, PlayoutConfig, PlayoutSummary, SearchStats, Solution,
    Solver, SolverConfig,
};
