//! Search over the game tree.
//!
//! ## Overview
//!
//! - **Solver**: depth-first search for a move sequence that leaves a single
//!   peg, optionally on a required cell. Positions proven dead are memoized
//!   by occupancy bitmask, which keeps the 15-cell board well under a
//!   second.
//! - **Playouts**: seeded random games, useful for estimating how forgiving
//!   a start layout is.
//!
//! ## Usage
//!
//! ```rust
//! use peg_jump::core::{Board, Position};
//! use peg_jump::search::{Solution, Solver, SolverConfig};
//!
//! let board = Board::with_hole(Position::new(0, 0));
//! let mut solver = Solver::new(SolverConfig::default());
//!
//! match solver.solve(&board) {
//!     Solution::Solved(moves) => assert_eq!(moves.len(), 13),
//!     other => panic!("expected a solution, got {:?}", other),
//! }
//! ```

pub mod config;
pub mod playout;
pub mod solver;
pub mod stats;

pub use config::{PlayoutConfig, SolverConfig};
pub use playout::{random_playout, run_playouts, Playout, PlayoutSummary};
pub use solver::{Solution, Solver};
pub use stats::SearchStats;
