//! Core types: cells, boards, moves, configuration, errors, RNG.
//!
//! Everything here is plain data. The legality and outcome logic lives in
//! `rules`.

pub mod position;
pub mod board;
pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use position::{Delta, Jumps, Position, CELL_COUNT, ROWS};
pub use board::Board;
pub use action::{Move, MoveRecord};
pub use config::BoardConfig;
pub use error::PegError;
pub use rng::GameRng;
