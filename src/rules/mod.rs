//! Rules of triangular peg solitaire.
//!
//! Three pure functions over a `Board`:
//! - `is_legal_move`: may a peg jump from one cell to another?
//! - `apply_move`: the board after a legal jump
//! - `classify`: is the game won, lost, or still going?
//!
//! None of them mutate their input board or keep hidden state, so they are
//! safe to call on a shared snapshot from several threads.

pub mod validator;
pub mod applicator;
pub mod terminal;

pub use validator::is_legal_move;
pub use applicator::apply_move;
pub use terminal::{classify, legal_moves, Outcome};
