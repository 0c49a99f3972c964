//! Game driver.
//!
//! `Game` owns one board and walks it through the
//! `InProgress -> InProgress | Win | Lose` state machine, recording each
//! move so it can be undone and redone. Presentation layers (GUI, CLI,
//! tests) translate user intent into `(from, to)` pairs and call `play`.

mod session;

pub use session::Game;
