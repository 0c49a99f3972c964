//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Solver configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum positions to expand (0 = unlimited).
    pub max_nodes: u64,

    /// Cell the last peg must end on. `None` accepts any cell.
    pub target: Option<Position>,
}

impl SolverConfig {
    /// Create a new config with a node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Create a new config requiring the last peg on `target`.
    #[must_use]
    pub fn with_target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }
}

/// Random playout configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Number of playouts to run.
    pub count: u32,

    /// Random seed. Same seed produces identical playouts.
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            count: 1_000,
            seed: 42,
        }
    }
}

impl PlayoutConfig {
    /// Create a new config with a custom playout count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
