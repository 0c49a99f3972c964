//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a solve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions expanded.
    pub nodes_expanded: u64,

    /// Positions skipped because they were already proven dead.
    pub dead_hits: u64,

    /// Dead positions recorded.
    pub dead_positions: u64,

    /// Maximum depth (moves from the start) reached.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate positions expanded per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visits answered by the dead-position memo.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let visits = self.nodes_expanded + self.dead_hits;
        if visits == 0 {
            0.0
        } else {
            self.dead_hits as f64 / visits as f64
        }
    }
}
