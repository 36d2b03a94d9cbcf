//! Search statistics.
//!
//! Counters for one checkout calculation, reported through `tracing` when
//! the search ends.

use std::time::{Duration, Instant};

/// Statistics of a single calculation.
///
/// # Example
///
/// ```
/// use dartforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_pruned();
///
/// assert_eq!(stats.nodes, 2);
/// assert_eq!(stats.pruned, 1);
/// ```
#[derive(Debug, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Search nodes entered, including pruned ones.
    pub nodes: u64,
    /// Nodes cut off by a stop condition before any candidate was tried.
    pub pruned: u64,
    /// Checkouts added to a result set, summed over all depths.
    pub accepted: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_node(&mut self) {
        self.nodes += 1;
    }

    pub fn record_pruned(&mut self) {
        self.pruned += 1;
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }
}
