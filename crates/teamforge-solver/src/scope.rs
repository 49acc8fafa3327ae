//! Search-level scope.

use std::time::Duration;

use teamforge_core::{ConflictScore, SearchStatistics};

/// Running state of one optimization call.
///
/// Owned by the driver and lent to terminations; nothing in it outlives
/// the call.
#[derive(Debug, Default)]
pub struct SearchScope {
    statistics: SearchStatistics,
    best_score: Option<ConflictScore>,
}

impl SearchScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_search(&mut self) {
        self.statistics = SearchStatistics::default();
        self.statistics.start();
        self.best_score = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.statistics.elapsed()
    }

    pub fn partitions_checked(&self) -> u64 {
        self.statistics.partitions_checked
    }

    pub fn best_score(&self) -> Option<ConflictScore> {
        self.best_score
    }

    pub fn record_partition(&mut self) {
        self.statistics.record_partition();
    }

    pub fn record_improvement(&mut self, score: ConflictScore) {
        self.best_score = Some(score);
        self.statistics.record_improvement();
    }

    pub fn record_dropped_tie(&mut self) {
        self.statistics.record_dropped_tie();
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Stops the clock and hands out the final counters.
    pub fn finish(mut self) -> SearchStatistics {
        self.statistics.stop();
        self.statistics
    }
}
