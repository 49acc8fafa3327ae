//! Search statistics.
//!
//! Stack-allocated counters for a single optimization run.

use std::time::{Duration, Instant};

/// Counters collected while the driver pulls partitions.
///
/// # Example
///
/// ```
/// use teamforge_core::SearchStatistics;
///
/// let mut stats = SearchStatistics::default();
/// stats.start();
/// stats.record_partition();
/// stats.record_partition();
/// stats.record_improvement();
/// stats.record_dropped_tie();
///
/// assert_eq!(stats.partitions_checked, 2);
/// assert_eq!(stats.improvements, 1);
/// assert_eq!(stats.ties_dropped, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    start_time: Option<Instant>,
    /// Canonical partitions pulled from the generator and scored.
    pub partitions_checked: u64,
    /// Times the minimum score strictly improved.
    pub improvements: u64,
    /// Tied partitions discarded because the best-set was full.
    pub ties_dropped: u64,
    /// Wall time of the search, fixed when the search stops.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Freezes the elapsed time into `duration`.
    pub fn stop(&mut self) {
        self.duration = self.elapsed();
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_partition(&mut self) {
        self.partitions_checked += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    pub fn record_dropped_tie(&mut self) {
        self.ties_dropped += 1;
    }

    /// Returns the partitions-per-second rate.
    pub fn partitions_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.partitions_checked as f64 / secs
        } else {
            0.0
        }
    }
}
