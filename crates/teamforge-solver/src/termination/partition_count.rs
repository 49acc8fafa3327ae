//! Partition count termination.

use teamforge_core::TerminationReason;

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once a number of partitions have been scored.
///
/// # Example
///
/// ```
/// use teamforge_solver::termination::PartitionCountTermination;
///
/// // Score at most one million canonical partitions
/// let termination = PartitionCountTermination::new(1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionCountTermination {
    limit: u64,
}

impl PartitionCountTermination {
    /// # Arguments
    /// * `limit` - Maximum partitions to score before terminating
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for PartitionCountTermination {
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
        (scope.partitions_checked() >= self.limit).then_some(TerminationReason::SearchLimitReached)
    }
}
