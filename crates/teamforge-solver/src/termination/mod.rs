//! Termination conditions for the partition search.
//!
//! The driver consults its termination before scoring each partition it
//! pulls. A condition that fires stops the pull loop and the accumulated
//! best-set is reported with the [`TerminationReason`].

mod composite;
mod external;
mod partition_count;
mod time;

use std::fmt::Debug;

use teamforge_core::TerminationReason;

use crate::scope::SearchScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use partition_count::PartitionCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns why the search should stop now, or `None` to keep going.
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason>;

    /// Returns true if searching should terminate.
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.check(scope).is_some()
    }
}

/// Never terminates; the search runs until the stream is exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn check(&self, _scope: &SearchScope) -> Option<TerminationReason> {
        None
    }
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(scope))
    }
}
