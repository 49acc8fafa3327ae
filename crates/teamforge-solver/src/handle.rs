//! Handle for cancelling a running search from another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::termination::ExternalTermination;

/// Cloneable handle for requesting early termination.
///
/// The search only observes the flag between partitions, so the best-set
/// it returns is always consistent with the partitions it scored.
///
/// # Example
///
/// ```
/// use teamforge_solver::SolverHandle;
///
/// let handle = SolverHandle::new();
/// let remote = handle.clone();
///
/// assert!(!handle.is_terminate_early());
/// remote.terminate_early();
/// assert!(handle.is_terminate_early());
///
/// handle.reset();
/// assert!(!remote.is_terminate_early());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverHandle {
    terminate_early: Arc<AtomicBool>,
}

impl SolverHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the search stop before the next partition.
    pub fn terminate_early(&self) {
        self.terminate_early.store(true, Ordering::SeqCst);
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early.load(Ordering::SeqCst)
    }

    /// Clears a previous request so the handle can be reused.
    pub fn reset(&self) {
        self.terminate_early.store(false, Ordering::SeqCst);
    }

    /// A termination condition observing this handle.
    pub fn termination(&self) -> ExternalTermination {
        ExternalTermination::new(Arc::clone(&self.terminate_early))
    }
}
