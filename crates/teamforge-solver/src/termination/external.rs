//! External termination via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use teamforge_core::TerminationReason;

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when an external flag is set.
///
/// Usually obtained from [`SolverHandle::termination`](crate::SolverHandle::termination).
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use teamforge_solver::termination::{ExternalTermination, Termination};
/// use teamforge_solver::SearchScope;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(Arc::clone(&flag));
/// let scope = SearchScope::new();
///
/// assert!(!term.is_terminated(&scope));
/// flag.store(true, Ordering::SeqCst);
/// assert!(term.is_terminated(&scope));
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination {
    fn check(&self, _scope: &SearchScope) -> Option<TerminationReason> {
        self.flag
            .load(Ordering::Relaxed)
            .then_some(TerminationReason::Cancelled)
    }
}
