//! Composite termination condition.
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use teamforge_core::TerminationReason;

use super::Termination;
use crate::scope::SearchScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// Wraps a tuple of terminations. The reason reported is that of the
/// first child, in tuple order, that fires.
///
/// # Examples
///
/// ```
/// use teamforge_solver::termination::{
///     OrTermination, PartitionCountTermination, TimeTermination,
/// };
///
/// // Terminate after 30 seconds OR 1000 partitions
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     PartitionCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, scope: &SearchScope) -> Option<TerminationReason> {
                None$(.or_else(|| (self.0).$idx.check(scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
