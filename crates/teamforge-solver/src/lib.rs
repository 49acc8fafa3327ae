//! Exhaustive team partition search for TeamForge.
//!
//! This crate provides:
//! - Lazy combination and canonical partition generators
//! - The optimization driver and its bounded tied-best set
//! - Termination conditions (time, partition count, external cancellation)
//! - [`SolverHandle`] for cancelling a search from another thread

pub mod best_set;
pub mod combination;
pub mod handle;
pub mod optimizer;
pub mod partition;
pub mod scope;
pub mod termination;

pub use best_set::{BestSet, Offer};
pub use combination::{combinations, Combinations};
pub use handle::SolverHandle;
pub use optimizer::{optimize, run_search, validate_input, TeamOptimizer};
pub use partition::{canonical_partition_count, partitions, Partitions};
pub use scope::SearchScope;
pub use termination::{
    ExternalTermination, NoTermination, OrTermination, PartitionCountTermination, Termination,
    TimeTermination,
};
