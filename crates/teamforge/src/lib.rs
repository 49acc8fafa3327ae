//! TeamForge - exact team partitioning that minimizes historical overlap.
//!
//! Splits a population into teams of prescribed sizes so that the total
//! pairwise conflict (how often two people already shared a team) is as
//! low as possible. Every canonical partition is examined, so the reported
//! minimum is exact.
//!
//! # Example
//!
//! ```rust
//! use teamforge::prelude::*;
//!
//! let people: Vec<Person> = ["1", "2", "3", "4"].into_iter().map(Person::with_id).collect();
//! let matrix = ConflictMatrix::new().with("1", "2", 5);
//!
//! let result = optimize(&people, &[2, 2], &matrix, 10).unwrap();
//! assert_eq!(result.min_score(), Some(ConflictScore::ZERO));
//! assert_eq!(result.total_combinations_checked, 3);
//! ```

// Data model
pub use teamforge_core::{
    AssignedTeam, Assignment, ConflictMatrix, OptimizationRequest, OptimizationResult, Partition,
    Person, Team, DEFAULT_MAX_RESULTS,
};

// Scores, errors and diagnostics
pub use teamforge_core::{ConflictScore, Result, SearchStatistics, TeamForgeError, TerminationReason};

// Scoring
pub use teamforge_scoring::{score_teams, ConflictTable, PartitionScorer};

// Search
pub use teamforge_solver::{
    canonical_partition_count, combinations, optimize, partitions, Combinations, Partitions,
    SolverHandle, TeamOptimizer,
};

pub use teamforge_solver::termination;

// Configuration
pub use teamforge_config::{ConfigError, SolverConfig, TerminationConfig};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        optimize, ConflictMatrix, ConflictScore, OptimizationRequest, OptimizationResult, Person,
        SolverConfig, SolverHandle, TeamForgeError, TeamOptimizer,
    };
}
