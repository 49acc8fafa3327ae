//! TeamForge Core - Core types for team partition optimization
//!
//! This crate provides the fundamental data model shared by the TeamForge crates:
//! - Domain records (people, conflict matrix, requests)
//! - Partitions, the index-based search representation
//! - Assignments and optimization results, the output contract
//! - The conflict score type and the error type

pub mod domain;
pub mod error;
pub mod score;
pub mod statistics;

pub use domain::{
    AssignedTeam, Assignment, ConflictMatrix, OptimizationRequest, OptimizationResult, Partition,
    Person, Team, DEFAULT_MAX_RESULTS,
};
pub use error::{Result, TeamForgeError, TerminationReason};
pub use score::ConflictScore;
pub use statistics::SearchStatistics;
