//! Domain model for team partitioning.
//!
//! - [`Person`] and [`ConflictMatrix`] describe the population
//! - [`Partition`] and [`Team`] are the index-based search representation
//! - [`Assignment`] and [`OptimizationResult`] form the output contract
//! - [`OptimizationRequest`] is the input contract

mod conflict;
mod partition;
mod person;
mod request;
mod result;


pub use conflict::ConflictMatrix;
pub use partition::{Partition, Team};
pub use person::Person;
pub use request::{OptimizationRequest, DEFAULT_MAX_RESULTS};
pub use result::{AssignedTeam, Assignment, OptimizationResult};
