//! Pairwise conflict scoring for TeamForge.
//!
//! A partition's score is the sum, over every team, of the conflict count of
//! each unordered pair of distinct teammates. Member order and team order do
//! not affect the result.
//!
//! - [`score_teams`] scores person records directly against a [`ConflictMatrix`]
//! - [`ConflictTable`] is a dense, symmetric lookup built once per search and
//!   used through the [`PartitionScorer`] seam on index-based partitions

mod scorer;
mod table;


pub use scorer::{score_teams, PartitionScorer};
pub use table::ConflictTable;

pub use teamforge_core::{ConflictMatrix, ConflictScore};
