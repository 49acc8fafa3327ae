//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides data builders and closed-form counts for testing.
//! It depends only on `teamforge-core` so every other crate can use it.
//!
//! - [`population`] - people and conflict matrix builders
//! - [`counting`] - binomial, multinomial and canonical partition counts
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```

pub mod counting;
pub mod population;

pub use counting::{binomial, canonical_count, factorial, multinomial};
pub use population::{matrix, named_people, numbered_people, people, team_ids};
