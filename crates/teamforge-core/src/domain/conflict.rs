//! Sparse pairwise collaboration counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Historical collaboration counts keyed by person id pairs.
///
/// Storage may be one-directional: `conflict(a, b)` consults both
/// `a -> b` and `b -> a`.
///
/// # Examples
///
/// ```
/// use teamforge_core::ConflictMatrix;
///
/// let mut matrix = ConflictMatrix::new();
/// matrix.insert("alice", "bob", 3);
///
/// assert_eq!(matrix.conflict("alice", "bob"), 3);
/// assert_eq!(matrix.conflict("bob", "alice"), 3);
/// assert_eq!(matrix.conflict("alice", "carol"), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictMatrix {
    counts: HashMap<String, HashMap<String, u64>>,
}

impl ConflictMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directed entry `a -> b`.
    pub fn insert(&mut self, a: impl Into<String>, b: impl Into<String>, count: u64) {
        self.counts
            .entry(a.into())
            .or_default()
            .insert(b.into(), count);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, a: impl Into<String>, b: impl Into<String>, count: u64) -> Self {
        self.insert(a, b, count);
        self
    }

    /// Returns the directed entry `a -> b`, if stored.
    pub fn get(&self, a: &str, b: &str) -> Option<u64> {
        self.counts.get(a).and_then(|row| row.get(b)).copied()
    }

    /// Symmetric accessor.
    ///
    /// Reads `a -> b` when it is stored and non-zero, otherwise `b -> a`,
    /// otherwise 0.
    pub fn conflict(&self, a: &str, b: &str) -> u64 {
        match self.get(a, b) {
            Some(count) if count > 0 => count,
            _ => self.get(b, a).unwrap_or(0),
        }
    }

    /// Number of people with at least one outgoing entry.
    pub fn row_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(HashMap::is_empty)
    }
}

impl<A, B> FromIterator<(A, B, u64)> for ConflictMatrix
where
    A: Into<String>,
    B: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, B, u64)>>(iter: I) -> Self {
        let mut matrix = ConflictMatrix::new();
        for (a, b, count) in iter {
            matrix.insert(a, b, count);
        }
        matrix
    }
}
