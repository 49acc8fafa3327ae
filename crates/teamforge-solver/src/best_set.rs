//! Bounded set of tied-best partitions.

use teamforge_core::{Assignment, ConflictScore, Partition, Person};

/// What happened to a partition offered to the best-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Strictly better than everything before; the set now holds only it.
    Improved,
    /// Tied with the current best and appended.
    Tied,
    /// Tied with the current best but the set was full.
    DroppedTie,
    /// Worse than the current best.
    Rejected,
}

/// Keeps up to `capacity` partitions sharing the minimum score, in the
/// order they were offered.
#[derive(Debug, Clone)]
pub struct BestSet {
    capacity: usize,
    min_score: Option<ConflictScore>,
    entries: Vec<Partition>,
}

impl BestSet {
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BestSet capacity must be positive");
        Self {
            capacity,
            min_score: None,
            entries: Vec::with_capacity(capacity.min(64)),
        }
    }

    pub fn offer(&mut self, partition: Partition, score: ConflictScore) -> Offer {
        match self.min_score {
            Some(min) if score > min => Offer::Rejected,
            Some(min) if score == min => {
                if self.entries.len() < self.capacity {
                    self.entries.push(partition);
                    Offer::Tied
                } else {
                    Offer::DroppedTie
                }
            }
            _ => {
                self.entries.clear();
                self.entries.push(partition);
                self.min_score = Some(score);
                Offer::Improved
            }
        }
    }

    pub fn min_score(&self) -> Option<ConflictScore> {
        self.min_score
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the kept partitions against the population they index.
    pub fn to_assignments(&self, people: &[Person]) -> Vec<Assignment> {
        let Some(score) = self.min_score else {
            return Vec::new();
        };
        self.entries
            .iter()
            .map(|p| Assignment::from_partition(p, people, score))
            .collect()
    }
}
