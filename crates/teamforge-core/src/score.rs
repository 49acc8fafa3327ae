//! ConflictScore - total historical overlap of a partition

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Total pairwise conflict of a partition.
///
/// Unlike a fitness score, lower is better: zero means no two teammates
/// have ever worked together.
///
/// # Examples
///
/// ```
/// use teamforge_core::ConflictScore;
///
/// let a = ConflictScore::of(5);
/// let b = ConflictScore::of(3);
///
/// assert!(b.is_better_than(&a));
/// assert_eq!(a + b, ConflictScore::of(8));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictScore {
    score: u64,
}

impl ConflictScore {
    /// The zero score.
    pub const ZERO: ConflictScore = ConflictScore { score: 0 };

    /// Creates a new ConflictScore with the given value.
    #[inline]
    pub const fn of(score: u64) -> Self {
        ConflictScore { score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns true if there is no conflict at all.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.score == 0
    }

    /// Returns true if this score is strictly better (lower) than the other.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.score < other.score
    }
}

impl Ord for ConflictScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for ConflictScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for ConflictScore {
    type Output = Self;

    /// Saturates at `u64::MAX`.
    fn add(self, other: Self) -> Self {
        ConflictScore::of(self.score.saturating_add(other.score))
    }
}

impl AddAssign for ConflictScore {
    fn add_assign(&mut self, other: Self) {
        self.score = self.score.saturating_add(other.score);
    }
}

impl Sum for ConflictScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ConflictScore::ZERO, Add::add)
    }
}

impl fmt::Debug for ConflictScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConflictScore({})", self.score)
    }
}

impl fmt::Display for ConflictScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

/// Error when parsing a score from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreParseError {
    pub message: String,
}

impl fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score parse error: {}", self.message)
    }
}

impl std::error::Error for ScoreParseError {}

impl FromStr for ConflictScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<u64>()
            .map(ConflictScore::of)
            .map_err(|e| ScoreParseError {
                message: format!("Invalid ConflictScore '{}': {}", s, e),
            })
    }
}

impl From<u64> for ConflictScore {
    fn from(score: u64) -> Self {
        ConflictScore::of(score)
    }
}
