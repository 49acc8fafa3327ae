//! Dense conflict lookup for a fixed population.

use teamforge_core::{ConflictMatrix, ConflictScore, Partition, Person};

use crate::scorer::PartitionScorer;

/// Symmetric `n x n` conflict counts indexed by population position.
///
/// Built once per search so that scoring a partition never touches the
/// string-keyed sparse matrix.
///
/// # Examples
///
/// ```
/// use smallvec::smallvec;
/// use teamforge_core::{ConflictMatrix, ConflictScore, Partition, Person};
/// use teamforge_scoring::{ConflictTable, PartitionScorer};
///
/// let people: Vec<Person> = ["1", "2", "3"].into_iter().map(Person::with_id).collect();
/// let matrix = ConflictMatrix::new().with("3", "1", 2);
/// let table = ConflictTable::new(&people, &matrix);
///
/// assert_eq!(table.conflict(0, 2), 2);
/// let partition = Partition::new(vec![smallvec![0, 2], smallvec![1]]);
/// assert_eq!(table.score(&partition), ConflictScore::of(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictTable {
    size: usize,
    counts: Vec<u64>,
}

impl ConflictTable {
    pub fn new(people: &[Person], matrix: &ConflictMatrix) -> Self {
        let size = people.len();
        let mut counts = vec![0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let count = matrix.conflict(&people[i].id, &people[j].id);
                counts[i * size + j] = count;
                counts[j * size + i] = count;
            }
        }
        Self { size, counts }
    }

    /// Population size the table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn conflict(&self, a: usize, b: usize) -> u64 {
        self.counts[a * self.size + b]
    }

    /// Sum of all pairwise conflicts across the whole population,
    /// saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }

    /// Sum of all pairwise conflicts, or `None` if it does not fit a `u64`.
    ///
    /// Every partition scores at most this total, so when it fits no
    /// partition score can overflow.
    pub fn checked_total(&self) -> Option<u64> {
        let mut total = 0u64;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                total = total.checked_add(self.conflict(i, j))?;
            }
        }
        Some(total)
    }
}

impl PartitionScorer for ConflictTable {
    fn score(&self, partition: &Partition) -> ConflictScore {
        let mut total = 0u64;
        for team in partition.teams() {
            for (i, &a) in team.iter().enumerate() {
                for &b in &team[i + 1..] {
                    total = total.saturating_add(self.conflict(a, b));
                }
            }
        }
        ConflictScore::of(total)
    }
}
