//! Canonical partitions of a population into ordered team slots.
//!
//! The generator walks team slots depth-first. For each slot it pulls
//! candidate teams of the declared size from the people not yet placed.
//! Within a maximal run of adjacent slots sharing a declared size, the
//! minimum member id must strictly increase from slot to slot, so each
//! unordered grouping of that run is produced exactly once. The threshold
//! resets whenever the declared size changes; non-adjacent slots of equal
//! size are not deduplicated against each other.

use std::iter::FusedIterator;

use smallvec::SmallVec;
use teamforge_core::{Partition, Person, Team};

use crate::combination::PositionCursor;

/// Dense rank of each person's id, equal ids sharing a rank.
fn id_ranks(people: &[Person]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..people.len()).collect();
    order.sort_by(|&a, &b| people[a].id.cmp(&people[b].id));

    let mut ranks = vec![0; people.len()];
    let mut rank = 0;
    for (pos, &idx) in order.iter().enumerate() {
        if pos > 0 && people[order[pos - 1]].id != people[idx].id {
            rank += 1;
        }
        ranks[idx] = rank;
    }
    ranks
}

/// One team slot on the depth-first stack.
#[derive(Debug, Clone)]
struct SlotFrame {
    /// People not placed by earlier slots, in population order.
    remaining: SmallVec<[usize; 32]>,
    cursor: PositionCursor,
    /// Minimum id rank of the previous slot, when it has the same size.
    threshold: Option<u32>,
    team: Team,
    min_rank: Option<u32>,
}

impl SlotFrame {
    fn new(remaining: SmallVec<[usize; 32]>, size: usize, threshold: Option<u32>) -> Self {
        let cursor = PositionCursor::new(remaining.len(), size);
        Self {
            remaining,
            cursor,
            threshold,
            team: Team::new(),
            min_rank: None,
        }
    }

    /// Selects the next candidate team that passes the threshold.
    fn next_team(&mut self, ranks: &[u32]) -> bool {
        while let Some(positions) = self.cursor.advance() {
            let min_rank = positions.iter().map(|&p| ranks[self.remaining[p]]).min();
            if let (Some(threshold), Some(min)) = (self.threshold, min_rank) {
                if min <= threshold {
                    continue;
                }
            }
            self.team = positions.iter().map(|&p| self.remaining[p]).collect();
            self.min_rank = min_rank;
            return true;
        }
        false
    }

    /// People left for the following slots.
    fn rest(&self) -> SmallVec<[usize; 32]> {
        self.remaining
            .iter()
            .copied()
            .filter(|idx| !self.team.contains(idx))
            .collect()
    }
}

/// Lazy iterator over canonical partitions.
///
/// Holds one frame per team slot; nothing beyond the current partition is
/// materialized. Sizes are expected to be positive and to sum to the
/// population size: with a larger sum nothing is produced, with a smaller
/// sum the leftover people are left out.
///
/// # Examples
///
/// ```
/// use teamforge_core::Person;
/// use teamforge_solver::partitions;
///
/// let people: Vec<Person> = ["1", "2", "3", "4"].into_iter().map(Person::with_id).collect();
///
/// // Two equal slots: {1,2}|{3,4}, {1,3}|{2,4}, {1,4}|{2,3}
/// assert_eq!(partitions(&people, &[2, 2]).count(), 3);
///
/// // Unequal slots are not collapsed.
/// assert_eq!(partitions(&people, &[1, 3]).count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Partitions {
    sizes: Vec<usize>,
    ranks: Vec<u32>,
    frames: Vec<SlotFrame>,
    empty_pending: bool,
}

impl Partitions {
    pub fn new(people: &[Person], sizes: &[usize]) -> Self {
        let ranks = id_ranks(people);
        let (frames, empty_pending) = match sizes.first() {
            Some(&first) => {
                let everyone = (0..people.len()).collect();
                (vec![SlotFrame::new(everyone, first, None)], false)
            }
            None => (Vec::new(), true),
        };
        Self {
            sizes: sizes.to_vec(),
            ranks,
            frames,
            empty_pending,
        }
    }

    fn current(&self) -> Partition {
        Partition::new(self.frames.iter().map(|f| f.team.clone()).collect())
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.empty_pending {
            self.empty_pending = false;
            return Some(Partition::default());
        }

        loop {
            let depth = self.frames.len().checked_sub(1)?;
            let frame = &mut self.frames[depth];

            if !frame.next_team(&self.ranks) {
                self.frames.pop();
                continue;
            }

            let Some(&next_size) = self.sizes.get(depth + 1) else {
                return Some(self.current());
            };
            let threshold = if next_size == self.sizes[depth] {
                frame.min_rank
            } else {
                None
            };
            let rest = frame.rest();
            self.frames.push(SlotFrame::new(rest, next_size, threshold));
        }
    }
}

impl FusedIterator for Partitions {}

/// Lazily enumerates the canonical partitions of `people` into `sizes`.
pub fn partitions(people: &[Person], sizes: &[usize]) -> Partitions {
    Partitions::new(people, sizes)
}

fn checked_binomial(n: u128, k: u128) -> Option<u128> {
    let mut c: u128 = 1;
    for i in 0..k {
        c = c.checked_mul(n - i)? / (i + 1);
    }
    Some(c)
}

/// Closed-form number of canonical partitions for `sizes`.
///
/// The multinomial coefficient of the sizes, divided by `k!` for every
/// maximal run of `k` adjacent equal sizes. Saturates at `u128::MAX`.
///
/// ```
/// use teamforge_solver::canonical_partition_count;
///
/// assert_eq!(canonical_partition_count(&[3, 3, 3]), 280);
/// assert_eq!(canonical_partition_count(&[3, 4, 3]), 4200);
/// ```
pub fn canonical_partition_count(sizes: &[usize]) -> u128 {
    fn count(sizes: &[usize]) -> Option<u128> {
        let mut remaining: u128 = sizes.iter().map(|&s| s as u128).sum();
        let mut total: u128 = 1;
        let mut run: u128 = 0;

        for (i, &size) in sizes.iter().enumerate() {
            run = if i > 0 && sizes[i - 1] == size { run + 1 } else { 1 };
            let size = size as u128;
            // Exact: the running product counts unordered blocks of this run.
            total = total.checked_mul(checked_binomial(remaining, size)?)? / run;
            remaining -= size;
        }
        Some(total)
    }
    count(sizes).unwrap_or(u128::MAX)
}
