//! Fixed-size subsets of an ordered sequence.
//!
//! Subsets are produced lazily in lexicographic order of their positions:
//! fix element `i` as selected, then combine `k - 1` from the elements after
//! it. Each subset keeps the relative input order of its members.

use std::iter::FusedIterator;

use smallvec::SmallVec;

/// Positions of the current subset.
pub(crate) type Positions = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Running,
    Done,
}

/// Lending cursor over the position tuples of all `k`-subsets of `0..n`.
///
/// `advance` hands out a borrowed slice so the partition generator can walk
/// candidates without allocating one vector per subset.
#[derive(Debug, Clone)]
pub(crate) struct PositionCursor {
    n: usize,
    k: usize,
    positions: Positions,
    state: CursorState,
}

impl PositionCursor {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            positions: SmallVec::new(),
            state: CursorState::Fresh,
        }
    }

    /// Moves to the next subset, returning its positions.
    pub(crate) fn advance(&mut self) -> Option<&[usize]> {
        match self.state {
            CursorState::Done => return None,
            CursorState::Fresh => {
                if self.k > self.n {
                    self.state = CursorState::Done;
                    return None;
                }
                self.positions = (0..self.k).collect();
                self.state = CursorState::Running;
            }
            CursorState::Running => {
                // Rightmost position that can still move right.
                let movable = (0..self.k)
                    .rev()
                    .find(|&i| self.positions[i] < self.n - self.k + i);
                let Some(i) = movable else {
                    self.state = CursorState::Done;
                    return None;
                };
                self.positions[i] += 1;
                for j in (i + 1)..self.k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
            }
        }
        Some(&self.positions)
    }

    /// Rewinds to before the first subset.
    pub(crate) fn reset(&mut self) {
        self.positions.clear();
        self.state = CursorState::Fresh;
    }
}

/// Iterator over all `k`-element subsets of a slice.
///
/// Finite and deterministic; `k = 0` yields one empty subset and `k`
/// larger than the slice yields nothing. Clone it, or call
/// [`restart`](Self::restart), to enumerate again.
///
/// # Examples
///
/// ```
/// use teamforge_solver::combinations;
///
/// let subsets: Vec<Vec<char>> = combinations(&['a', 'b', 'c'], 2).collect();
/// assert_eq!(subsets, vec![vec!['a', 'b'], vec!['a', 'c'], vec!['b', 'c']]);
///
/// assert_eq!(combinations(&['a'], 0).count(), 1);
/// assert_eq!(combinations(&['a'], 2).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    cursor: PositionCursor,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            cursor: PositionCursor::new(items.len(), k),
        }
    }

    /// Rewinds to the first subset.
    pub fn restart(&mut self) {
        self.cursor.reset();
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.cursor
            .advance()
            .map(|positions| positions.iter().map(|&p| items[p].clone()).collect())
    }
}

impl<T: Clone> FusedIterator for Combinations<'_, T> {}

/// Lazily enumerates the `k`-subsets of `items`.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations::new(items, k)
}
