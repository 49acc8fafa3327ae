use teamforge_core::{AssignedTeam, ConflictMatrix, ConflictScore, Partition};

/// Scores index-based partitions produced by the search.
///
/// Implementations must be pure: the same partition always yields the
/// same score.
pub trait PartitionScorer: Send + Sync {
    /// Total conflict of all unordered teammate pairs in `partition`.
    fn score(&self, partition: &Partition) -> ConflictScore;
}

impl<F> PartitionScorer for F
where
    F: Fn(&Partition) -> ConflictScore + Send + Sync,
{
    fn score(&self, partition: &Partition) -> ConflictScore {
        self(partition)
    }
}

/// Scores resolved teams against the sparse matrix.
///
/// The total saturates at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use teamforge_core::{AssignedTeam, ConflictMatrix, ConflictScore, Person};
/// use teamforge_scoring::score_teams;
///
/// let matrix = ConflictMatrix::new().with("1", "2", 5);
/// let teams = vec![
///     AssignedTeam { members: vec![Person::with_id("1"), Person::with_id("2")] },
///     AssignedTeam { members: vec![Person::with_id("3"), Person::with_id("4")] },
/// ];
///
/// assert_eq!(score_teams(&teams, &matrix), ConflictScore::of(5));
/// ```
pub fn score_teams(teams: &[AssignedTeam], matrix: &ConflictMatrix) -> ConflictScore {
    let mut total = 0u64;
    for team in teams {
        let members = &team.members;
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                total = total.saturating_add(matrix.conflict(&a.id, &b.id));
            }
        }
    }
    ConflictScore::of(total)
}
