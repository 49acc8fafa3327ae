//! Index-based partitions produced by the search.

use smallvec::SmallVec;

/// Members of one team slot, as indices into the population slice.
///
/// Members keep the relative order they had in the population.
pub type Team = SmallVec<[usize; 8]>;

/// An ordered sequence of teams, one per declared team size.
///
/// Indices refer to the population the partition was generated from;
/// [`Assignment::from_partition`](crate::Assignment::from_partition)
/// resolves them back to [`Person`](crate::Person) records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Partition {
    teams: Vec<Team>,
}

impl Partition {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }

    /// Number of team slots.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team cardinalities in slot order.
    pub fn sizes(&self) -> Vec<usize> {
        self.teams.iter().map(|t| t.len()).collect()
    }

    /// Total number of placed people.
    pub fn person_count(&self) -> usize {
        self.teams.iter().map(|t| t.len()).sum()
    }
}

impl From<Vec<Team>> for Partition {
    fn from(teams: Vec<Team>) -> Self {
        Self::new(teams)
    }
}
