//! Output contract of an optimization run.

use serde::{Deserialize, Serialize};

use super::{Partition, Person};
use crate::score::ConflictScore;
use crate::statistics::SearchStatistics;

/// One team slot of an assignment, with resolved person records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTeam {
    pub members: Vec<Person>,
}

/// A partition together with its conflict score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub teams: Vec<AssignedTeam>,
    pub conflict_score: ConflictScore,
}

impl Assignment {
    /// Resolves the member indices of `partition` against `people`.
    ///
    /// # Panics
    /// Panics if the partition refers to an index outside `people`.
    pub fn from_partition(partition: &Partition, people: &[Person], score: ConflictScore) -> Self {
        let teams = partition
            .teams()
            .iter()
            .map(|team| AssignedTeam {
                members: team.iter().map(|&idx| people[idx].clone()).collect(),
            })
            .collect();
        Self {
            teams,
            conflict_score: score,
        }
    }

    /// Member ids per team, in slot order.
    pub fn team_ids(&self) -> Vec<Vec<&str>> {
        self.teams
            .iter()
            .map(|t| t.members.iter().map(|p| p.id.as_str()).collect())
            .collect()
    }
}

/// Tied-best assignments plus performance counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub best_assignments: Vec<Assignment>,
    pub total_combinations_checked: u64,
    pub execution_time_ms: f64,
    #[serde(skip)]
    pub statistics: SearchStatistics,
}

impl OptimizationResult {
    /// The shared score of the best assignments, if any partition was scored.
    pub fn min_score(&self) -> Option<ConflictScore> {
        self.best_assignments.first().map(|a| a.conflict_score)
    }
}
