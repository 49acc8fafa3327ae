//! Optimization driver.
//!
//! Pulls canonical partitions one at a time, scores them, and keeps the
//! tied-best set. Nothing beyond the current partition and the bounded
//! best-set is held in memory.
//!
//! Logging levels:
//! - **INFO**: search start/end, problem scale, early termination
//! - **DEBUG**: each strict improvement of the minimum score, rejected input
//! - **TRACE**: every scored partition

use std::time::Duration;

use teamforge_config::SolverConfig;
use teamforge_core::{
    ConflictMatrix, OptimizationRequest, OptimizationResult, Person, Result, TeamForgeError,
    DEFAULT_MAX_RESULTS,
};
use teamforge_scoring::{ConflictTable, PartitionScorer};
use tracing::{debug, info, trace};

use crate::best_set::{BestSet, Offer};
use crate::handle::SolverHandle;
use crate::partition::{canonical_partition_count, partitions};
use crate::scope::SearchScope;
use crate::termination::{
    OrTermination, PartitionCountTermination, Termination, TimeTermination,
};

/// Rejects input the search cannot cover exactly.
///
/// Runs before any partition is generated.
pub fn validate_input(people: &[Person], team_sizes: &[usize], max_results: usize) -> Result<()> {
    if max_results == 0 {
        return Err(TeamForgeError::InvalidInput(
            "maxResults must be at least 1".to_string(),
        ));
    }
    if team_sizes.is_empty() && !people.is_empty() {
        return Err(TeamForgeError::InvalidInput(format!(
            "no team sizes given for {} people",
            people.len()
        )));
    }
    if let Some(slot) = team_sizes.iter().position(|&size| size == 0) {
        return Err(TeamForgeError::InvalidInput(format!(
            "team size at slot {} must be positive",
            slot
        )));
    }
    let total: usize = team_sizes.iter().sum();
    if total != people.len() {
        return Err(TeamForgeError::InvalidInput(format!(
            "team sizes sum to {} but there are {} people",
            total,
            people.len()
        )));
    }
    Ok(())
}

/// Runs the exhaustive search with a caller-supplied scorer and termination.
///
/// Completed runs return `Ok`; a fired termination returns the matching
/// [`TeamForgeError`] carrying the best-set accumulated so far.
pub fn run_search<Sc, T>(
    people: &[Person],
    team_sizes: &[usize],
    scorer: &Sc,
    max_results: usize,
    termination: &T,
) -> Result<OptimizationResult>
where
    Sc: PartitionScorer + ?Sized,
    T: Termination,
{
    if let Err(err) = validate_input(people, team_sizes, max_results) {
        debug!(event = "validation_failed", error = %err);
        return Err(err);
    }

    info!(
        event = "search_start",
        people = people.len() as u64,
        teams = team_sizes.len() as u64,
        max_results = max_results as u64,
        canonical_partitions = %canonical_partition_count(team_sizes),
    );

    let mut scope = SearchScope::new();
    let mut best = BestSet::new(max_results);
    let mut terminated = None;
    scope.start_search();

    for partition in partitions(people, team_sizes) {
        if let Some(reason) = termination.check(&scope) {
            terminated = Some(reason);
            break;
        }

        scope.record_partition();
        let score = scorer.score(&partition);
        trace!(event = "partition_scored", score = score.score());

        match best.offer(partition, score) {
            Offer::Improved => {
                scope.record_improvement(score);
                debug!(
                    event = "new_best",
                    score = score.score(),
                    partitions_checked = scope.partitions_checked(),
                );
            }
            Offer::DroppedTie => scope.record_dropped_tie(),
            Offer::Tied | Offer::Rejected => {}
        }
    }

    let statistics = scope.finish();
    let result = OptimizationResult {
        best_assignments: best.to_assignments(people),
        total_combinations_checked: statistics.partitions_checked,
        execution_time_ms: statistics.duration.as_secs_f64() * 1000.0,
        statistics,
    };

    if let Some(reason) = terminated {
        info!(
            event = "search_terminated",
            reason = %reason,
            partitions_checked = result.total_combinations_checked,
            best_score = result.min_score().map(|s| s.score()),
        );
        return Err(TeamForgeError::terminated(reason, result));
    }

    info!(
        event = "search_end",
        partitions_checked = result.total_combinations_checked,
        best_score = result.min_score().map(|s| s.score()),
        tied = result.best_assignments.len() as u64,
        ties_dropped = result.statistics.ties_dropped,
        duration_ms = result.statistics.duration.as_millis() as u64,
    );
    Ok(result)
}

/// Finds the partitions of `people` into `team_sizes` with minimum total
/// conflict, keeping up to `max_results` tied solutions in generation order.
///
/// Runs to completion; see [`TeamOptimizer`] for time limits and
/// cancellation.
///
/// # Errors
///
/// [`TeamForgeError::InvalidInput`] if the sizes do not cover the
/// population exactly, a size is zero, `max_results` is zero, or the
/// conflict counts among `people` sum past `u64::MAX`.
///
/// # Examples
///
/// ```
/// use teamforge_core::{ConflictMatrix, Person};
/// use teamforge_solver::optimize;
///
/// let people: Vec<Person> = ["1", "2", "3", "4"].into_iter().map(Person::with_id).collect();
/// let matrix = ConflictMatrix::new().with("1", "2", 5);
///
/// let result = optimize(&people, &[2, 2], &matrix, 10).unwrap();
///
/// assert_eq!(result.total_combinations_checked, 3);
/// assert_eq!(result.best_assignments.len(), 2);
/// assert!(result.best_assignments.iter().all(|a| a.conflict_score.is_zero()));
/// ```
pub fn optimize(
    people: &[Person],
    team_sizes: &[usize],
    conflict_matrix: &ConflictMatrix,
    max_results: usize,
) -> Result<OptimizationResult> {
    TeamOptimizer::new()
        .with_max_results(max_results)
        .optimize(people, team_sizes, conflict_matrix)
}

/// Configurable entry point for the partition search.
///
/// Adds optional time, partition-count and external cancellation limits to
/// [`optimize`]. Without any limit it behaves exactly like `optimize`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use teamforge_core::{ConflictMatrix, Person};
/// use teamforge_solver::{SolverHandle, TeamOptimizer};
///
/// let people: Vec<Person> = (1..=6).map(|i| Person::with_id(i.to_string())).collect();
/// let handle = SolverHandle::new();
///
/// let optimizer = TeamOptimizer::new()
///     .with_max_results(3)
///     .with_time_limit(Duration::from_secs(5))
///     .with_handle(&handle);
///
/// let result = optimizer.optimize(&people, &[3, 3], &ConflictMatrix::new()).unwrap();
/// assert_eq!(result.total_combinations_checked, 10);
/// assert_eq!(result.best_assignments.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TeamOptimizer {
    max_results: usize,
    time_limit: Option<Duration>,
    partition_count_limit: Option<u64>,
    handle: Option<SolverHandle>,
}

impl Default for TeamOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamOptimizer {
    pub fn new() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            time_limit: None,
            partition_count_limit: None,
            handle: None,
        }
    }

    /// Creates an optimizer from a loaded configuration.
    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TeamForgeError::Config(e.to_string()))?;
        Ok(Self {
            max_results: config.max_results,
            time_limit: config.time_limit(),
            partition_count_limit: config.partition_count_limit(),
            handle: None,
        })
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_partition_count_limit(mut self, limit: u64) -> Self {
        self.partition_count_limit = Some(limit);
        self
    }

    /// Lets `handle` cancel searches run by this optimizer.
    pub fn with_handle(mut self, handle: &SolverHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    fn termination(&self) -> impl Termination {
        OrTermination((
            self.handle.as_ref().map(SolverHandle::termination),
            self.time_limit.map(TimeTermination::new),
            self.partition_count_limit.map(PartitionCountTermination::new),
        ))
    }

    /// Searches with the conflict matrix as scorer.
    pub fn optimize(
        &self,
        people: &[Person],
        team_sizes: &[usize],
        conflict_matrix: &ConflictMatrix,
    ) -> Result<OptimizationResult> {
        let table = ConflictTable::new(people, conflict_matrix);
        if table.checked_total().is_none() {
            let err = TeamForgeError::InvalidInput(
                "conflict counts within the population sum past u64::MAX".to_string(),
            );
            debug!(event = "validation_failed", error = %err);
            return Err(err);
        }
        self.optimize_with_scorer(people, team_sizes, &table)
    }

    /// Searches with a custom partition scorer.
    pub fn optimize_with_scorer<Sc>(
        &self,
        people: &[Person],
        team_sizes: &[usize],
        scorer: &Sc,
    ) -> Result<OptimizationResult>
    where
        Sc: PartitionScorer + ?Sized,
    {
        run_search(
            people,
            team_sizes,
            scorer,
            self.max_results,
            &self.termination(),
        )
    }

    /// Runs a request; its `maxResults`, when present, overrides the
    /// optimizer's cap.
    pub fn solve(&self, request: &OptimizationRequest) -> Result<OptimizationResult> {
        let optimizer = match request.max_results {
            Some(max_results) => self.clone().with_max_results(max_results),
            None => self.clone(),
        };
        optimizer.optimize(
            &request.people,
            &request.team_sizes,
            &request.conflict_matrix,
        )
    }
}

#[cfg(test)]
mod tests;
