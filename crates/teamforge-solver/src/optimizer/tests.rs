//! Tests for the optimization driver.

use std::sync::atomic::{AtomicU64, Ordering};

use teamforge_core::{ConflictScore, Partition, TerminationReason};
use teamforge_scoring::score_teams;
use teamforge_test::{matrix, numbered_people, people, team_ids};

use super::*;

fn ids(groups: &[&[&str]]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| g.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn test_two_pairs_scenario() {
    let people = numbered_people(4);
    let m = matrix(&[("1", "2", 5)]);

    let result = optimize(&people, &[2, 2], &m, DEFAULT_MAX_RESULTS).unwrap();

    assert_eq!(result.total_combinations_checked, 3);
    assert_eq!(result.min_score(), Some(ConflictScore::ZERO));
    assert_eq!(result.best_assignments.len(), 2);
    assert_eq!(
        team_ids(&result.best_assignments[0]),
        ids(&[&["1", "3"], &["2", "4"]])
    );
    assert_eq!(
        team_ids(&result.best_assignments[1]),
        ids(&[&["1", "4"], &["2", "3"]])
    );
    assert_eq!(result.statistics.improvements, 2);
}

#[test]
fn test_three_triples_all_tied() {
    let people = numbered_people(9);

    let result = optimize(&people, &[3, 3, 3], &ConflictMatrix::new(), 10).unwrap();

    assert_eq!(result.total_combinations_checked, 280);
    assert_eq!(result.best_assignments.len(), 10);
    assert!(result
        .best_assignments
        .iter()
        .all(|a| a.conflict_score == ConflictScore::ZERO));
    assert_eq!(
        team_ids(&result.best_assignments[0]),
        ids(&[&["1", "2", "3"], &["4", "5", "6"], &["7", "8", "9"]])
    );
    assert_eq!(
        team_ids(&result.best_assignments[1]),
        ids(&[&["1", "2", "3"], &["4", "5", "7"], &["6", "8", "9"]])
    );
    assert_eq!(result.statistics.ties_dropped, 270);
}

#[test]
fn test_single_team_scores_every_pair() {
    let people = numbered_people(5);
    let m = matrix(&[("1", "2", 1), ("3", "2", 2), ("5", "4", 3), ("1", "5", 4)]);

    let result = optimize(&people, &[5], &m, 10).unwrap();

    assert_eq!(result.total_combinations_checked, 1);
    assert_eq!(result.best_assignments.len(), 1);
    assert_eq!(result.min_score(), Some(ConflictScore::of(10)));
}

#[test]
fn test_returned_assignments_cover_population() {
    let people = numbered_people(8);
    let m = matrix(&[("1", "2", 3), ("3", "4", 2), ("5", "6", 1), ("7", "8", 1), ("1", "8", 2)]);
    let sizes = [3, 2, 3];

    let result = optimize(&people, &sizes, &m, 25).unwrap();

    assert!(!result.best_assignments.is_empty());
    for assignment in &result.best_assignments {
        let team_sizes: Vec<usize> = assignment.teams.iter().map(|t| t.members.len()).collect();
        assert_eq!(team_sizes, sizes);

        let mut seen: Vec<String> = team_ids(assignment).into_iter().flatten().collect();
        seen.sort();
        let mut all: Vec<String> = people.iter().map(|p| p.id.clone()).collect();
        all.sort();
        assert_eq!(seen, all);

        assert_eq!(score_teams(&assignment.teams, &m), assignment.conflict_score);
    }
}

#[test]
fn test_minimum_is_exact() {
    let people = numbered_people(6);
    let m = matrix(&[
        ("1", "2", 4),
        ("1", "3", 4),
        ("2", "3", 4),
        ("4", "5", 1),
        ("5", "6", 1),
        ("4", "6", 1),
    ]);

    let result = optimize(&people, &[3, 3], &m, 100).unwrap();

    // Brute force over every canonical partition.
    let table = ConflictTable::new(&people, &m);
    let brute = partitions(&people, &[3, 3])
        .map(|p| table.score(&p))
        .min()
        .unwrap();
    assert_eq!(result.min_score(), Some(brute));
    // Two of one triangle always share a team, as do two of the other.
    assert_eq!(brute, ConflictScore::of(5));
    assert_eq!(result.best_assignments.len(), 9);
}

#[test]
fn test_identical_input_gives_identical_output() {
    let people = numbered_people(8);
    let m = matrix(&[("1", "5", 2), ("2", "6", 1), ("3", "7", 2), ("4", "8", 1)]);

    let first = optimize(&people, &[2, 2, 2, 2], &m, 10).unwrap();
    let second = optimize(&people, &[2, 2, 2, 2], &m, 10).unwrap();

    assert_eq!(first.best_assignments, second.best_assignments);
    assert_eq!(
        first.total_combinations_checked,
        second.total_combinations_checked
    );
}

#[test]
fn test_cap_of_one_keeps_first_tie() {
    let people = numbered_people(4);

    let result = optimize(&people, &[2, 2], &ConflictMatrix::new(), 1).unwrap();

    assert_eq!(result.best_assignments.len(), 1);
    assert_eq!(
        team_ids(&result.best_assignments[0]),
        ids(&[&["1", "2"], &["3", "4"]])
    );
}

#[test]
fn test_empty_population() {
    let result = optimize(&[], &[], &ConflictMatrix::new(), 10).unwrap();

    assert_eq!(result.total_combinations_checked, 1);
    assert_eq!(result.best_assignments.len(), 1);
    assert!(result.best_assignments[0].teams.is_empty());
}

#[test]
fn test_size_mismatch_is_invalid_input() {
    let people = numbered_people(4);
    let err = optimize(&people, &[2, 3], &ConflictMatrix::new(), 10).unwrap_err();

    assert!(matches!(err, TeamForgeError::InvalidInput(_)));
    assert!(err.partial_result().is_none());
    assert!(err.to_string().contains("sum to 5"));
}

#[test]
fn test_malformed_sizes_are_invalid_input() {
    let people = numbered_people(4);
    let m = ConflictMatrix::new();

    for (sizes, max) in [(&[][..], 10), (&[2, 0, 2][..], 10), (&[2, 2][..], 0)] {
        let err = optimize(&people, sizes, &m, max).unwrap_err();
        assert!(
            matches!(err, TeamForgeError::InvalidInput(_)),
            "sizes = {:?}, max = {}",
            sizes,
            max
        );
    }
}

#[test]
fn test_invalid_input_never_scores() {
    let calls = AtomicU64::new(0);
    let scorer = |_: &Partition| {
        calls.fetch_add(1, Ordering::SeqCst);
        ConflictScore::ZERO
    };

    let people = numbered_people(3);
    let err = TeamOptimizer::new()
        .optimize_with_scorer(&people, &[2, 2], &scorer)
        .unwrap_err();

    assert!(matches!(err, TeamForgeError::InvalidInput(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unrepresentable_conflict_total_is_invalid_input() {
    let half = u64::MAX / 2 + 1;
    let m = matrix(&[("1", "2", half), ("2", "3", half)]);

    let err = optimize(&numbered_people(3), &[3], &m, 10).unwrap_err();

    assert!(matches!(err, TeamForgeError::InvalidInput(_)));
    assert!(err.to_string().contains("u64::MAX"));
    assert!(err.partial_result().is_none());
}

#[test]
fn test_large_conflicts_score_exactly() {
    let half = u64::MAX / 2;
    let people = numbered_people(4);
    let m = matrix(&[("1", "2", half), ("3", "4", half)]);

    let single = optimize(&people[..3], &[3], &m, 10).unwrap();
    assert_eq!(single.min_score(), Some(ConflictScore::of(half)));

    let result = optimize(&people, &[2, 2], &m, 10).unwrap();
    assert_eq!(result.min_score(), Some(ConflictScore::ZERO));
    assert_eq!(result.best_assignments.len(), 2);

    let result = optimize(&people, &[4], &m, 10).unwrap();
    assert_eq!(result.min_score(), Some(ConflictScore::of(u64::MAX - 1)));
}

#[test]
fn test_custom_scorer() {
    let people = numbered_people(4);
    // Prefer the partition whose first team holds person index 3.
    let scorer = |p: &Partition| {
        if p.teams()[0].contains(&3) {
            ConflictScore::ZERO
        } else {
            ConflictScore::of(1)
        }
    };

    let result = TeamOptimizer::new()
        .optimize_with_scorer(&people, &[2, 2], &scorer)
        .unwrap();

    assert_eq!(result.best_assignments.len(), 1);
    assert_eq!(
        team_ids(&result.best_assignments[0]),
        ids(&[&["1", "4"], &["2", "3"]])
    );
}

#[test]
fn test_preset_cancellation_scores_nothing() {
    let handle = SolverHandle::new();
    handle.terminate_early();

    let err = TeamOptimizer::new()
        .with_handle(&handle)
        .optimize(&numbered_people(4), &[2, 2], &ConflictMatrix::new())
        .unwrap_err();

    assert_eq!(err.termination_reason(), Some(TerminationReason::Cancelled));
    let partial = err.into_partial_result().unwrap();
    assert_eq!(partial.total_combinations_checked, 0);
    assert!(partial.best_assignments.is_empty());
}

#[test]
fn test_cancellation_between_partitions_keeps_best_set() {
    let handle = SolverHandle::new();
    let remote = handle.clone();
    let scored = AtomicU64::new(0);
    let people = numbered_people(9);
    let table = ConflictTable::new(&people, &ConflictMatrix::new());
    let scorer = |p: &Partition| {
        if scored.fetch_add(1, Ordering::SeqCst) + 1 == 5 {
            remote.terminate_early();
        }
        table.score(p)
    };

    let err = TeamOptimizer::new()
        .with_max_results(3)
        .with_handle(&handle)
        .optimize_with_scorer(&people, &[3, 3, 3], &scorer)
        .unwrap_err();

    let partial = err.partial_result().unwrap();
    assert!(matches!(err, TeamForgeError::Cancelled { .. }));
    assert_eq!(partial.total_combinations_checked, 5);
    assert_eq!(partial.best_assignments.len(), 3);
    assert_eq!(
        team_ids(&partial.best_assignments[0]),
        ids(&[&["1", "2", "3"], &["4", "5", "6"], &["7", "8", "9"]])
    );
}

#[test]
fn test_partition_budget() {
    let people = numbered_people(9);
    let m = ConflictMatrix::new();

    let full = optimize(&people, &[3, 3, 3], &m, 10).unwrap();
    let err = TeamOptimizer::new()
        .with_partition_count_limit(100)
        .optimize(&people, &[3, 3, 3], &m)
        .unwrap_err();

    assert_eq!(
        err.termination_reason(),
        Some(TerminationReason::SearchLimitReached)
    );
    let partial = err.into_partial_result().unwrap();
    assert_eq!(partial.total_combinations_checked, 100);
    assert_eq!(partial.best_assignments, full.best_assignments);
}

#[test]
fn test_budget_equal_to_space_completes() {
    let people = numbered_people(9);
    let result = TeamOptimizer::new()
        .with_partition_count_limit(280)
        .optimize(&people, &[3, 3, 3], &ConflictMatrix::new())
        .unwrap();

    assert_eq!(result.total_combinations_checked, 280);
}

#[test]
fn test_zero_deadline() {
    let err = TeamOptimizer::new()
        .with_time_limit(Duration::ZERO)
        .optimize(&numbered_people(4), &[2, 2], &ConflictMatrix::new())
        .unwrap_err();

    assert!(matches!(err, TeamForgeError::DeadlineExceeded { .. }));
    assert_eq!(err.partial_result().unwrap().total_combinations_checked, 0);
}

#[test]
fn test_generous_limits_match_unlimited_run() {
    let people = numbered_people(8);
    let m = matrix(&[("1", "2", 1), ("3", "4", 1)]);
    let handle = SolverHandle::new();

    let limited = TeamOptimizer::new()
        .with_time_limit(Duration::from_secs(3600))
        .with_partition_count_limit(u64::MAX)
        .with_handle(&handle)
        .optimize(&people, &[4, 4], &m)
        .unwrap();
    let plain = optimize(&people, &[4, 4], &m, 10).unwrap();

    assert_eq!(limited.best_assignments, plain.best_assignments);
    assert_eq!(limited.total_combinations_checked, 35);
}

#[test]
fn test_solve_request_overrides_cap() {
    let request = OptimizationRequest::new(numbered_people(4), vec![2, 2], ConflictMatrix::new())
        .with_max_results(2);

    let result = TeamOptimizer::new().with_max_results(1).solve(&request).unwrap();
    assert_eq!(result.best_assignments.len(), 2);

    let request = OptimizationRequest::new(numbered_people(4), vec![2, 2], ConflictMatrix::new());
    let result = TeamOptimizer::new().with_max_results(1).solve(&request).unwrap();
    assert_eq!(result.best_assignments.len(), 1);
}

#[test]
fn test_from_config() {
    let config = SolverConfig::new()
        .with_max_results(2)
        .with_partition_count_limit(2);
    let optimizer = TeamOptimizer::from_config(&config).unwrap();
    assert_eq!(optimizer.max_results(), 2);

    let err = optimizer
        .optimize(&people(&["a", "b", "c", "d"]), &[2, 2], &ConflictMatrix::new())
        .unwrap_err();
    assert!(matches!(err, TeamForgeError::SearchLimitReached { .. }));

    let bad = SolverConfig::new().with_max_results(0);
    assert!(matches!(
        TeamOptimizer::from_config(&bad),
        Err(TeamForgeError::Config(_))
    ));
}
