//! Population fixtures.

use teamforge_core::{Assignment, ConflictMatrix, Person};

/// People whose names equal their ids.
pub fn people(ids: &[&str]) -> Vec<Person> {
    ids.iter().map(|&id| Person::with_id(id)).collect()
}

/// People with explicit names.
pub fn named_people(entries: &[(&str, &str)]) -> Vec<Person> {
    entries
        .iter()
        .map(|&(id, name)| Person::new(id, name))
        .collect()
}

/// People with ids `"1"` through `n`.
///
/// Ids are single characters only for `n <= 9`; beyond that the
/// lexicographic id order no longer matches numeric order.
pub fn numbered_people(n: usize) -> Vec<Person> {
    (1..=n).map(|i| Person::with_id(i.to_string())).collect()
}

/// A directed conflict matrix from `(a, b, count)` triples.
pub fn matrix(entries: &[(&str, &str, u64)]) -> ConflictMatrix {
    entries.iter().map(|&(a, b, n)| (a, b, n)).collect()
}

/// Member ids per team of an assignment, owned for easy comparison.
pub fn team_ids(assignment: &Assignment) -> Vec<Vec<String>> {
    assignment
        .teams
        .iter()
        .map(|t| t.members.iter().map(|p| p.id.clone()).collect())
        .collect()
}
