use serde::{Deserialize, Serialize};

use super::{ConflictMatrix, Person};

/// Number of tied best assignments kept when the caller does not say.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// The optimizer input contract.
///
/// ```
/// use teamforge_core::OptimizationRequest;
///
/// let json = r#"{
///     "people": [{"id": "1", "name": "Ada"}, {"id": "2", "name": "Bo"}],
///     "teamSizes": [1, 1],
///     "conflictMatrix": {"1": {"2": 4}}
/// }"#;
///
/// let request: OptimizationRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.team_sizes, vec![1, 1]);
/// assert_eq!(request.max_results(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub people: Vec<Person>,
    pub team_sizes: Vec<usize>,
    #[serde(default)]
    pub conflict_matrix: ConflictMatrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl OptimizationRequest {
    pub fn new(people: Vec<Person>, team_sizes: Vec<usize>, conflict_matrix: ConflictMatrix) -> Self {
        Self {
            people,
            team_sizes,
            conflict_matrix,
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// The requested cap, or [`DEFAULT_MAX_RESULTS`].
    pub fn max_results(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_RESULTS)
    }
}
