use serde::{Deserialize, Serialize};

/// A member of the population being split into teams.
///
/// `id` is compared lexicographically; that order drives canonical
/// deduplication of equal-size team slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Creates a person whose name is the same as its id.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
        }
    }
}
