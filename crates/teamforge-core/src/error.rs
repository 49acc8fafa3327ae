//! Error types for TeamForge

use thiserror::Error;

use crate::domain::OptimizationResult;

/// Why a search stopped before the partition stream was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// An external cancellation flag was raised.
    Cancelled,
    /// The configured time limit elapsed.
    DeadlineExceeded,
    /// The configured partition budget was consumed.
    SearchLimitReached,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Cancelled => write!(f, "cancelled"),
            TerminationReason::DeadlineExceeded => write!(f, "deadline exceeded"),
            TerminationReason::SearchLimitReached => write!(f, "search limit reached"),
        }
    }
}

/// Main error type for TeamForge operations
#[derive(Debug, Error)]
pub enum TeamForgeError {
    /// Input rejected before the search started
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Search was cancelled before the partition stream was exhausted
    #[error(
        "Search was cancelled after {} partitions",
        .partial.total_combinations_checked
    )]
    Cancelled { partial: Box<OptimizationResult> },

    /// Search ran past its time limit
    #[error(
        "Search deadline exceeded after {} partitions",
        .partial.total_combinations_checked
    )]
    DeadlineExceeded { partial: Box<OptimizationResult> },

    /// Search consumed its partition budget
    #[error(
        "Search limit reached after {} partitions",
        .partial.total_combinations_checked
    )]
    SearchLimitReached { partial: Box<OptimizationResult> },

    /// Error in optimizer configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TeamForgeError {
    /// Builds the error matching a termination reason.
    pub fn terminated(reason: TerminationReason, partial: OptimizationResult) -> Self {
        let partial = Box::new(partial);
        match reason {
            TerminationReason::Cancelled => TeamForgeError::Cancelled { partial },
            TerminationReason::DeadlineExceeded => TeamForgeError::DeadlineExceeded { partial },
            TerminationReason::SearchLimitReached => {
                TeamForgeError::SearchLimitReached { partial }
            }
        }
    }

    /// Returns the termination reason, if this error ended a running search.
    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self {
            TeamForgeError::Cancelled { .. } => Some(TerminationReason::Cancelled),
            TeamForgeError::DeadlineExceeded { .. } => Some(TerminationReason::DeadlineExceeded),
            TeamForgeError::SearchLimitReached { .. } => {
                Some(TerminationReason::SearchLimitReached)
            }
            _ => None,
        }
    }

    /// Returns the best-set accumulated before the search was terminated.
    pub fn partial_result(&self) -> Option<&OptimizationResult> {
        match self {
            TeamForgeError::Cancelled { partial }
            | TeamForgeError::DeadlineExceeded { partial }
            | TeamForgeError::SearchLimitReached { partial } => Some(partial),
            _ => None,
        }
    }

    /// Consumes the error, returning the partial result if there is one.
    pub fn into_partial_result(self) -> Option<OptimizationResult> {
        match self {
            TeamForgeError::Cancelled { partial }
            | TeamForgeError::DeadlineExceeded { partial }
            | TeamForgeError::SearchLimitReached { partial } => Some(*partial),
            _ => None,
        }
    }
}

/// Result type alias for TeamForge operations
pub type Result<T> = std::result::Result<T, TeamForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = TeamForgeError::InvalidInput("team sizes sum to 5 but there are 4 people".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: team sizes sum to 5 but there are 4 people"
        );
        assert!(err.partial_result().is_none());
        assert!(err.termination_reason().is_none());
    }

    #[test]
    fn test_terminated_carries_partial() {
        let partial = OptimizationResult {
            total_combinations_checked: 42,
            ..OptimizationResult::default()
        };
        let err = TeamForgeError::terminated(TerminationReason::DeadlineExceeded, partial);

        assert_eq!(
            err.termination_reason(),
            Some(TerminationReason::DeadlineExceeded)
        );
        assert_eq!(err.to_string(), "Search deadline exceeded after 42 partitions");
        assert_eq!(err.into_partial_result().unwrap().total_combinations_checked, 42);
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(TerminationReason::Cancelled.to_string(), "cancelled");
        assert_eq!(
            TerminationReason::SearchLimitReached.to_string(),
            "search limit reached"
        );
    }
}
