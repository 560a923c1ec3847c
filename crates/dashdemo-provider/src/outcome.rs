//! Result value returned by every provider call

use dashdemo_core::DashboardData;
use serde::Serialize;

/// Message shown when a failure carries no text of its own
pub const DEFAULT_FETCH_ERROR: &str = "Failed to load data";

/// A failed data load. The message is user-visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Create a fetch error. Blank messages fall back to [`DEFAULT_FETCH_ERROR`].
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::default()
        } else {
            Self { message }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for FetchError {
    fn default() -> Self {
        Self {
            message: DEFAULT_FETCH_ERROR.to_string(),
        }
    }
}

/// Outcome of one `load_dashboard_data` call.
///
/// Providers never panic or return `Err` across the boundary; every failure
/// is carried here.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(Box<DashboardData>),
    Failure(FetchError),
}

impl FetchOutcome {
    pub fn success(data: DashboardData) -> Self {
        Self::Success(Box::new(data))
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(FetchError::new(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::sample_dashboard;

    #[test]
    fn test_fetch_error_keeps_message() {
        let err = FetchError::new("network down");
        assert_eq!(err.message(), "network down");
        assert_eq!(err.to_string(), "network down");
    }

    #[test]
    fn test_blank_message_falls_back() {
        assert_eq!(FetchError::new("").message(), DEFAULT_FETCH_ERROR);
        assert_eq!(FetchError::new("   ").message(), DEFAULT_FETCH_ERROR);
        assert_eq!(FetchError::default().message(), "Failed to load data");
    }

    #[test]
    fn test_outcome_constructors() {
        assert!(FetchOutcome::success(sample_dashboard()).is_success());

        let outcome = FetchOutcome::failure("boom");
        assert!(!outcome.is_success());
        assert_eq!(outcome, FetchOutcome::Failure(FetchError::new("boom")));
    }
}
