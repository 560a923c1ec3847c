//! Test utilities for provider consumers
//!
//! [`ScriptedProvider`] replays a queue of scripted responses, one per call,
//! so tests can drive the success, failure and retry paths deterministically.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::fixture::sample_dashboard;
use crate::{DashboardProvider, FetchOutcome};

#[derive(Debug, Clone)]
enum Step {
    Return(FetchOutcome),
    Panic(String),
}

/// Provider that answers calls from a script.
///
/// Once the script is exhausted every further call succeeds with
/// [`sample_dashboard`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<Step>>,
    latency: Duration,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency` (tokio time, so paused clocks apply)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn then_succeed(self) -> Self {
        self.then_return(FetchOutcome::success(sample_dashboard()))
    }

    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.then_return(FetchOutcome::failure(message))
    }

    pub fn then_return(self, outcome: FetchOutcome) -> Self {
        self.push(Step::Return(outcome))
    }

    /// Make the call panic, simulating a provider that breaks its contract
    pub fn then_panic(self, message: impl Into<String>) -> Self {
        self.push(Step::Panic(message.into()))
    }

    /// Number of calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(self, step: Step) -> Self {
        if let Ok(mut steps) = self.steps.lock() {
            steps.push_back(step);
        }
        self
    }

    fn next_step(&self) -> Option<Step> {
        self.steps.lock().ok().and_then(|mut steps| steps.pop_front())
    }
}

impl DashboardProvider for ScriptedProvider {
    async fn load_dashboard_data(&self) -> FetchOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.next_step();

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match step {
            Some(Step::Return(outcome)) => outcome,
            Some(Step::Panic(message)) => panic!("{}", message),
            None => FetchOutcome::success(sample_dashboard()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_is_replayed_in_order() {
        let provider = ScriptedProvider::new().then_fail("first").then_succeed();

        assert_eq!(
            provider.load_dashboard_data().await,
            FetchOutcome::failure("first")
        );
        assert!(provider.load_dashboard_data().await.is_success());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_script_succeeds() {
        let provider = ScriptedProvider::new();
        assert!(provider.load_dashboard_data().await.is_success());
    }
}
