//! In-process provider serving the fixed demo payload

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::fixture::sample_dashboard;
use crate::{DashboardProvider, FetchOutcome};

/// Default simulated latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Synthesizes [`sample_dashboard`] after a fixed delay.
///
/// Always succeeds unless a `failure_rate` is set, in which case each call
/// fails with probability `failure_rate` using `failure_message`.
#[derive(Debug, Clone)]
pub struct MockProvider {
    latency: Duration,
    failure_rate: f64,
    failure_message: String,
}

impl MockProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure_rate: 0.0,
            failure_message: String::new(),
        }
    }

    /// Fail a fraction of calls. `rate` is clamped into `[0.0, 1.0]`.
    pub fn with_failure_rate(mut self, rate: f64, message: impl Into<String>) -> Self {
        self.failure_rate = if rate.is_nan() {
            0.0
        } else {
            rate.clamp(0.0, 1.0)
        };
        self.failure_message = message.into();
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn should_fail(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl DashboardProvider for MockProvider {
    async fn load_dashboard_data(&self) -> FetchOutcome {
        tokio::time::sleep(self.latency).await;

        if self.should_fail() {
            debug!("Mock provider failing on purpose");
            return FetchOutcome::failure(self.failure_message.clone());
        }

        FetchOutcome::success(sample_dashboard())
    }
}
