//! # dashdemo-provider - Dashboard Data Providers
//!
//! The fetch collaborator behind the dashboard. The application only talks to
//! the [`DashboardProvider`] trait, so the bundled [`MockProvider`] can be
//! swapped for a real backend without touching the state machine.
//!
//! ## Contract
//!
//! `load_dashboard_data` settles exactly once per call and never fails across
//! the boundary: every failure is carried in a [`FetchOutcome::Failure`].
//! [`fetch_guarded`] enforces this for implementations that panic.
//!
//! ## Public API
//! - [`DashboardProvider`] / [`LocalDashboardProvider`] - The provider trait (Send / local variants)
//! - [`FetchOutcome`], [`FetchError`] - Call result types
//! - [`MockProvider`] - Fixed payload after a simulated delay
//! - [`fetch_guarded`] - Panic-safe, validating call wrapper
//! - [`sample_dashboard`] - The demo payload

pub mod fixture;
pub mod guard;
pub mod mock;
pub mod outcome;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use fixture::sample_dashboard;
pub use guard::fetch_guarded;
pub use mock::{MockProvider, DEFAULT_LATENCY};
pub use outcome::{FetchError, FetchOutcome, DEFAULT_FETCH_ERROR};

/// Source of dashboard data
#[trait_variant::make(DashboardProvider: Send)]
pub trait LocalDashboardProvider {
    /// Load a complete dashboard payload
    async fn load_dashboard_data(&self) -> FetchOutcome;
}
