//! Boundary between the application and a provider implementation
//!
//! [`fetch_guarded`] upholds the provider contract even when an
//! implementation does not: a panic becomes a [`FetchError`] and a payload
//! that breaks a data model invariant is rejected.

use std::any::Any;
use std::sync::Arc;

use tracing::{error, warn};

use crate::{DashboardProvider, FetchError, FetchOutcome};

/// Run one provider call in its own task and normalize the result.
pub async fn fetch_guarded<P>(provider: Arc<P>) -> FetchOutcome
where
    P: DashboardProvider + Sync + 'static,
{
    let handle = tokio::spawn(async move { provider.load_dashboard_data().await });

    match handle.await {
        Ok(FetchOutcome::Success(data)) => match data.validate() {
            Ok(()) => FetchOutcome::Success(data),
            Err(violation) => {
                warn!("Rejecting dashboard payload: {}", violation);
                FetchOutcome::Failure(FetchError::new(format!(
                    "Invalid dashboard data: {}",
                    violation
                )))
            }
        },
        Ok(failure) => failure,
        Err(join_err) if join_err.is_panic() => {
            let message = panic_message(join_err.into_panic());
            error!("Dashboard provider panicked: {}", message);
            FetchOutcome::Failure(FetchError::new(message))
        }
        Err(join_err) => {
            warn!("Dashboard fetch task did not complete: {}", join_err);
            FetchOutcome::Failure(FetchError::default())
        }
    }
}

/// Extract a readable message from a panic payload
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::new()
    }
}
