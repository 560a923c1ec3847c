//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use dashdemo_core::SessionState;

use crate::dashboard::{DashboardTab, LoadPhase};
use crate::login::LoginError;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The user logged in or out
    SessionChanged {
        old: SessionState,
        new: SessionState,
    },

    /// A login submit was rejected
    LoginRejected { error: LoginError },

    /// The mounted dashboard changed load phase or started a new fetch.
    ///
    /// `error` is set when `phase` is `Failed`.
    DashboardStatusChanged {
        generation: u64,
        phase: LoadPhase,
        error: Option<String>,
    },

    /// The selected dashboard tab changed
    TabChanged { tab: DashboardTab },

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SessionChanged { .. } => "session_changed",
            Self::LoginRejected { .. } => "login_rejected",
            Self::DashboardStatusChanged { .. } => "dashboard_status_changed",
            Self::TabChanged { .. } => "tab_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
