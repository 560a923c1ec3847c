//! Headless mode - NDJSON event output instead of the TUI
//!
//! Runs the same engine as the terminal UI, submits the given credentials and
//! prints one JSON object per line to stdout as the session progresses. This
//! makes the login and load flow scriptable without parsing ANSI output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"logged_in","timestamp":1704700001000}
//! {"event":"dashboard_loading","generation":1,"timestamp":1704700001001}
//! {"event":"dashboard_loaded","generation":1,"data":{...},"timestamp":1704700002003}
//! {"event":"logged_out","timestamp":1704700002004}
//! ```

pub mod runner;

use chrono::Utc;
use dashdemo_core::DashboardData;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Credentials were rejected
    LoginFailed { error: String, timestamp: i64 },

    LoggedIn { timestamp: i64 },

    /// A dashboard fetch was issued
    DashboardLoading { generation: u64, timestamp: i64 },

    DashboardLoaded {
        generation: u64,
        data: Box<DashboardData>,
        timestamp: i64,
    },

    DashboardFailed {
        generation: u64,
        error: String,
        timestamp: i64,
    },

    LoggedOut { timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// The `event` tag this variant serializes with
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginFailed { .. } => "login_failed",
            Self::LoggedIn { .. } => "logged_in",
            Self::DashboardLoading { .. } => "dashboard_loading",
            Self::DashboardLoaded { .. } => "dashboard_loaded",
            Self::DashboardFailed { .. } => "dashboard_failed",
            Self::LoggedOut { .. } => "logged_out",
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn login_failed(error: impl ToString) -> Self {
        Self::LoginFailed {
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn logged_in() -> Self {
        Self::LoggedIn {
            timestamp: Self::now(),
        }
    }

    pub fn dashboard_loading(generation: u64) -> Self {
        Self::DashboardLoading {
            generation,
            timestamp: Self::now(),
        }
    }

    pub fn dashboard_loaded(generation: u64, data: DashboardData) -> Self {
        Self::DashboardLoaded {
            generation,
            data: Box::new(data),
            timestamp: Self::now(),
        }
    }

    pub fn dashboard_failed(generation: u64, error: impl Into<String>) -> Self {
        Self::DashboardFailed {
            generation,
            error: error.into(),
            timestamp: Self::now(),
        }
    }

    pub fn logged_out() -> Self {
        Self::LoggedOut {
            timestamp: Self::now(),
        }
    }
}
