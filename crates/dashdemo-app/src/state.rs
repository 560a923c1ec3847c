//! Application state (Model in TEA pattern)

use dashdemo_core::prelude::*;
use dashdemo_core::SessionState;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::dashboard::{DashboardState, LoadStatus};
use crate::login::LoginFormState;

/// Lifecycle of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Login,
    Dashboard,
    /// Overflow menu open over the dashboard
    Menu,
    ConfirmDialog,
}

/// Complete application state
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub session: SessionState,
    pub login: LoginFormState,
    /// Mounted only while logged in
    pub dashboard: Option<DashboardState>,
    /// Last generation handed out to a fetch
    pub next_generation: u64,
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Count of rejected login submits, for change detection
    pub login_rejections: u64,
    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.confirm_dialog.is_some() {
            return UiMode::ConfirmDialog;
        }
        match &self.dashboard {
            Some(dashboard) if self.session.is_logged_in() => {
                if dashboard.menu.is_some() {
                    UiMode::Menu
                } else {
                    UiMode::Dashboard
                }
            }
            _ => UiMode::Login,
        }
    }

    /// LoggedOut -> LoggedIn, mounting a fresh dashboard.
    ///
    /// Returns the generation of the fetch to issue, or None if a user is
    /// already logged in.
    pub fn login(&mut self) -> Option<u64> {
        if self.session.is_logged_in() {
            return None;
        }
        self.session = SessionState::LoggedIn;
        self.dashboard = Some(DashboardState::new());
        info!("User logged in");
        self.begin_dashboard_fetch()
    }

    /// Unconditionally return to the login screen with a fresh form
    pub fn logout(&mut self) {
        if let Some(dashboard) = self.dashboard.take() {
            if dashboard.status == LoadStatus::Loading {
                debug!(
                    "Abandoning in-flight fetch (generation {})",
                    dashboard.generation
                );
            }
        }
        self.session = SessionState::LoggedOut;
        self.login = LoginFormState::new();
        self.confirm_dialog = None;
        info!("User logged out");
    }

    /// Move the mounted dashboard to Loading with a new generation.
    ///
    /// Only allowed from Idle (mount) or Failed (retry).
    pub fn begin_dashboard_fetch(&mut self) -> Option<u64> {
        let dashboard = self.dashboard.as_mut()?;
        if !dashboard.can_fetch() {
            return None;
        }
        self.next_generation += 1;
        dashboard.start_loading(self.next_generation);
        Some(self.next_generation)
    }

    /// Request logout, showing a confirmation dialog if configured
    pub fn request_logout(&mut self) -> bool {
        if !self.session.is_logged_in() {
            return false;
        }
        if self.settings.behavior.confirm_logout {
            let name = self
                .dashboard
                .as_ref()
                .and_then(|d| d.data())
                .map(|data| data.user.name.as_str());
            self.confirm_dialog = Some(ConfirmDialogState::logout_confirmation(name));
            false
        } else {
            self.logout();
            true
        }
    }

    pub fn cancel_logout(&mut self) {
        self.confirm_dialog = None;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
