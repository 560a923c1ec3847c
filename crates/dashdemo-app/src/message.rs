//! Message types for the application (TEA pattern)

use dashdemo_provider::FetchOutcome;

use crate::dashboard::DashboardTab;
use crate::input_key::InputKey;
use crate::login::LoginField;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),
    /// Tick event for periodic updates (spinner)
    Tick,
    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Login Form
    // ─────────────────────────────────────────────────────────
    /// Replace the contents of a form field
    LoginFieldChanged { field: LoginField, value: String },
    /// Move focus to a specific field
    FocusLoginField(LoginField),
    FocusNextLoginField,
    FocusPreviousLoginField,
    /// Validate the form and log in on success
    SubmitLogin,

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────
    /// Log out, asking first if `behavior.confirm_logout` is set
    RequestLogout,
    /// Log out without asking
    Logout,
    ConfirmLogout,
    CancelLogout,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    /// A fetch issued for `generation` has settled
    DashboardFetched {
        generation: u64,
        outcome: FetchOutcome,
    },
    /// Re-issue the fetch after a failure
    RetryLoad,
    SelectTab(DashboardTab),
    NextTab,
    PreviousTab,
    TaskCursorUp,
    TaskCursorDown,
    /// Flip the local completion flag of a task
    ToggleTask { task_id: String },

    // ─────────────────────────────────────────────────────────
    // Overflow Menu
    // ─────────────────────────────────────────────────────────
    OpenMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    /// Activate the highlighted menu item
    MenuSelect,
}
