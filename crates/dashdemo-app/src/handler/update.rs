//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{dashboard, keys::handle_key, session, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if let Some(dashboard) = state.dashboard.as_mut() {
                dashboard.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Login Form
        // ─────────────────────────────────────────────────────────
        Message::LoginFieldChanged { field, value } => {
            session::handle_field_changed(state, field, value)
        }
        Message::FocusLoginField(field) => session::handle_focus(state, field),
        Message::FocusNextLoginField => {
            let next = state.login.focus.next();
            session::handle_focus(state, next)
        }
        Message::FocusPreviousLoginField => {
            let previous = state.login.focus.previous();
            session::handle_focus(state, previous)
        }
        Message::SubmitLogin => session::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Session
        // ─────────────────────────────────────────────────────────
        Message::RequestLogout => {
            state.request_logout();
            UpdateResult::none()
        }
        Message::Logout | Message::ConfirmLogout => {
            if state.session.is_logged_in() {
                state.logout();
            }
            UpdateResult::none()
        }
        Message::CancelLogout => {
            state.cancel_logout();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::DashboardFetched {
            generation,
            outcome,
        } => dashboard::handle_fetched(state, generation, outcome),
        Message::RetryLoad => dashboard::handle_retry(state),
        Message::SelectTab(tab) => dashboard::handle_select_tab(state, tab),
        Message::NextTab => dashboard::handle_cycle_tab(state, true),
        Message::PreviousTab => dashboard::handle_cycle_tab(state, false),
        Message::TaskCursorUp => dashboard::handle_task_cursor(state, false),
        Message::TaskCursorDown => dashboard::handle_task_cursor(state, true),
        Message::ToggleTask { task_id } => dashboard::handle_toggle_task(state, &task_id),

        // ─────────────────────────────────────────────────────────
        // Overflow Menu
        // ─────────────────────────────────────────────────────────
        Message::OpenMenu => dashboard::handle_open_menu(state),
        Message::CloseMenu => dashboard::handle_close_menu(state),
        Message::MenuUp => dashboard::handle_menu_nav(state, false),
        Message::MenuDown => dashboard::handle_menu_nav(state, true),
        Message::MenuSelect => dashboard::handle_menu_select(state),
    }
}
