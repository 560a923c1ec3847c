//! Key event handlers for different UI modes

use crate::dashboard::{DashboardTab, LoadStatus};
use crate::input_key::InputKey;
use crate::login::LoginField;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode() {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Login => handle_key_login(state, key),
        UiMode::Menu => handle_key_menu(key),
        UiMode::Dashboard => handle_key_dashboard(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmLogout),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelLogout),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Text fields take every printable key, so only Esc and Ctrl+C quit here
fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    let form = &state.login;
    let focus = form.focus;

    match key {
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNextLoginField),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPreviousLoginField),

        InputKey::Enter => match focus {
            LoginField::Username => Some(Message::FocusLoginField(LoginField::Password)),
            LoginField::Password | LoginField::Submit if !form.submitting => {
                Some(Message::SubmitLogin)
            }
            _ => None,
        },

        InputKey::Backspace if focus.is_text() => {
            let mut text = form.value(focus).to_string();
            text.pop();
            Some(Message::LoginFieldChanged { field: focus, value: text })
        }

        InputKey::CharCtrl('u') if focus.is_text() => Some(Message::LoginFieldChanged {
            field: focus,
            value: String::new(),
        }),

        InputKey::Char(c) if focus.is_text() => {
            let mut text = form.value(focus).to_string();
            text.push(c);
            Some(Message::LoginFieldChanged { field: focus, value: text })
        }

        _ => None,
    }
}

fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc | InputKey::Char('m') => Some(Message::CloseMenu),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    let dashboard = state.dashboard.as_ref()?;

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('m') => return Some(Message::OpenMenu),
        _ => {}
    }

    match &dashboard.status {
        LoadStatus::Failed(_) => match key {
            InputKey::Char('r') | InputKey::Enter => Some(Message::RetryLoad),
            _ => None,
        },
        LoadStatus::Loaded(_) => handle_key_loaded(state, key),
        LoadStatus::Idle | LoadStatus::Loading => None,
    }
}

fn handle_key_loaded(state: &AppState, key: InputKey) -> Option<Message> {
    let dashboard = state.dashboard.as_ref()?;

    match key {
        InputKey::Char(c @ '1'..='4') => {
            let index = c.to_digit(10)? as usize - 1;
            DashboardTab::from_index(index).map(Message::SelectTab)
        }
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousTab),

        _ if dashboard.selected_tab == DashboardTab::Tasks => match key {
            InputKey::Up | InputKey::Char('k') => Some(Message::TaskCursorUp),
            InputKey::Down | InputKey::Char('j') => Some(Message::TaskCursorDown),
            InputKey::Char(' ') | InputKey::Enter => {
                dashboard.selected_task_id().map(|id| Message::ToggleTask {
                    task_id: id.to_string(),
                })
            }
            _ => None,
        },

        _ => None,
    }
}
