//! Login form and session transition handlers

use tracing::{debug, info};

use crate::login::LoginField;
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_field_changed(state: &mut AppState, field: LoginField, value: String) -> UpdateResult {
    if !state.session.is_logged_in() {
        state.login.set_field(field, value);
    }
    UpdateResult::none()
}

pub fn handle_focus(state: &mut AppState, field: LoginField) -> UpdateResult {
    state.login.focus = field;
    UpdateResult::none()
}

/// Validate the form; on success log in and issue the first fetch
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.session.is_logged_in() || state.login.submitting {
        debug!("Ignoring login submit while already submitting");
        return UpdateResult::none();
    }

    match state.login.submit() {
        Ok(()) => UpdateResult::fetch(state.login()),
        Err(err) => {
            state.login_rejections += 1;
            info!("Login rejected: {}", err);
            UpdateResult::none()
        }
    }
}
