//! Confirm dialog state.
//!
//! The rendering widget lives in dashdemo-tui.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Dialog shown before logging out when `behavior.confirm_logout` is set
    pub fn logout_confirmation(user_name: Option<&str>) -> Self {
        let message = match user_name {
            Some(name) => format!("You are signed in as {}.", name),
            None => "Your dashboard will be closed.".to_string(),
        };
        Self::new(
            "Log out?",
            message,
            vec![
                ("Logout", Message::ConfirmLogout),
                ("Cancel", Message::CancelLogout),
            ],
        )
    }
}
