//! Login form widget

use dashdemo_app::login::{DEMO_PASSWORD, DEMO_USERNAME};
use dashdemo_app::{LoginField, LoginFormState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::centered_rect;
use crate::theme::styles;

const FORM_WIDTH: u16 = 48;
const FORM_HEIGHT: u16 = 17;

pub struct LoginForm<'a> {
    form: &'a LoginFormState,
    mask_password: bool,
    show_demo_hint: bool,
}

impl<'a> LoginForm<'a> {
    pub fn new(form: &'a LoginFormState) -> Self {
        Self {
            form,
            mask_password: true,
            show_demo_hint: true,
        }
    }

    pub fn mask_password(mut self, mask: bool) -> Self {
        self.mask_password = mask;
        self
    }

    pub fn show_demo_hint(mut self, show: bool) -> Self {
        self.show_demo_hint = show;
        self
    }

    fn display_value(&self, field: LoginField) -> String {
        let value = self.form.value(field);
        if field == LoginField::Password && self.mask_password {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    fn render_input(&self, field: LoginField, title: &str, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focus == field;
        let block = styles::glass_block(focused).title(format!(" {} ", title));
        let inner_width = block.inner(area).width as usize;

        let mut text = self.display_value(field);
        // Keep the tail visible when the text overflows the box
        while text.width() + 1 > inner_width && !text.is_empty() {
            text.remove(0);
        }

        let mut spans = vec![Span::styled(text, styles::text_primary())];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let (label, style) = if self.form.submitting {
            ("  Logging in...  ", styles::text_muted())
        } else if self.form.focus == LoginField::Submit {
            ("[ Login ]", styles::focused_selected())
        } else {
            ("[ Login ]", styles::accent())
        };
        Paragraph::new(Line::styled(label, style))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        Clear.render(form_area, buf);

        let block = styles::glass_block(true)
            .title(Line::styled(" Sign in ", styles::accent_bold()).centered());
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        let [title, _, username, password, error, button, _, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(Line::styled("Welcome back", styles::text_secondary()))
            .alignment(Alignment::Center)
            .render(title, buf);

        self.render_input(LoginField::Username, "Username", username, buf);
        self.render_input(LoginField::Password, "Password", password, buf);

        if let Some(err) = &self.form.error {
            Paragraph::new(Line::styled(err.to_string(), styles::error()))
                .alignment(Alignment::Center)
                .render(error, buf);
        }

        self.render_button(button, buf);

        if self.show_demo_hint {
            Paragraph::new(Line::from(vec![
                Span::styled("Demo: ", styles::text_muted()),
                Span::styled(
                    format!("{} / {}", DEMO_USERNAME, DEMO_PASSWORD),
                    styles::text_secondary(),
                ),
            ]))
            .alignment(Alignment::Center)
            .render(hint, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dashdemo_app::LoginError;

    fn form(username: &str, password: &str) -> LoginFormState {
        LoginFormState {
            username: username.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_form_masks_password() {
        let state = form("admin", "secret");
        let mut term = TestTerminal::new();

        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Username"));
        assert!(term.buffer_contains("admin"));
        assert!(term.buffer_contains("••••••"));
        assert!(!term.buffer_contains("secret"));
    }

    #[test]
    fn test_login_form_unmasked_password() {
        let state = form("admin", "secret");
        let mut term = TestTerminal::new();

        term.render_widget(LoginForm::new(&state).mask_password(false), term.area());

        assert!(term.buffer_contains("secret"));
    }

    #[test]
    fn test_login_form_shows_error() {
        let mut state = form("admin", "wrong");
        state.error = Some(LoginError::InvalidCredentials);
        let mut term = TestTerminal::new();

        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Invalid username or password"));
    }

    #[test]
    fn test_login_button_disabled_while_submitting() {
        let mut state = form("admin", "admin");
        state.submitting = true;
        let mut term = TestTerminal::new();

        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Logging in..."));
        assert!(!term.buffer_contains("[ Login ]"));
    }

    #[test]
    fn test_demo_hint_toggle() {
        let state = LoginFormState::default();
        let mut term = TestTerminal::new();

        term.render_widget(LoginForm::new(&state), term.area());
        assert!(term.buffer_contains("Demo: admin / admin"));

        let mut term = TestTerminal::new();
        term.render_widget(LoginForm::new(&state).show_demo_hint(false), term.area());
        assert!(!term.buffer_contains("Demo:"));
    }
}
