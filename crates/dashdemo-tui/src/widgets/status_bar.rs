//! Status bar widget
//!
//! Shows the dashboard load state and the key hints for the focused screen.

use dashdemo_app::{AppState, DashboardTab, LoadPhase, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase(&self) -> LoadPhase {
        self.state
            .dashboard
            .as_ref()
            .map(|d| d.status.phase())
            .unwrap_or(LoadPhase::Idle)
    }

    fn state_indicator(&self) -> Span<'static> {
        let (icon, label, style) = styles::load_indicator(&self.phase());
        Span::styled(format!(" {} {}", icon, label), style)
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode() {
            UiMode::Login => vec![("Tab", "next field"), ("Enter", "submit"), ("Esc", "quit")],
            UiMode::Menu => vec![("↑↓", "move"), ("Enter", "select"), ("Esc", "close")],
            UiMode::ConfirmDialog => vec![("y", "confirm"), ("n", "cancel")],
            UiMode::Dashboard => {
                let on_tasks = self
                    .state
                    .dashboard
                    .as_ref()
                    .is_some_and(|d| d.selected_tab == DashboardTab::Tasks);
                match self.phase() {
                    LoadPhase::Failed => vec![("r", "retry"), ("m", "menu"), ("q", "quit")],
                    LoadPhase::Loaded if on_tasks => vec![
                        ("1-4", "tabs"),
                        ("↑↓", "move"),
                        ("Space", "toggle"),
                        ("m", "menu"),
                        ("q", "quit"),
                    ],
                    LoadPhase::Loaded => vec![("1-4", "tabs"), ("m", "menu"), ("q", "quit")],
                    _ => vec![("m", "menu"), ("q", "quit")],
                }
            }
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.state.session.is_logged_in() {
            spans.push(self.state_indicator());
            spans.push(Span::styled(" │", styles::text_muted()));
        }
        for (key, action) in self.key_hints() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{failed_state, loaded_state, loading_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_login_hints_without_indicator() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("Enter submit"));
        assert!(!term.buffer_contains("Idle"));
    }

    #[test]
    fn test_loading_indicator() {
        let term = render(&loading_state());
        assert!(term.buffer_contains("↻ Loading"));
        assert!(term.buffer_contains("m menu"));
    }

    #[test]
    fn test_failed_offers_retry() {
        let term = render(&failed_state("boom"));
        assert!(term.buffer_contains("✗ Failed"));
        assert!(term.buffer_contains("r retry"));
    }

    #[test]
    fn test_task_hints_on_tasks_tab() {
        let mut state = loaded_state();
        state
            .dashboard
            .as_mut()
            .unwrap()
            .select_tab(DashboardTab::Tasks);

        let term = render(&state);

        assert!(term.buffer_contains("● Ready"));
        assert!(term.buffer_contains("Space toggle"));
    }
}
