//! Confirmation dialog widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use dashdemo_app::confirm_dialog::ConfirmDialogState;

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(44, 7, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [_, message, _, buttons, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(message, buf);

        // First option is bound to y, the second to n
        let keys = ["y", "n"];
        let mut spans = Vec::new();
        for ((label, _), key) in self.state.options.iter().zip(keys) {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(
                key,
                styles::keybinding().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label.as_str(), styles::text_primary()));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_logout_dialog_renders() {
        let state = ConfirmDialogState::logout_confirmation(Some("John Doe"));
        let mut term = TestTerminal::new();

        term.render_widget(ConfirmDialog::new(&state), term.area());

        assert!(term.buffer_contains("Log out?"));
        assert!(term.buffer_contains("John Doe"));
        assert!(term.buffer_contains("[y] Logout"));
        assert!(term.buffer_contains("[n] Cancel"));
    }
}
