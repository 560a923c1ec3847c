//! Full-screen loading and failure views

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner shown while the dashboard fetch is in flight
pub struct LoadingView {
    frame: usize,
}

impl LoadingView {
    pub fn new(frame: usize) -> Self {
        Self { frame }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }
}

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let line = Line::from(vec![
            Span::styled(self.spinner(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled("Loading Dashboard...", styles::text_secondary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(row, buf);
    }
}

/// Failure view with the error message and a retry hint
pub struct ErrorView<'a> {
    message: &'a str,
}

impl<'a> ErrorView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, title, _, message, _, hint, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::styled("✗ Oops! Something went wrong", styles::error()))
            .alignment(Alignment::Center)
            .render(title, buf);

        Paragraph::new(self.message)
            .style(styles::text_secondary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[r]", styles::keybinding()),
            Span::styled(" Retry", styles::text_primary()),
        ]))
        .alignment(Alignment::Center)
        .render(hint, buf);
    }
}
