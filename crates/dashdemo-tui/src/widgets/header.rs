//! Dashboard header: title, greeting and notification badge

use dashdemo_core::User;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct DashboardHeader<'a> {
    user: Option<&'a User>,
    notifications: u32,
}

impl<'a> DashboardHeader<'a> {
    /// Header before any data has loaded
    pub fn new() -> Self {
        Self {
            user: None,
            notifications: 0,
        }
    }

    pub fn with_user(mut self, user: &'a User, notifications: u32) -> Self {
        self.user = Some(user);
        self.notifications = notifications;
        self
    }
}

impl Default for DashboardHeader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::raw(" "),
            Span::styled("Dashboard", styles::accent_bold()),
        ];
        if let Some(user) = self.user {
            left.push(Span::styled("  /  ", styles::text_muted()));
            left.push(Span::styled(
                format!("Welcome, {}", user.name),
                styles::text_secondary(),
            ));
        }
        Paragraph::new(Line::from(left)).render(inner, buf);

        let mut right = Vec::new();
        if self.notifications > 0 {
            right.push(Span::styled(
                format!(" ● {} ", self.notifications),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ));
            right.push(Span::raw(" "));
        }
        right.push(Span::styled("[m]", styles::keybinding()));
        right.push(Span::styled(" Menu ", styles::text_muted()));

        let right = Line::from(right);
        let width = (right.width() as u16).min(inner.width);
        let right_area = Rect::new(inner.x + inner.width - width, inner.y, width, 1);
        Paragraph::new(right).render(right_area, buf);
    }
}
