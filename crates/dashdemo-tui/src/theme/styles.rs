//! Semantic style builders.

use dashdemo_app::LoadPhase;
use dashdemo_core::{ActivityKind, Priority, ReportStatus};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// Black on cyan, for focused+selected rows and the active button
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Enum-keyed indicators ---

/// Icon and style for an activity row
pub fn activity_indicator(kind: &ActivityKind) -> (&'static str, Style) {
    match kind {
        ActivityKind::UserRegistration => ("◆", Style::default().fg(palette::STATUS_BLUE)),
        ActivityKind::ProjectCompleted => ("✔", Style::default().fg(palette::STATUS_GREEN)),
        ActivityKind::PaymentReceived => ("$", Style::default().fg(palette::STATUS_YELLOW)),
        ActivityKind::Deployment => ("⇪", Style::default().fg(palette::STATUS_INDIGO)),
        ActivityKind::Other => ("•", text_muted()),
    }
}

/// `(icon, label, style)` for a report status badge
pub fn report_status_indicator(status: &ReportStatus) -> (&'static str, &'static str, Style) {
    match status {
        ReportStatus::Completed => ("●", status.label(), Style::default().fg(palette::STATUS_GREEN)),
        ReportStatus::InProgress => ("◐", status.label(), Style::default().fg(palette::STATUS_YELLOW)),
        ReportStatus::Pending => ("○", status.label(), text_muted()),
    }
}

/// `(icon, label, style)` for a task priority badge
pub fn priority_indicator(priority: &Priority) -> (&'static str, &'static str, Style) {
    match priority {
        Priority::High => (
            "▲",
            priority.label(),
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
        Priority::Medium => ("■", priority.label(), Style::default().fg(palette::STATUS_ORANGE)),
        Priority::Low => ("▼", priority.label(), Style::default().fg(palette::STATUS_GREEN)),
    }
}

/// `(icon, label, style)` for the dashboard load phase in the status bar
pub fn load_indicator(phase: &LoadPhase) -> (&'static str, &'static str, Style) {
    match phase {
        LoadPhase::Idle => ("○", "Idle", text_muted()),
        LoadPhase::Loading => (
            "↻",
            "Loading",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        LoadPhase::Loaded => (
            "●",
            "Ready",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        LoadPhase::Failed => ("✗", "Failed", error()),
    }
}
