//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas of the dashboard view
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    /// Title, greeting and notification badge
    pub header: Rect,
    pub tabs: Rect,
    pub content: Rect,
    /// One-line key hints
    pub status: Rect,
}

pub fn dashboard(area: Rect) -> DashboardAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    DashboardAreas {
        header: chunks[0],
        tabs: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

/// Screen areas of the login view
#[derive(Debug, Clone, Copy)]
pub struct LoginAreas {
    pub form: Rect,
    pub status: Rect,
}

pub fn login(area: Rect) -> LoginAreas {
    let [form, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    LoginAreas { form, status }
}

/// Centered rect of fixed size, clipped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Rect anchored to the top-right corner of `area`
pub fn top_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_layout() {
        let layout = dashboard(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.content.y, 6);
        assert_eq!(layout.content.height, 17); // 24 - 3 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_login_layout_reserves_status_line() {
        let layout = login(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.form.height, 23);
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clipped_to_area() {
        let rect = centered_rect(100, 50, Rect::new(5, 5, 20, 10));
        assert_eq!(rect, Rect::new(5, 5, 20, 10));
    }

    #[test]
    fn test_top_right_rect() {
        let rect = top_right_rect(20, 6, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(60, 0, 20, 6));
    }
}
