//! Dashboard tab bar

use dashdemo_app::DashboardTab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

pub struct DashboardTabs {
    selected: DashboardTab,
    /// Tabs are inert until the dashboard has loaded
    enabled: bool,
}

impl DashboardTabs {
    pub fn new(selected: DashboardTab, enabled: bool) -> Self {
        Self { selected, enabled }
    }
}

impl Widget for DashboardTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = DashboardTab::ALL
            .iter()
            .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())));

        let highlight = if self.enabled {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };

        Tabs::new(titles)
            .block(styles::glass_block(self.enabled))
            .style(if self.enabled {
                styles::text_secondary()
            } else {
                styles::text_muted()
            })
            .highlight_style(highlight)
            .select(self.selected.index())
            .divider("│")
            .render(area, buf);
    }
}
