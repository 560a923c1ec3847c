//! Overview tab: stat cards and the recent activity feed

use dashdemo_core::{Activity, DashboardData, Stats};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

use crate::theme::styles;

pub struct OverviewTab<'a> {
    data: &'a DashboardData,
}

impl<'a> OverviewTab<'a> {
    pub fn new(data: &'a DashboardData) -> Self {
        Self { data }
    }
}

/// `(label, value)` for each stat card, in display order
fn stat_cards(stats: &Stats) -> [(&'static str, String); 4] {
    [
        ("Total Users", stats.total_users.to_string()),
        ("Revenue", stats.revenue_display()),
        ("Projects", stats.projects.to_string()),
        ("Notifications", stats.notifications.to_string()),
    ]
}

fn activity_item(activity: &Activity) -> ListItem<'_> {
    let (icon, style) = styles::activity_indicator(&activity.kind);
    ListItem::new(Line::from(vec![
        Span::styled(format!(" {} ", icon), style),
        Span::styled(activity.title.as_str(), styles::text_primary()),
        Span::styled(format!("  {}", activity.timestamp), styles::text_muted()),
    ]))
}

impl Widget for OverviewTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [cards_area, feed_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let card_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(cards_area);
        let cards = stat_cards(&self.data.stats);
        for ((label, value), card_area) in cards.into_iter().zip(card_areas.iter()) {
            let block = styles::glass_block(false).title(Span::styled(label, styles::text_muted()));
            Paragraph::new(Line::styled(value, styles::accent_bold()))
                .block(block)
                .render(*card_area, buf);
        }

        let items: Vec<ListItem> = self
            .data
            .recent_activities
            .iter()
            .map(activity_item)
            .collect();
        List::new(items)
            .block(styles::glass_block(false).title(" Recent Activity "))
            .render(feed_area, buf);
    }
}
