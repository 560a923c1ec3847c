//! Tasks tab: checklist with local completion toggles

use dashdemo_app::DashboardState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::theme::styles;

pub struct TasksTab<'a> {
    dashboard: &'a DashboardState,
}

impl<'a> TasksTab<'a> {
    pub fn new(dashboard: &'a DashboardState) -> Self {
        Self { dashboard }
    }
}

impl Widget for TasksTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(data) = self.dashboard.data() else {
            return;
        };

        let items: Vec<ListItem> = data
            .tasks
            .iter()
            .map(|task| {
                let done = self
                    .dashboard
                    .is_task_completed(&task.id)
                    .unwrap_or(task.is_completed);
                let (icon, label, priority_style) = styles::priority_indicator(&task.priority);
                let title_style = if done {
                    styles::text_muted().add_modifier(Modifier::CROSSED_OUT)
                } else {
                    styles::text_primary()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(if done { "[x] " } else { "[ ] " }, styles::accent()),
                    Span::styled(task.title.as_str(), title_style),
                    Span::raw("  "),
                    Span::styled(format!("{} {}", icon, label), priority_style),
                ]))
            })
            .collect();

        let (done, total) = self.dashboard.task_progress();
        let list = List::new(items)
            .block(
                styles::glass_block(true)
                    .title(" Tasks ")
                    .title(
                        Line::styled(
                            format!(" {} of {} completed ", done, total),
                            styles::text_muted(),
                        )
                        .right_aligned(),
                    ),
            )
            .highlight_style(styles::focused_selected())
            .highlight_symbol("› ");

        let mut list_state = ListState::default().with_selected(Some(self.dashboard.task_cursor));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
