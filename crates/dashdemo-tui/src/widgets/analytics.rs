//! Analytics tab: one gauge per metric

use dashdemo_core::{Analytics, Metric};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::{Gauge, Widget},
};

use crate::theme::styles;

pub struct AnalyticsTab<'a> {
    analytics: &'a Analytics,
}

impl<'a> AnalyticsTab<'a> {
    pub fn new(analytics: &'a Analytics) -> Self {
        Self { analytics }
    }
}

fn metric_gauge(metric: &Metric) -> Gauge<'_> {
    let title = format!(" {}: {} ", metric.label, metric.value);
    Gauge::default()
        .block(
            styles::glass_block(false)
                .title(Span::styled(title, styles::text_primary()))
                .title_bottom(Span::styled(format!(" {} ", metric.trend), styles::text_muted())),
        )
        .gauge_style(styles::accent())
        .ratio(f64::from(metric.percent().min(100)) / 100.0)
        .label(format!("{}%", metric.percent()))
}

impl Widget for AnalyticsTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

        for (metric, row) in self.analytics.metrics().into_iter().zip(rows.iter()) {
            metric_gauge(metric).render(*row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dashdemo_provider::sample_dashboard;

    #[test]
    fn test_analytics_renders_each_metric() {
        let data = sample_dashboard();
        let mut term = TestTerminal::new();

        term.render_widget(AnalyticsTab::new(&data.analytics), term.area());

        assert!(term.buffer_contains("User Growth: +12.5%"));
        assert!(term.buffer_contains("Revenue Trends: $45,678"));
        assert!(term.buffer_contains("Customer Satisfaction: 4.8/5.0"));
        assert!(term.buffer_contains("75%"));
        assert!(term.buffer_contains("96%"));
        assert!(term.buffer_contains("This month"));
    }
}
