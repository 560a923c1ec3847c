//! Reports tab

use dashdemo_core::Report;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Row, Table, Widget},
};

use crate::theme::styles;

pub struct ReportsTab<'a> {
    reports: &'a [Report],
}

impl<'a> ReportsTab<'a> {
    pub fn new(reports: &'a [Report]) -> Self {
        Self { reports }
    }
}

impl Widget for ReportsTab<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.reports.iter().map(|report| {
            let (icon, label, style) = styles::report_status_indicator(&report.status);
            Row::new(vec![
                Cell::from(Span::styled(report.title.as_str(), styles::text_primary())),
                Cell::from(Span::styled(report.date.as_str(), styles::text_muted())),
                Cell::from(Line::from(vec![
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(label, style),
                ])),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(14),
            ],
        )
        .header(Row::new(vec!["Report", "Period", "Status"]).style(styles::accent_bold()))
        .block(styles::glass_block(false).title(" Reports "))
        .column_spacing(2)
        .render(area, buf);
    }
}
