//! Main render/view function (View in TEA pattern)


use dashdemo_app::{AppState, DashboardState, DashboardTab, LoadStatus};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads `state` and draws, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    match &state.dashboard {
        Some(dashboard) if state.session.is_logged_in() => {
            render_dashboard(frame, area, state, dashboard);
        }
        _ => {
            let form = widgets::LoginForm::new(&state.login)
                .mask_password(state.settings.ui.mask_password)
                .show_demo_hint(state.settings.ui.show_demo_hint);
            let areas = layout::login(area);
            frame.render_widget(form, areas.form);
            frame.render_widget(widgets::StatusBar::new(state), areas.status);
        }
    }

    if let Some(dialog) = &state.confirm_dialog {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, dashboard: &DashboardState) {
    let areas = layout::dashboard(area);
    let data = dashboard.data();

    let header = match data {
        Some(data) => widgets::DashboardHeader::new().with_user(&data.user, data.stats.notifications),
        None => widgets::DashboardHeader::new(),
    };
    frame.render_widget(header, areas.header);

    frame.render_widget(
        widgets::DashboardTabs::new(dashboard.selected_tab, data.is_some()),
        areas.tabs,
    );

    match &dashboard.status {
        LoadStatus::Idle | LoadStatus::Loading => {
            frame.render_widget(widgets::LoadingView::new(dashboard.spinner_frame), areas.content);
        }
        LoadStatus::Failed(message) => {
            frame.render_widget(widgets::ErrorView::new(message), areas.content);
        }
        LoadStatus::Loaded(data) => match dashboard.selected_tab {
            DashboardTab::Overview => {
                frame.render_widget(widgets::OverviewTab::new(data), areas.content);
            }
            DashboardTab::Analytics => {
                frame.render_widget(widgets::AnalyticsTab::new(&data.analytics), areas.content);
            }
            DashboardTab::Reports => {
                frame.render_widget(widgets::ReportsTab::new(&data.reports), areas.content);
            }
            DashboardTab::Tasks => {
                frame.render_widget(widgets::TasksTab::new(dashboard), areas.content);
            }
        },
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(menu) = &dashboard.menu {
        // Drops down from the header's menu hint
        let below_header = Rect {
            y: areas.tabs.y,
            height: area.height.saturating_sub(areas.header.height),
            ..area
        };
        frame.render_widget(widgets::OverflowMenu::new(menu), below_header);
    }
}
