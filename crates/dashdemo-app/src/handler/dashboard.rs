//! Dashboard handlers: fetch results, retry, tabs, tasks and the overflow menu

use dashdemo_provider::FetchOutcome;
use tracing::{debug, info, warn};

use crate::dashboard::{DashboardTab, MenuItem, MenuState};
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Apply a settled fetch if it belongs to the mounted dashboard
pub fn handle_fetched(state: &mut AppState, generation: u64, outcome: FetchOutcome) -> UpdateResult {
    let Some(dashboard) = state.dashboard.as_mut() else {
        debug!(
            "Discarding fetch result for generation {}: no dashboard mounted",
            generation
        );
        return UpdateResult::none();
    };

    let succeeded = outcome.is_success();
    if dashboard.apply_outcome(generation, outcome) {
        if succeeded {
            info!("Dashboard loaded (generation {})", generation);
        } else {
            warn!(
                "Dashboard load failed (generation {}): {}",
                generation,
                dashboard.error_message().unwrap_or_default()
            );
        }
    } else {
        debug!(
            "Discarding stale fetch result for generation {} (current {})",
            generation, dashboard.generation
        );
    }
    UpdateResult::none()
}

/// Retry is the same as mount and only allowed from Failed
pub fn handle_retry(state: &mut AppState) -> UpdateResult {
    let generation = state.begin_dashboard_fetch();
    match generation {
        Some(generation) => info!("Retrying dashboard load (generation {})", generation),
        None => debug!("Ignoring retry: dashboard not in a failed state"),
    }
    UpdateResult::fetch(generation)
}

pub fn handle_select_tab(state: &mut AppState, tab: DashboardTab) -> UpdateResult {
    if let Some(dashboard) = state.dashboard.as_mut() {
        dashboard.select_tab(tab);
    }
    UpdateResult::none()
}

pub fn handle_cycle_tab(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(dashboard) = state.dashboard.as_mut() {
        let tab = if forward {
            dashboard.selected_tab.next()
        } else {
            dashboard.selected_tab.previous()
        };
        dashboard.select_tab(tab);
    }
    UpdateResult::none()
}

pub fn handle_task_cursor(state: &mut AppState, down: bool) -> UpdateResult {
    if let Some(dashboard) = state.dashboard.as_mut() {
        if down {
            dashboard.move_task_cursor_down();
        } else {
            dashboard.move_task_cursor_up();
        }
    }
    UpdateResult::none()
}

pub fn handle_toggle_task(state: &mut AppState, task_id: &str) -> UpdateResult {
    if let Some(done) = state
        .dashboard
        .as_mut()
        .and_then(|d| d.toggle_task(task_id))
    {
        debug!("Task {} marked {}", task_id, if done { "done" } else { "open" });
    }
    UpdateResult::none()
}

pub fn handle_open_menu(state: &mut AppState) -> UpdateResult {
    if let Some(dashboard) = state.dashboard.as_mut() {
        dashboard.menu = Some(MenuState::default());
    }
    UpdateResult::none()
}

pub fn handle_close_menu(state: &mut AppState) -> UpdateResult {
    if let Some(dashboard) = state.dashboard.as_mut() {
        dashboard.menu = None;
    }
    UpdateResult::none()
}

pub fn handle_menu_nav(state: &mut AppState, down: bool) -> UpdateResult {
    if let Some(menu) = state.dashboard.as_mut().and_then(|d| d.menu.as_mut()) {
        if down {
            menu.down();
        } else {
            menu.up();
        }
    }
    UpdateResult::none()
}

/// Profile, Settings and Help only close the menu
pub fn handle_menu_select(state: &mut AppState) -> UpdateResult {
    let Some(menu) = state.dashboard.as_mut().and_then(|d| d.menu.take()) else {
        return UpdateResult::none();
    };

    match menu.item() {
        MenuItem::Logout => UpdateResult::message(Message::RequestLogout),
        item => {
            debug!("Menu item {:?} has no screen", item);
            UpdateResult::none()
        }
    }
}
