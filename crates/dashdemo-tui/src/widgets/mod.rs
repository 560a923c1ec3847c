//! Widget components for the dashdemo TUI

mod analytics;
mod confirm_dialog;
mod header;
mod load_status;
mod login_form;
mod menu;
mod overview;
mod reports;
mod status_bar;
mod tabs;
mod tasks;

pub use analytics::AnalyticsTab;
pub use confirm_dialog::ConfirmDialog;
pub use header::DashboardHeader;
pub use load_status::{ErrorView, LoadingView};
pub use login_form::LoginForm;
pub use menu::OverflowMenu;
pub use overview::OverviewTab;
pub use reports::ReportsTab;
pub use status_bar::StatusBar;
pub use tabs::DashboardTabs;
pub use tasks::TasksTab;
