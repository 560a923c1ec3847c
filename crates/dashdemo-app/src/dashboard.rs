//! Dashboard state: load status, tab selection, local task toggles and the
//! overflow menu.

use std::collections::HashMap;

use dashdemo_core::DashboardData;
use dashdemo_provider::FetchOutcome;
use serde::Serialize;

/// Tabs of the dashboard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Analytics,
    Reports,
    Tasks,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Analytics,
        DashboardTab::Reports,
        DashboardTab::Tasks,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Analytics => 1,
            Self::Reports => 2,
            Self::Tasks => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::Reports => "Reports",
            Self::Tasks => "Tasks",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where the dashboard is in its load lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Box<DashboardData>),
    Failed(String),
}

impl LoadStatus {
    pub fn phase(&self) -> LoadPhase {
        match self {
            Self::Idle => LoadPhase::Idle,
            Self::Loading => LoadPhase::Loading,
            Self::Loaded(_) => LoadPhase::Loaded,
            Self::Failed(_) => LoadPhase::Failed,
        }
    }
}

/// Data-free discriminant of [`LoadStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Entries of the overflow menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    Settings,
    Help,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Profile,
        MenuItem::Settings,
        MenuItem::Help,
        MenuItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Settings => "Settings",
            Self::Help => "Help & Support",
            Self::Logout => "Logout",
        }
    }
}

/// Open overflow menu with its highlighted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn item(&self) -> MenuItem {
        MenuItem::ALL[self.selected.min(MenuItem::ALL.len() - 1)]
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < MenuItem::ALL.len() {
            self.selected += 1;
        }
    }
}

/// State of a mounted dashboard.
///
/// Created on login and dropped on logout, so nothing here survives a session.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Generation of the most recently issued fetch
    pub generation: u64,
    pub status: LoadStatus,
    pub selected_tab: DashboardTab,
    task_completion: HashMap<String, bool>,
    pub task_cursor: usize,
    pub menu: Option<MenuState>,
    pub spinner_frame: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fetch may be issued from Idle (mount) or Failed (retry)
    pub fn can_fetch(&self) -> bool {
        matches!(self.status, LoadStatus::Idle | LoadStatus::Failed(_))
    }

    /// Enter Loading for a newly issued fetch, dropping any previous error
    pub fn start_loading(&mut self, generation: u64) {
        self.generation = generation;
        self.status = LoadStatus::Loading;
        self.task_completion.clear();
        self.task_cursor = 0;
        self.spinner_frame = 0;
    }

    /// Apply a settled fetch. Returns false if the result is stale.
    pub fn apply_outcome(&mut self, generation: u64, outcome: FetchOutcome) -> bool {
        if generation != self.generation || self.status != LoadStatus::Loading {
            return false;
        }

        match outcome {
            FetchOutcome::Success(data) => {
                self.task_completion = data
                    .tasks
                    .iter()
                    .map(|task| (task.id.clone(), task.is_completed))
                    .collect();
                self.selected_tab = DashboardTab::Overview;
                self.task_cursor = 0;
                self.status = LoadStatus::Loaded(data);
            }
            FetchOutcome::Failure(err) => {
                self.status = LoadStatus::Failed(err.message().to_string());
            }
        }
        true
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match &self.status {
            LoadStatus::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded(_))
    }

    /// Returns false unless the dashboard is Loaded
    pub fn select_tab(&mut self, tab: DashboardTab) -> bool {
        if !self.is_loaded() {
            return false;
        }
        self.selected_tab = tab;
        true
    }

    /// Effective completion flag of a task, including local toggles
    pub fn is_task_completed(&self, task_id: &str) -> Option<bool> {
        self.task_completion.get(task_id).copied()
    }

    /// Flip a task's local flag; returns the new value
    pub fn toggle_task(&mut self, task_id: &str) -> Option<bool> {
        let done = self.task_completion.get_mut(task_id)?;
        *done = !*done;
        Some(*done)
    }

    /// `(completed, total)` over the loaded tasks
    pub fn task_progress(&self) -> (usize, usize) {
        let total = self.data().map(|d| d.tasks.len()).unwrap_or(0);
        let done = self.task_completion.values().filter(|done| **done).count();
        (done, total)
    }

    pub fn selected_task_id(&self) -> Option<&str> {
        self.data()
            .and_then(|d| d.tasks.get(self.task_cursor))
            .map(|task| task.id.as_str())
    }

    pub fn move_task_cursor_up(&mut self) {
        self.task_cursor = self.task_cursor.saturating_sub(1);
    }

    pub fn move_task_cursor_down(&mut self) {
        let len = self.data().map(|d| d.tasks.len()).unwrap_or(0);
        if self.task_cursor + 1 < len {
            self.task_cursor += 1;
        }
    }

    pub fn tick(&mut self) {
        if self.status == LoadStatus::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
