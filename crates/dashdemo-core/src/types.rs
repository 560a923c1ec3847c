//! Core domain types for dashdemo
//!
//! Everything here is an immutable value record produced once by a data
//! provider and held read-only by the application layer.

use serde::{Deserialize, Deserializer, Serialize};

/// Whether a user is logged in. Gates which top-level view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }
}

/// The signed-in user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url: None,
        }
    }
}

/// Headline counters shown on the Overview tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_users: u32,
    pub revenue: f64,
    pub projects: u32,
    pub notifications: u32,
}

impl Stats {
    /// Revenue as whole currency units, e.g. `12345.67` -> `"$12345"`.
    ///
    /// The fractional part is truncated, not rounded. Payloads with negative
    /// or non-finite revenue are rejected by [`DashboardData::validate`].
    pub fn revenue_display(&self) -> String {
        let whole = if self.revenue.is_finite() && self.revenue > 0.0 {
            self.revenue.trunc() as u64
        } else {
            0
        };
        format!("${}", whole)
    }
}

/// Category of a recent activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    UserRegistration,
    ProjectCompleted,
    PaymentReceived,
    Deployment,
    Other,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::UserRegistration => "Registration",
            ActivityKind::ProjectCompleted => "Project",
            ActivityKind::PaymentReceived => "Payment",
            ActivityKind::Deployment => "Deployment",
            ActivityKind::Other => "Other",
        }
    }
}

/// A single line of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    /// Relative time label such as "2 hours ago"
    pub timestamp: String,
    pub kind: ActivityKind,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        timestamp: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            timestamp: timestamp.into(),
            kind,
        }
    }
}

/// One analytics gauge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    /// Pre-formatted display value ("+12.5%", "$45,678", ...)
    pub value: String,
    /// Fill fraction in `[0.0, 1.0]`
    #[serde(deserialize_with = "deserialize_progress")]
    pub progress: f64,
    pub trend: String,
}

impl Metric {
    /// Create a metric, clamping `progress` into `[0.0, 1.0]`.
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        progress: f64,
        trend: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            progress: clamp_progress(progress),
            trend: trend.into(),
        }
    }

    /// Progress as a whole percentage (0-100)
    pub fn percent(&self) -> u16 {
        (clamp_progress(self.progress) * 100.0).round() as u16
    }
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

fn deserialize_progress<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(clamp_progress(raw))
}

/// The fixed trio of analytics gauges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub user_growth: Metric,
    pub revenue_trends: Metric,
    pub customer_satisfaction: Metric,
}

impl Analytics {
    /// Metrics in display order
    pub fn metrics(&self) -> [&Metric; 3] {
        [
            &self.user_growth,
            &self.revenue_trends,
            &self.customer_satisfaction,
        ]
    }
}

/// Lifecycle of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    InProgress,
    Pending,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    /// Period label such as "November 2025" or "Q3 2025"
    pub date: String,
    pub status: ReportStatus,
}

impl Report {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        status: ReportStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub priority: Priority,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        is_completed: bool,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_completed,
            priority,
        }
    }
}

/// Aggregate root delivered by a single successful fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub user: User,
    pub stats: Stats,
    pub recent_activities: Vec<Activity>,
    pub analytics: Analytics,
    pub reports: Vec<Report>,
    pub tasks: Vec<Task>,
}

/// Reason a payload breaks a data model invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("user name is empty")]
    EmptyUserName,

    #[error("user email is empty")]
    EmptyUserEmail,

    /// Negative, NaN or infinite revenue
    #[error("invalid revenue: {0}")]
    InvalidRevenue(String),

    #[error("duplicate {list} id: {id}")]
    DuplicateId { list: &'static str, id: String },
}

impl DashboardData {
    /// Check the invariants a successful fetch must satisfy.
    pub fn validate(&self) -> std::result::Result<(), InvariantViolation> {
        if self.user.name.trim().is_empty() {
            return Err(InvariantViolation::EmptyUserName);
        }
        if self.user.email.trim().is_empty() {
            return Err(InvariantViolation::EmptyUserEmail);
        }
        let revenue = self.stats.revenue;
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(InvariantViolation::InvalidRevenue(revenue.to_string()));
        }

        check_unique("activity", self.recent_activities.iter().map(|a| &a.id))?;
        check_unique("report", self.reports.iter().map(|r| &r.id))?;
        check_unique("task", self.tasks.iter().map(|t| &t.id))?;

        Ok(())
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

fn check_unique<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a String>,
) -> std::result::Result<(), InvariantViolation> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(InvariantViolation::DuplicateId {
                list,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn metric(progress: f64) -> Metric {
        Metric::new("Growth", "+1%", progress, "This month")
    }

    fn minimal_data() -> DashboardData {
        DashboardData {
            user: User::new("Jane", "jane@example.com"),
            stats: Stats {
                total_users: 1,
                revenue: 0.0,
                projects: 0,
                notifications: 0,
            },
            recent_activities: vec![
                Activity::new("1", "a", "now", ActivityKind::Other),
                Activity::new("2", "b", "now", ActivityKind::Deployment),
            ],
            analytics: Analytics {
                user_growth: metric(0.1),
                revenue_trends: metric(0.2),
                customer_satisfaction: metric(0.3),
            },
            reports: vec![Report::new("1", "r", "Q1", ReportStatus::Pending)],
            tasks: vec![
                Task::new("1", "t1", false, Priority::High),
                Task::new("2", "t2", true, Priority::Low),
            ],
        }
    }

    #[test]
    fn test_session_state_default_is_logged_out() {
        assert_eq!(SessionState::default(), SessionState::LoggedOut);
        assert!(!SessionState::LoggedOut.is_logged_in());
        assert!(SessionState::LoggedIn.is_logged_in());
    }

    #[test]
    fn test_revenue_display_truncates() {
        let stats = Stats {
            total_users: 1234,
            revenue: 12345.67,
            projects: 42,
            notifications: 8,
        };
        assert_snapshot!(stats.revenue_display(), @"$12345");
    }

    #[test]
    fn test_revenue_display_negative_and_nan() {
        let mut stats = minimal_data().stats;
        stats.revenue = -5.0;
        assert_eq!(stats.revenue_display(), "$0");
        stats.revenue = f64::NAN;
        assert_eq!(stats.revenue_display(), "$0");
    }

    #[test]
    fn test_metric_progress_is_clamped() {
        assert_eq!(metric(1.7).progress, 1.0);
        assert_eq!(metric(-0.2).progress, 0.0);
        assert_eq!(metric(f64::NAN).progress, 0.0);
        assert_eq!(metric(0.75).progress, 0.75);
    }

    #[test]
    fn test_metric_percent() {
        assert_eq!(metric(0.96).percent(), 96);
        assert_eq!(metric(0.0).percent(), 0);
        assert_eq!(metric(1.0).percent(), 100);
    }

    #[test]
    fn test_metric_deserialize_clamps_progress() {
        let json = r#"{"label":"x","value":"y","progress":3.5,"trend":"z"}"#;
        let metric: Metric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.progress, 1.0);
    }

    #[test]
    fn test_status_and_priority_labels() {
        assert_eq!(ReportStatus::InProgress.label(), "In Progress");
        assert_eq!(ReportStatus::Completed.label(), "Completed");
        assert_eq!(Priority::Medium.label(), "Medium");
        assert_eq!(ActivityKind::PaymentReceived.label(), "Payment");
    }

    #[test]
    fn test_validate_accepts_well_formed_payload() {
        assert_eq!(minimal_data().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_blank_user() {
        let mut data = minimal_data();
        data.user.name = "  ".to_string();
        assert_eq!(data.validate(), Err(InvariantViolation::EmptyUserName));

        let mut data = minimal_data();
        data.user.email = String::new();
        assert_eq!(data.validate(), Err(InvariantViolation::EmptyUserEmail));
    }

    #[test]
    fn test_validate_rejects_invalid_revenue() {
        for revenue in [-500.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut data = minimal_data();
            data.stats.revenue = revenue;
            assert!(
                matches!(data.validate(), Err(InvariantViolation::InvalidRevenue(_))),
                "revenue {} accepted",
                revenue
            );
        }

        let mut data = minimal_data();
        data.stats.revenue = 0.0;
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_task_ids() {
        let mut data = minimal_data();
        data.tasks.push(Task::new("2", "dup", false, Priority::Medium));

        let err = data.validate().unwrap_err();
        assert_eq!(err.to_string(), "duplicate task id: 2");
    }

    #[test]
    fn test_same_id_in_different_lists_is_fine() {
        // Activity "1", report "1" and task "1" coexist
        let data = minimal_data();
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_task_lookup() {
        let data = minimal_data();
        assert!(data.task("2").unwrap().is_completed);
        assert!(data.task("missing").is_none());
    }

    #[test]
    fn test_enum_serde_names() {
        let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let json = serde_json::to_string(&SessionState::LoggedIn).unwrap();
        assert_eq!(json, "\"logged_in\"");
    }
}
