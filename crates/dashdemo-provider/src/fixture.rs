//! The fixed payload served by [`crate::MockProvider`]

use dashdemo_core::{
    Activity, ActivityKind, Analytics, DashboardData, Metric, Priority, Report, ReportStatus,
    Stats, Task, User,
};

/// Build the demo dashboard payload.
pub fn sample_dashboard() -> DashboardData {
    DashboardData {
        user: User::new("John Doe", "john.doe@example.com"),
        stats: Stats {
            total_users: 1234,
            revenue: 12345.67,
            projects: 42,
            notifications: 8,
        },
        recent_activities: vec![
            Activity::new(
                "1",
                "New user registration completed",
                "2 hours ago",
                ActivityKind::UserRegistration,
            ),
            Activity::new(
                "2",
                "Project Alpha successfully completed",
                "5 hours ago",
                ActivityKind::ProjectCompleted,
            ),
            Activity::new(
                "3",
                "Payment of $5,000 received",
                "1 day ago",
                ActivityKind::PaymentReceived,
            ),
            Activity::new(
                "4",
                "New feature deployed to production",
                "2 days ago",
                ActivityKind::Deployment,
            ),
            Activity::new(
                "5",
                "System backup completed",
                "3 days ago",
                ActivityKind::Other,
            ),
        ],
        analytics: Analytics {
            user_growth: Metric::new("User Growth", "+12.5%", 0.75, "This month"),
            revenue_trends: Metric::new("Revenue Trends", "$45,678", 0.85, "Total this quarter"),
            customer_satisfaction: Metric::new(
                "Customer Satisfaction",
                "4.8/5.0",
                0.96,
                "Average rating",
            ),
        },
        reports: vec![
            Report::new(
                "1",
                "Monthly Sales Report",
                "November 2025",
                ReportStatus::Completed,
            ),
            Report::new(
                "2",
                "User Activity Report",
                "October 2025",
                ReportStatus::Completed,
            ),
            Report::new("3", "Financial Summary", "Q3 2025", ReportStatus::InProgress),
            Report::new(
                "4",
                "Performance Metrics",
                "September 2025",
                ReportStatus::Completed,
            ),
            Report::new(
                "5",
                "Customer Analytics",
                "August 2025",
                ReportStatus::Pending,
            ),
        ],
        tasks: vec![
            Task::new("1", "Review project proposal", false, Priority::High),
            Task::new("2", "Update user documentation", true, Priority::Medium),
            Task::new("3", "Prepare quarterly presentation", false, Priority::High),
            Task::new("4", "Code review for new feature", false, Priority::Medium),
            Task::new("5", "Team meeting at 3 PM", true, Priority::Low),
            Task::new("6", "Deploy to production", false, Priority::High),
            Task::new("7", "Update dependencies", false, Priority::Low),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dashboard_is_valid() {
        assert!(sample_dashboard().validate().is_ok());
    }

    #[test]
    fn test_sample_dashboard_headline_stats() {
        let data = sample_dashboard();
        assert_eq!(data.stats.total_users, 1234);
        assert_eq!(data.stats.revenue, 12345.67);
        assert_eq!(data.stats.projects, 42);
        assert_eq!(data.stats.notifications, 8);
    }

    #[test]
    fn test_sample_dashboard_list_sizes() {
        let data = sample_dashboard();
        assert_eq!(data.recent_activities.len(), 5);
        assert_eq!(data.reports.len(), 5);
        assert_eq!(data.tasks.len(), 7);
        assert!(data.task("2").unwrap().is_completed);
    }
}
