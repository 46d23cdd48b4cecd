use super::aggregate::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Status constraint of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    Running,
    Stopped,
}

impl StatusFilter {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Running => status == TaskStatus::Running,
            StatusFilter::Stopped => status == TaskStatus::Stopped,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Running => "RUNNING",
            StatusFilter::Stopped => "STOPPED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Running => "Running",
            StatusFilter::Stopped => "Stopped",
        }
    }

    /// Unknown values fall back to `All`
    pub fn parse(value: &str) -> Self {
        match value {
            "RUNNING" => StatusFilter::Running,
            "STOPPED" => StatusFilter::Stopped,
            _ => StatusFilter::All,
        }
    }
}

/// Filter criteria. The screen keeps two of these: the draft bound to the
/// form and the active copy applied to the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive substring of the job handler; empty matches all
    pub job_handler: String,
    /// Inclusive `YYYY-MM-DD` lower bound; empty is unbounded
    pub date_start: String,
    /// Inclusive `YYYY-MM-DD` upper bound; empty is unbounded
    pub date_end: String,
    pub status: StatusFilter,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_handler(task) && self.status.matches(task.status) && self.matches_date(task)
    }

    fn matches_handler(&self, task: &Task) -> bool {
        self.job_handler.is_empty()
            || task
                .job_handler
                .to_lowercase()
                .contains(&self.job_handler.to_lowercase())
    }

    // Plain string comparison: `YYYY-MM-DD` sorts chronologically.
    fn matches_date(&self, task: &Task) -> bool {
        let date = task.create_date();
        if !self.date_start.is_empty() && date < self.date_start.as_str() {
            return false;
        }
        if !self.date_end.is_empty() && date > self.date_end.as_str() {
            return false;
        }
        true
    }

    /// Number of constraints that actually restrict the result
    pub fn active_count(&self) -> usize {
        [
            !self.job_handler.is_empty(),
            !self.date_start.is_empty(),
            !self.date_end.is_empty(),
            self.status != StatusFilter::All,
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }
}

/// Tasks matching `filter`, in store order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::tasks::aggregate::TaskId;

    fn task(id: &str, handler: &str, create_time: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(id),
            job_handler: handler.to_string(),
            description: String::new(),
            cron: "* * * * *".to_string(),
            create_time: create_time.to_string(),
            status,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "dataSyncJob", "2023-12-31 23:59:59", TaskStatus::Running),
            task("2", "dailyBackupJob", "2024-01-01 00:00:00", TaskStatus::Stopped),
            task("3", "DataSyncJob", "2024-01-15 10:00:00", TaskStatus::Stopped),
            task("4", "reportGenJob", "2024-01-31 23:59:59", TaskStatus::Running),
            task("5", "dataSyncJob", "2024-02-01 00:00:00", TaskStatus::Running),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything_in_order() {
        let tasks = sample();
        let result = filter_tasks(&tasks, &TaskFilter::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_handler_is_case_insensitive_substring() {
        let tasks = sample();
        let filter = TaskFilter {
            job_handler: "SYNC".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_date_range_is_inclusive_on_date_part() {
        let tasks = sample();
        let filter = TaskFilter {
            date_start: "2024-01-01".to_string(),
            date_end: "2024-01-31".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let tasks = sample();
        let from = TaskFilter {
            date_start: "2024-01-31".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &from)), vec!["4", "5"]);

        let until = TaskFilter {
            date_end: "2024-01-01".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tasks(&tasks, &until)), vec!["1", "2"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let tasks = sample();
        let filter = TaskFilter {
            job_handler: "sync".to_string(),
            date_start: "2024-01-01".to_string(),
            date_end: String::new(),
            status: StatusFilter::Running,
        };
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec!["5"]);
    }

    #[test]
    fn test_active_count() {
        assert_eq!(TaskFilter::default().active_count(), 0);
        let filter = TaskFilter {
            job_handler: "x".to_string(),
            status: StatusFilter::Stopped,
            ..Default::default()
        };
        assert_eq!(filter.active_count(), 2);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_status_filter_parse_falls_back_to_all() {
        assert_eq!(StatusFilter::parse("STOPPED"), StatusFilter::Stopped);
        assert_eq!(StatusFilter::parse("whatever"), StatusFilter::All);
    }
}
