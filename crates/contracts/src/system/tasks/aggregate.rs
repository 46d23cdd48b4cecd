use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of `Task::create_time`. The first ten characters are the
/// `YYYY-MM-DD` date used by range filters.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// ID Type
// ============================================================================

/// Opaque task identifier, unique within a store for the whole session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, when it has one. Used to seed the id counter.
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Run state
// ============================================================================

/// Run/stop flag. Display-only: nothing executes the cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Running,
    Stopped,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Running => TaskStatus::Stopped,
            TaskStatus::Stopped => TaskStatus::Running,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Running => "RUNNING",
            TaskStatus::Stopped => "STOPPED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Running => "Running",
            TaskStatus::Stopped => "Stopped",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Scheduled job definition (not an executing job instance)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    /// Key of one of the handlers in `catalog::JOB_HANDLERS`
    pub job_handler: String,

    pub description: String,

    /// Cron expression as entered by the user
    pub cron: String,

    /// `YYYY-MM-DD HH:MM:SS`, assigned once at creation
    pub create_time: String,

    pub status: TaskStatus,
}

impl Task {
    /// Builds a freshly created record. New tasks always start stopped.
    pub fn new_for_insert(
        id: TaskId,
        job_handler: String,
        description: String,
        cron: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            job_handler,
            description,
            cron,
            create_time: format_timestamp(created_at),
            status: TaskStatus::Stopped,
        }
    }

    /// Date portion of `create_time`
    pub fn create_date(&self) -> &str {
        self.create_time
            .split_once(' ')
            .map(|(date, _)| date)
            .unwrap_or(&self.create_time)
    }

    pub fn is_running(&self) -> bool {
        self.status == TaskStatus::Running
    }
}

pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .expect("valid timestamp")
    }

    #[test]
    fn test_new_for_insert_is_stopped_and_formatted() {
        let task = Task::new_for_insert(
            TaskId::new("42"),
            "dataSyncJob".to_string(),
            "sync".to_string(),
            "0 0 12 * * ?".to_string(),
            at(2024, 3, 5, 7, 8, 9),
        );
        assert_eq!(task.status, TaskStatus::Stopped);
        assert_eq!(task.create_time, "2024-03-05 07:08:09");
        assert_eq!(task.create_date(), "2024-03-05");
    }

    #[test]
    fn test_status_toggle_and_wire_names() {
        assert_eq!(TaskStatus::Running.toggled(), TaskStatus::Stopped);
        assert_eq!(TaskStatus::Stopped.toggled().toggled(), TaskStatus::Stopped);
        assert_eq!(TaskStatus::Stopped.as_str(), "STOPPED");
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(TaskId::new("10025").numeric(), Some(10025));
        assert_eq!(TaskId::new("abc").numeric(), None);
    }

    #[test]
    fn test_create_date_without_time_part() {
        let mut task = Task::new_for_insert(
            TaskId::new("1"),
            String::new(),
            String::new(),
            String::new(),
            at(2024, 1, 1, 0, 0, 0),
        );
        task.create_time = "2024-01-31".to_string();
        assert_eq!(task.create_date(), "2024-01-31");
    }
}
