//! Generated demo records the store starts with.

use super::aggregate::{format_timestamp, Task, TaskId, TaskStatus};
use super::catalog::{handler_summary, selectable_handlers};
use chrono::{Duration, NaiveDateTime};

// Spread of creation dates behind `now`, in days
const DATE_SPREAD_DAYS: i64 = 115;

/// `count` tasks cycling through the known handlers. Every third task is
/// stopped. Output is deterministic for a given `now`.
pub fn seed_tasks(count: usize, now: NaiveDateTime) -> Vec<Task> {
    let handlers: Vec<&str> = selectable_handlers().map(|(value, _)| *value).collect();

    (0..count)
        .map(|i| {
            let handler = handlers[i % handlers.len()];
            let days_back = (i as i64 * 37) % DATE_SPREAD_DAYS;
            let minutes_back = (i as i64 * 53) % (24 * 60);
            let created = now - Duration::days(days_back) - Duration::minutes(minutes_back);

            Task {
                id: TaskId::new(format!("100{}", i + 1)),
                job_handler: handler.to_string(),
                description: format!(
                    "Runs the {} routine and keeps system data consistent.",
                    handler_summary(handler)
                ),
                cron: format!("0 0/{} * * * ?", (i % 5) + 5),
                create_time: format_timestamp(created),
                status: if i % 3 == 0 {
                    TaskStatus::Stopped
                } else {
                    TaskStatus::Running
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::tasks::cron::is_valid_cron;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn test_seed_shape() {
        let tasks = seed_tasks(25, now());
        assert_eq!(tasks.len(), 25);
        assert_eq!(tasks[0].id.as_str(), "1001");
        assert_eq!(tasks[24].id.as_str(), "10025");
        assert_eq!(tasks[0].status, TaskStatus::Stopped);
        assert_eq!(tasks[1].status, TaskStatus::Running);
        assert_eq!(tasks[5].job_handler, tasks[0].job_handler);
    }

    #[test]
    fn test_seed_ids_unique_and_crons_valid() {
        let tasks = seed_tasks(25, now());
        let ids: HashSet<_> = tasks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), tasks.len());
        assert!(tasks.iter().all(|t| is_valid_cron(&t.cron)));
        assert!(tasks.iter().all(|t| t.create_date() <= "2024-05-20"));
    }
}
