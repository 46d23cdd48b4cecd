//! Edit form draft and its validation rules

use super::aggregate::{Task, TaskId, TaskStatus};
use super::catalog::is_known_handler;
use super::cron::is_valid_cron;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MSG_HANDLER_REQUIRED: &str = "please select a JobHandler";
pub const MSG_HANDLER_UNKNOWN: &str = "please select a JobHandler from the list";
pub const MSG_DESCRIPTION_REQUIRED: &str = "please enter a task description";
pub const MSG_CRON_REQUIRED: &str = "please enter a Cron expression";
pub const MSG_CRON_INVALID: &str = "Cron expression format is invalid";

/// Editable fields of the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    JobHandler,
    Description,
    Cron,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::JobHandler => "jobHandler",
            FormField::Description => "description",
            FormField::Cron => "cron",
        }
    }
}

/// Field name -> message. Empty means the draft is valid.
pub type FieldErrors = BTreeMap<FormField, String>;

/// Partial task record under construction (no id) or modification (id set)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub job_handler: String,
    pub description: String,
    pub cron: String,
    pub status: Option<TaskStatus>,
}

impl TaskDraft {
    /// Blank draft for the "new task" form
    pub fn blank() -> Self {
        Self {
            status: Some(TaskStatus::Stopped),
            ..Default::default()
        }
    }

    /// Draft prefilled from an existing record
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            job_handler: task.job_handler.clone(),
            description: task.description.clone(),
            cron: task.cron.clone(),
            status: Some(task.status),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::JobHandler => self.job_handler = value,
            FormField::Description => self.description = value,
            FormField::Cron => self.cron = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::JobHandler => &self.job_handler,
            FormField::Description => &self.description,
            FormField::Cron => &self.cron,
        }
    }

    /// Checks every field and reports all violations at once
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.job_handler.trim().is_empty() {
            errors.insert(FormField::JobHandler, MSG_HANDLER_REQUIRED.to_string());
        } else if !is_known_handler(&self.job_handler) {
            errors.insert(FormField::JobHandler, MSG_HANDLER_UNKNOWN.to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, MSG_DESCRIPTION_REQUIRED.to_string());
        }
        if self.cron.trim().is_empty() {
            errors.insert(FormField::Cron, MSG_CRON_REQUIRED.to_string());
        }
        // A non-empty but malformed value (whitespace included) reports the
        // format error instead of "required".
        if !self.cron.is_empty() && !is_valid_cron(&self.cron) {
            errors.insert(FormField::Cron, MSG_CRON_INVALID.to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(handler: &str, description: &str, cron: &str) -> TaskDraft {
        TaskDraft {
            job_handler: handler.to_string(),
            description: description.to_string(),
            cron: cron.to_string(),
            ..TaskDraft::blank()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(draft("dataSyncJob", "sync data", "0 0 12 * * ?").validate().is_empty());
    }

    #[test]
    fn test_all_fields_reported_together() {
        let errors = draft("", "", "not-a-cron").validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&FormField::JobHandler], MSG_HANDLER_REQUIRED);
        assert_eq!(errors[&FormField::Description], MSG_DESCRIPTION_REQUIRED);
        assert_eq!(errors[&FormField::Cron], MSG_CRON_INVALID);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let errors = draft("  ", "\t", "").validate();
        assert_eq!(errors[&FormField::JobHandler], MSG_HANDLER_REQUIRED);
        assert_eq!(errors[&FormField::Description], MSG_DESCRIPTION_REQUIRED);
        assert_eq!(errors[&FormField::Cron], MSG_CRON_REQUIRED);
    }

    #[test]
    fn test_handler_outside_catalog() {
        let errors = draft("rm -rf", "x", "@daily").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FormField::JobHandler], MSG_HANDLER_UNKNOWN);
    }

    #[test]
    fn test_whitespace_cron_reports_format_error() {
        let errors = draft("dataSyncJob", "x", "   ").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FormField::Cron], MSG_CRON_INVALID);
    }

    #[test]
    fn test_from_task_copies_fields() {
        let task = Task {
            id: TaskId::new("7"),
            job_handler: "cleanTempJob".to_string(),
            description: "clean".to_string(),
            cron: "@daily".to_string(),
            create_time: "2024-01-01 00:00:00".to_string(),
            status: TaskStatus::Running,
        };
        let draft = TaskDraft::from_task(&task);
        assert!(!draft.is_new());
        assert_eq!(draft.field(FormField::Cron), "@daily");
        assert_eq!(draft.status, Some(TaskStatus::Running));
    }
}
