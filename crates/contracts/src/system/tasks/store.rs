//! In-memory ordered task collection

use super::aggregate::{Task, TaskId, TaskStatus};
use super::validation::TaskDraft;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    // Next id to hand out. Only ever grows, so ids are never reused.
    next_id: u64,
}

impl TaskStore {
    /// Ids are opaque, so the largest numeric one may already sit at
    /// `u64::MAX`. The counter then starts over at 1 and skips live ids.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| t.id.numeric())
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or(1);
        Self { tasks, next_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    fn allocate_id(&mut self) -> TaskId {
        loop {
            let id = TaskId::new(self.next_id.to_string());
            self.next_id = self.next_id.checked_add(1).unwrap_or(1);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Inserts a new record at the front. The draft's id and status are
    /// ignored: the store assigns the id and every new task starts stopped.
    pub fn create(&mut self, draft: &TaskDraft, now: NaiveDateTime) -> TaskId {
        let id = self.allocate_id();
        let task = Task::new_for_insert(
            id.clone(),
            draft.job_handler.clone(),
            draft.description.clone(),
            draft.cron.clone(),
            now,
        );
        self.tasks.insert(0, task);
        id
    }

    /// Replaces the mutable fields of the record with `draft.id` in place.
    /// Returns `false` when the draft has no id or the id is unknown.
    pub fn update(&mut self, draft: &TaskDraft) -> bool {
        let Some(id) = draft.id.as_ref() else {
            return false;
        };
        let Some(task) = self.get_mut(id) else {
            return false;
        };
        task.job_handler = draft.job_handler.clone();
        task.description = draft.description.clone();
        task.cron = draft.cron.clone();
        if let Some(status) = draft.status {
            task.status = status;
        }
        true
    }

    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flips run state; returns the new state
    pub fn toggle_status(&mut self, id: &TaskId) -> Option<TaskStatus> {
        let task = self.get_mut(id)?;
        task.status = task.status.toggled();
        Some(task.status)
    }
}
