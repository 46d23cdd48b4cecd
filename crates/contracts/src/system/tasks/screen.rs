//! Task screen controller.
//!
//! Owns every piece of screen state and exposes the transitions the UI
//! triggers. The filtered list, the visible page and the page count are not
//! stored: they are computed from the store, the active filter and the page
//! state on every read.

use super::aggregate::{Task, TaskId, TaskStatus};
use super::config::ScreenConfig;
use super::error::TaskError;
use super::filter::{filter_tasks, TaskFilter};
use super::notification::{NotificationId, NotificationQueue};
use super::pagination::{self, PageState, PageSummary};
use super::seed::seed_tasks;
use super::store::TaskStore;
use super::validation::{FieldErrors, FormField, TaskDraft};
use chrono::NaiveDateTime;

pub const MSG_CREATED: &str = "Task created successfully";
pub const MSG_UPDATED: &str = "Task updated successfully";
pub const MSG_DELETED: &str = "Task deleted successfully";
pub const MSG_STARTED: &str = "Task started";
pub const MSG_STOPPED: &str = "Task stopped";

/// Open edit surface: the draft plus the errors of the last save attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditSession {
    pub draft: TaskDraft,
    pub errors: FieldErrors,
}

impl EditSession {
    fn new(draft: TaskDraft) -> Self {
        Self {
            draft,
            errors: FieldErrors::new(),
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(TaskId),
    Updated(TaskId),
    /// The edited record no longer exists; nothing changed
    Missing(TaskId),
}

fn checked_config(config: ScreenConfig) -> ScreenConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("invalid screen config, using defaults: {:#}", e);
            ScreenConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskScreen {
    config: ScreenConfig,
    store: TaskStore,
    draft_filter: TaskFilter,
    active_filter: TaskFilter,
    page: PageState,
    edit: Option<EditSession>,
    pending_delete: Option<TaskId>,
    notifications: NotificationQueue,
}

impl TaskScreen {
    /// An invalid `config` is replaced by the defaults, so the page size
    /// always comes from the allowed set.
    pub fn new(config: ScreenConfig, tasks: Vec<Task>) -> Self {
        let config = checked_config(config);
        let page = PageState::new(config.default_page_size);
        Self {
            config,
            store: TaskStore::new(tasks),
            draft_filter: TaskFilter::default(),
            active_filter: TaskFilter::default(),
            page,
            edit: None,
            pending_delete: None,
            notifications: NotificationQueue::new(),
        }
    }

    /// Screen populated with `config.seed_count` generated tasks
    pub fn with_seed(config: ScreenConfig, now: NaiveDateTime) -> Self {
        let config = checked_config(config);
        let tasks = seed_tasks(config.seed_count, now);
        Self::new(config, tasks)
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn draft_filter(&self) -> &TaskFilter {
        &self.draft_filter
    }

    /// Form-side filter. Editing it does not change the list.
    pub fn draft_filter_mut(&mut self) -> &mut TaskFilter {
        &mut self.draft_filter
    }

    pub fn active_filter(&self) -> &TaskFilter {
        &self.active_filter
    }

    /// Applies the draft filter and goes back to the first page. This is the
    /// only writer of the active filter.
    pub fn submit_query(&mut self) {
        self.active_filter = self.draft_filter.clone();
        self.page.current_page = 1;
        log::debug!("task filter applied: {:?}", self.active_filter);
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter_tasks(self.store.tasks(), &self.active_filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.store
            .tasks()
            .iter()
            .filter(|t| self.active_filter.matches(t))
            .count()
    }

    /// Records on the current page
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let filtered = self.filtered_tasks();
        pagination::paginate(&filtered, self.page.current_page, self.page.page_size).to_vec()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered_count(), self.page.page_size)
    }

    pub fn page_summary(&self) -> PageSummary {
        PageSummary::new(self.page, self.filtered_count())
    }

    pub fn page_window(&self) -> Vec<usize> {
        pagination::page_window(self.page.current_page, self.total_pages())
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Out-of-range requests are ignored
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let count = self.filtered_count();
        self.page.go_to(page, count)
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.page.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Switches page size and returns to page 1. Sizes outside the
    /// configured set are ignored.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !self.config.is_allowed_page_size(size) {
            log::debug!("ignoring page size {} not in {:?}", size, self.config.page_sizes);
            return false;
        }
        self.page = PageState::new(size);
        true
    }

    fn clamp_page(&mut self) {
        let count = self.filtered_count();
        self.page.clamp(count);
    }

    // ------------------------------------------------------------------
    // Edit surface
    // ------------------------------------------------------------------

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    pub fn open_create(&mut self) {
        self.edit = Some(EditSession::new(TaskDraft::blank()));
    }

    /// Opens the form on an existing record. Unknown ids leave the form closed.
    pub fn open_edit(&mut self, id: &TaskId) -> bool {
        match self.store.get(id) {
            Some(task) => {
                self.edit = Some(EditSession::new(TaskDraft::from_task(task)));
                true
            }
            None => {
                log::debug!("open_edit: task {} not found", id);
                false
            }
        }
    }

    pub fn set_draft_field(&mut self, field: FormField, value: String) {
        if let Some(session) = self.edit.as_mut() {
            session.draft.set_field(field, value);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Validates and applies the open draft. On validation failure the form
    /// stays open with its errors and the store is untouched.
    pub fn save(&mut self, now: NaiveDateTime) -> Result<SaveOutcome, TaskError> {
        let session = self.edit.as_mut().ok_or(TaskError::NoOpenForm)?;

        let errors = session.draft.validate();
        if !errors.is_empty() {
            session.errors = errors.clone();
            return Err(TaskError::Validation(errors));
        }

        let draft = std::mem::take(&mut session.draft);
        self.edit = None;

        let outcome = match draft.id.clone() {
            None => {
                let id = self.store.create(&draft, now);
                log::info!("task {} created", id);
                self.notifications.success(MSG_CREATED);
                SaveOutcome::Created(id)
            }
            Some(id) if self.store.update(&draft) => {
                log::info!("task {} updated", id);
                self.notifications.success(MSG_UPDATED);
                SaveOutcome::Updated(id)
            }
            Some(id) => {
                log::debug!("save: task {} no longer exists", id);
                SaveOutcome::Missing(id)
            }
        };

        self.clamp_page();
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Delete with confirmation
    // ------------------------------------------------------------------

    pub fn pending_delete(&self) -> Option<&TaskId> {
        self.pending_delete.as_ref()
    }

    pub fn request_delete(&mut self, id: TaskId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the record awaiting confirmation. Does nothing without a
    /// pending id; an id that is no longer stored just clears the request.
    pub fn confirm_delete(&mut self) -> Option<Task> {
        let id = self.pending_delete.take()?;
        let removed = self.store.delete(&id);
        match &removed {
            Some(_) => {
                log::info!("task {} deleted", id);
                self.notifications.success(MSG_DELETED);
                self.clamp_page();
            }
            None => log::debug!("confirm_delete: task {} not found", id),
        }
        removed
    }

    // ------------------------------------------------------------------
    // Run state
    // ------------------------------------------------------------------

    pub fn toggle_status(&mut self, id: &TaskId) -> Option<TaskStatus> {
        let status = self.store.toggle_status(id)?;
        let message = match status {
            TaskStatus::Running => MSG_STARTED,
            TaskStatus::Stopped => MSG_STOPPED,
        };
        log::info!("task {} is now {}", id, status.as_str());
        self.notifications.success(message);
        // Filtering by status can shrink the result.
        self.clamp_page();
        Some(status)
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }
}
