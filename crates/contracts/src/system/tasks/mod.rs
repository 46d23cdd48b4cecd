//! Scheduled task screen: task records, filtering, pagination, validation
//! and the controller that ties them together.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod cron;
pub mod error;
pub mod filter;
pub mod notification;
pub mod pagination;
pub mod screen;
pub mod seed;
pub mod store;
pub mod validation;

pub use aggregate::{Task, TaskId, TaskStatus, TIMESTAMP_FORMAT};
pub use config::ScreenConfig;
pub use error::TaskError;
pub use filter::{StatusFilter, TaskFilter};
pub use notification::{Notification, NotificationId, NotificationQueue, Severity};
pub use pagination::{PageState, PageSummary};
pub use screen::{EditSession, SaveOutcome, TaskScreen};
pub use store::TaskStore;
pub use validation::{FieldErrors, FormField, TaskDraft};
