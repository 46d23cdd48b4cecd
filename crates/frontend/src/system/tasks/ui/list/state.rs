use crate::shared::date_utils;
use contracts::system::tasks::{ScreenConfig, Task, TaskScreen};
use leptos::prelude::*;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state(config: ScreenConfig) -> RwSignal<TaskScreen> {
    RwSignal::new(TaskScreen::with_seed(config, date_utils::now()))
}

/// Rows of the current page. Only notifies when the rows actually change,
/// so typing into the filter form does not redraw the table.
pub fn visible_rows(state: RwSignal<TaskScreen>) -> Memo<Vec<Task>> {
    Memo::new(move |_| state.with(|s| s.visible_tasks().into_iter().cloned().collect()))
}
