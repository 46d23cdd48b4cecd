use crate::layout::Shell;
use crate::shared::config::load_screen_config;
use crate::system::tasks::ui::list::ScheduledTaskList;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_screen_config();
    log::info!(
        "Starting with page size {} and {} seed tasks",
        config.default_page_size,
        config.seed_count
    );

    view! {
        <ConfigProvider>
            <Shell>
                <ScheduledTaskList config=config />
            </Shell>
        </ConfigProvider>
    }
}
