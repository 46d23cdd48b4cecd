pub mod state;

use self::state::{create_state, visible_rows};
use super::details::TaskEditDrawer;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Input, Select, TaskStatusBadge};
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmModal;
use crate::shared::toast::ToastContainer;
use contracts::system::tasks::catalog;
use contracts::system::tasks::{ScreenConfig, StatusFilter, Task, TaskScreen};
use leptos::children::ToChildren;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const DELETE_TITLE: &str = "Delete task";
const DELETE_MESSAGE: &str =
    "Delete this task? This cannot be undone and the scheduled job stops immediately.";

#[component]
pub fn ScheduledTaskList(config: ScreenConfig) -> impl IntoView {
    let page_sizes = config.page_sizes.clone();
    let toast_duration_ms = config.toast_duration_ms;
    let state = create_state(config);
    let rows = visible_rows(state);
    let is_filter_expanded = RwSignal::new(true);

    log!(
        "Scheduled task screen ready with {} tasks",
        state.with_untracked(|s| s.store().len())
    );

    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filter().active_count()));

    let run_query = move || {
        state.update(|s| s.submit_query());
        log!(
            "Query matched {} tasks",
            state.with_untracked(|s| s.filtered_count())
        );
    };

    view! {
        <div class="scheduled-task-list">
            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                actions=ChildrenFn::to_children(move || view! {
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| run_query()>
                            {icon("search")}
                            " Query"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.open_create())
                        >
                            {icon("plus")}
                            " New task"
                        </Button>
                    </Space>
                })
                filter_content=ChildrenFn::to_children(move || view! {
                    <TaskFilterForm state=state on_submit=Callback::new(move |_| run_query()) />
                })
                filter_tags=ChildrenFn::to_children(move || view! { <AppliedFilterTags state=state /> })
            />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell attr:style="width: 100px;">"Task ID"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"JobHandler"</TableHeaderCell>
                        <TableHeaderCell>"Description"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 160px;">"Cron"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 170px;">"Created"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 110px;">"Status"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px; text-align: center;">"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let tasks = rows.get();
                        if tasks.is_empty() {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" attr:class="task-table__empty">
                                        "No tasks match the current filters."
                                    </TableCell>
                                </TableRow>
                            }.into_any()
                        } else {
                            tasks
                                .into_iter()
                                .map(|task| view! { <TaskRow task=task state=state /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page_state().current_page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                page_window=Signal::derive(move || state.with(|s| s.page_window()))
                summary=Signal::derive(move || state.with(|s| s.page_summary()))
                page_size=Signal::derive(move || state.with(|s| s.page_state().page_size))
                on_page_change=Callback::new(move |page| state.update(|s| {
                    s.go_to_page(page);
                }))
                on_page_size_change=Callback::new(move |size| state.update(|s| {
                    if !s.set_page_size(size) {
                        log!("Ignoring page size {}", size);
                    }
                }))
                page_size_options=page_sizes
            />

            <Show when=move || state.with(|s| s.is_editing())>
                <TaskEditDrawer state=state />
            </Show>

            <Show when=move || state.with(|s| s.pending_delete().is_some())>
                <ConfirmModal
                    title=DELETE_TITLE
                    message=DELETE_MESSAGE
                    confirm_label="Delete"
                    on_confirm=Callback::new(move |_| state.update(|s| {
                        if let Some(task) = s.confirm_delete() {
                            log!("Deleted task {}", task.id);
                        }
                    }))
                    on_close=Callback::new(move |_| state.update(|s| s.cancel_delete()))
                />
            </Show>

            <ToastContainer
                toasts=Signal::derive(move || state.with(|s| s.notifications().items().to_vec()))
                on_remove=Callback::new(move |id| state.update(|s| {
                    s.dismiss_notification(id);
                }))
                duration_ms=toast_duration_ms
            />
        </div>
    }
}

/// Draft query fields. Edits stay in the draft until the query is submitted.
#[component]
fn TaskFilterForm(state: RwSignal<TaskScreen>, on_submit: Callback<()>) -> impl IntoView {
    let handler = Signal::derive(move || state.with(|s| s.draft_filter().job_handler.clone()));
    let date_start = Signal::derive(move || state.with(|s| s.draft_filter().date_start.clone()));
    let date_end = Signal::derive(move || state.with(|s| s.draft_filter().date_end.clone()));
    let status = Signal::derive(move || {
        state.with(|s| s.draft_filter().status.as_str().to_string())
    });

    view! {
        <form
            class="task-filter-form"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <Flex gap=FlexGap::Medium align=FlexAlign::End>
                <Input
                    label="JobHandler"
                    id="task-filter-job-handler"
                    value=handler
                    on_input=Callback::new(move |v: String| state.update(|s| s.draft_filter_mut().job_handler = v))
                    placeholder="e.g. dataSync"
                />
                <Input
                    label="Created from"
                    id="task-filter-date-start"
                    input_type="date"
                    value=date_start
                    on_input=Callback::new(move |v: String| state.update(|s| s.draft_filter_mut().date_start = v))
                />
                <Input
                    label="Created to"
                    id="task-filter-date-end"
                    input_type="date"
                    value=date_end
                    on_input=Callback::new(move |v: String| state.update(|s| s.draft_filter_mut().date_end = v))
                />
                <Select
                    label="Status"
                    id="task-filter-status"
                    value=status
                    on_change=Callback::new(move |v: String| {
                        state.update(|s| s.draft_filter_mut().status = StatusFilter::parse(&v))
                    })
                    options=catalog::status_filter_options()
                />
            </Flex>
            // Enter in any field submits
            <button type="submit" hidden=true></button>
        </form>
    }
}

/// Chips describing the filter that is currently applied to the table
#[component]
fn AppliedFilterTags(state: RwSignal<TaskScreen>) -> impl IntoView {
    move || {
        let filter = state.with(|s| s.active_filter().clone());
        let mut tags = Vec::new();
        if !filter.job_handler.is_empty() {
            tags.push(format!("JobHandler: {}", filter.job_handler));
        }
        if let Some(range) = date_utils::format_range(&filter.date_start, &filter.date_end) {
            tags.push(format!("Created {}", range));
        }
        if filter.status != StatusFilter::All {
            tags.push(format!("Status: {}", filter.status.label()));
        }
        tags.into_iter()
            .map(|label| view! { <FilterTag label=label /> })
            .collect_view()
    }
}

#[component]
fn TaskRow(task: Task, state: RwSignal<TaskScreen>) -> impl IntoView {
    let running = task.is_running();
    let id_for_toggle = task.id.clone();
    let id_for_edit = task.id.clone();
    let id_for_delete = task.id.clone();

    view! {
        <TableRow>
            <TableCell>
                <span class="task-table__id">{format!("#{}", task.id)}</span>
            </TableCell>
            <TableCell>
                <code class="task-table__handler">{task.job_handler}</code>
            </TableCell>
            <TableCell>
                <TableCellLayout>{task.description}</TableCellLayout>
            </TableCell>
            <TableCell>
                <code class="task-table__cron">{task.cron}</code>
            </TableCell>
            <TableCell>
                <span class="task-table__created">{task.create_time}</span>
            </TableCell>
            <TableCell>
                <TaskStatusBadge status=task.status />
            </TableCell>
            <TableCell>
                <Flex justify=FlexJustify::Center gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title={if running { "Stop" } else { "Start" }}
                        on_click=move |_| state.update(|s| {
                            s.toggle_status(&id_for_toggle);
                        })
                    >
                        {if running { icon("pause") } else { icon("play") }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Edit"
                        on_click=move |_| state.update(|s| {
                            s.open_edit(&id_for_edit);
                        })
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        attr:title="Delete"
                        attr:class="task-table__delete-btn"
                        on_click=move |_| state.update(|s| s.request_delete(id_for_delete.clone()))
                    >
                        {icon("delete")}
                    </Button>
                </Flex>
            </TableCell>
        </TableRow>
    }
}
