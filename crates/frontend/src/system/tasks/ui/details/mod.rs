use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::date_utils;
use crate::shared::drawer::Drawer;
use crate::shared::icons::icon;
use crate::shared::modal::run_deferred;
use contracts::system::tasks::catalog;
use contracts::system::tasks::{FormField, SaveOutcome, TaskScreen};
use leptos::children::ToChildren;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::{Flex, FlexGap};

/// Create/edit form for a single task, shown while an edit session is open.
///
/// All field values and validation messages live in the screen's edit
/// session; this component only forwards input and renders what is there.
#[component]
pub fn TaskEditDrawer(state: RwSignal<TaskScreen>) -> impl IntoView {
    let is_new = move || {
        state.with(|s| s.edit_session().map(|e| e.draft.is_new()).unwrap_or(true))
    };

    let title = Signal::derive(move || {
        if is_new() {
            "New task".to_string()
        } else {
            "Edit task".to_string()
        }
    });

    let field_value = move |field: FormField| {
        Signal::derive(move || {
            state.with(|s| {
                s.edit_session()
                    .map(|e| e.draft.field(field).to_string())
                    .unwrap_or_default()
            })
        })
    };

    let field_error = move |field: FormField| {
        Signal::derive(move || {
            state.with(|s| {
                s.edit_session()
                    .and_then(|e| e.error(field))
                    .map(str::to_string)
            })
        })
    };

    let set_field = move |field: FormField| {
        Callback::new(move |value: String| state.update(|s| s.set_draft_field(field, value)))
    };

    let save = Callback::new(move |_: ()| {
        state.update(|s| match s.save(date_utils::now()) {
            Ok(SaveOutcome::Created(id)) => log!("Created task {}", id),
            Ok(SaveOutcome::Updated(id)) => log!("Updated task {}", id),
            Ok(SaveOutcome::Missing(id)) => log!("Task {} no longer exists, form closed", id),
            Err(e) => log!("Task form rejected: {}", e),
        });
    });

    let cancel = Callback::new(move |_: ()| state.update(|s| s.cancel_edit()));

    // Shown for existing tasks only
    let record_info = move || {
        state.with(|s| {
            let draft = &s.edit_session()?.draft;
            let id = draft.id.as_ref()?;
            let created = s
                .store()
                .get(id)
                .map(|t| t.create_time.clone())
                .unwrap_or_default();
            Some(view! {
                <div class="task-form__meta">
                    <span class="task-form__meta-id">{format!("#{}", id)}</span>
                    <span class="task-form__meta-created">{format!("Created {}", created)}</span>
                </div>
            })
        })
    };

    view! {
        <Drawer
            title=title
            on_close=cancel
            footer=ChildrenFn::to_children(move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| run_deferred(cancel))>
                    "Cancel"
                </Button>
                <Button variant="primary" on_click=Callback::new(move |_| run_deferred(save))>
                    {icon("check-circle")}
                    " Save"
                </Button>
            })
        >
            <form
                class="task-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    run_deferred(save);
                }
            >
                <Flex vertical=true gap=FlexGap::Medium>
                    {record_info}
                    <Select
                        label="JobHandler"
                        id="task-form-job-handler"
                        value=field_value(FormField::JobHandler)
                        on_change=set_field(FormField::JobHandler)
                        options=catalog::handler_options()
                        error=field_error(FormField::JobHandler)
                    />
                    <Textarea
                        label="Description"
                        id="task-form-description"
                        value=field_value(FormField::Description)
                        on_input=set_field(FormField::Description)
                        placeholder="What does this task do?"
                        rows=3
                        error=field_error(FormField::Description)
                    />
                    <Input
                        label="Cron"
                        id="task-form-cron"
                        value=field_value(FormField::Cron)
                        on_input=set_field(FormField::Cron)
                        placeholder="e.g. 0 0 12 * * ?"
                        error=field_error(FormField::Cron)
                    />
                </Flex>
            </form>
        </Drawer>
    }
}
