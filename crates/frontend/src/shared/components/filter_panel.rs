use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible filter form with an action slot
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of constraints in the applied filter (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Buttons shown in the header (query, create, ...)
    #[prop(into)]
    actions: ChildrenFn,

    /// Filter content (form fields)
    #[prop(into)]
    filter_content: ChildrenFn,

    /// Applied filter chips - optional
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class=move || {
                            if is_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        }
                    >
                        <polyline points="6 9 12 15 18 9"></polyline>
                    </svg>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <Badge variant="primary">{count}</Badge>
                        })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    {actions()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - read-only chip describing an applied constraint
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
        </div>
    }
}
