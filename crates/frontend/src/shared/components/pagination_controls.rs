use crate::shared::icons::icon;
use contracts::system::tasks::PageSummary;
use leptos::prelude::*;

/// PaginationControls component - range summary, page-size select and
/// numbered page buttons. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 when there is nothing to show)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Page numbers to render as buttons
    #[prop(into)]
    page_window: Signal<Vec<usize>>,

    /// "Showing X to Y of N" figures
    #[prop(into)]
    summary: Signal<PageSummary>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let default_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <div class="pagination-controls__info">
                <span class="pagination-info">
                    {move || {
                        let s = summary.get();
                        format!("Showing {} to {} of {}", s.first, s.last, s.total)
                    }}
                </span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(default_size);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <nav class="pagination-controls__pages" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <For
                    each=move || page_window.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || {
                        let total = total_pages.get();
                        total == 0 || current_page.get() >= total
                    }
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </div>
    }
}
