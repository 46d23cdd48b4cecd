use contracts::system::tasks::TaskStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Run-state badge: green dot for running, grey for stopped
#[component]
pub fn TaskStatusBadge(status: TaskStatus) -> impl IntoView {
    let (variant, modifier) = match status {
        TaskStatus::Running => ("success", "badge--status-running"),
        TaskStatus::Stopped => ("neutral", "badge--status-stopped"),
    };

    view! {
        <span class=format!("badge badge--status badge--{} {}", variant, modifier)>
            <span class="badge__dot"></span>
            {status.label()}
        </span>
    }
}
