use crate::shared::icons::icon;
use crate::shared::modal::run_deferred;
use leptos::ev;
use leptos::prelude::*;

/// Side panel sliding in from the right, used for create/edit forms.
///
/// Renders its own header; the caller supplies the body and the footer
/// buttons.
#[component]
pub fn Drawer(
    /// Header text
    #[prop(into)]
    title: Signal<String>,
    /// Called on overlay click, close button or Escape
    on_close: Callback<()>,
    /// Footer content (action buttons)
    footer: ChildrenFn,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay, so a
    // text selection dragged out of the panel does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            run_deferred(on_close);
        }
    };

    view! {
        <div
            class="drawer-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <aside class="drawer" role="dialog">
                <div class="drawer__header">
                    <h2 class="drawer__title">{move || title.get()}</h2>
                    <button class="button button--icon drawer__close" on:click=move |_| run_deferred(on_close)>
                        {icon("x")}
                    </button>
                </div>
                <div class="drawer__body">
                    {children()}
                </div>
                <div class="drawer__footer">
                    {footer()}
                </div>
            </aside>
        </div>
    }
}
