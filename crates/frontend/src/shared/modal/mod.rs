use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Runs `callback` on the next tick. Closing a dialog removes the element
/// whose handler is still being dispatched.
pub(crate) fn run_deferred(callback: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        callback.run(());
    });
}

/// Confirmation dialog with Cancel / Confirm buttons
#[component]
pub fn ConfirmModal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Question shown in the body
    #[prop(into)]
    message: String,
    /// Confirm button caption
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
    /// Called when the user confirms
    on_confirm: Callback<()>,
    /// Called when the modal should close without confirming
    on_close: Callback<()>,
) -> impl IntoView {
    // Escape cancels
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        if let (Some(target), Some(current)) = (ev.target(), ev.current_target()) {
            if target == current {
                run_deferred(on_close);
            }
        }
    };

    let confirm_text = move || confirm_label.get().unwrap_or_else(|| "Confirm".to_string());

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal modal--confirm" role="alertdialog">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| run_deferred(on_close)>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-footer">
                    <Button variant="secondary" on_click=Callback::new(move |_| run_deferred(on_close))>
                        "Cancel"
                    </Button>
                    <Button variant="danger" on_click=Callback::new(move |_| run_deferred(on_confirm))>
                        {confirm_text}
                    </Button>
                </div>
            </div>
        </div>
    }
}
