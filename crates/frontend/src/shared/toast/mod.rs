//! Toast stack for task notifications.
//!
//! Each toast arms its own expiry timer when mounted and disarms it on
//! unmount. The timer and the close button both call `on_remove`, which
//! must tolerate ids that are already gone.

use crate::shared::icons::icon;
use contracts::system::tasks::{Notification, NotificationId, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ToastContainer(
    #[prop(into)] toasts: Signal<Vec<Notification>>,
    on_remove: Callback<NotificationId>,
    /// Display time of every toast
    duration_ms: u32,
) -> impl IntoView {
    view! {
        <div class="toast-container">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! {
                    <Toast toast=toast on_remove=on_remove duration_ms=duration_ms />
                }
            />
        </div>
    }
}

/// Shared flag between a mounted toast and its pending expiry timer
#[derive(Clone)]
struct ExpiryGuard(Arc<AtomicBool>);

impl ExpiryGuard {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[component]
fn Toast(toast: Notification, on_remove: Callback<NotificationId>, duration_ms: u32) -> impl IntoView {
    let id = toast.id;

    // Closing by hand unmounts the toast before the timer fires
    let expiry = ExpiryGuard::new();
    let timer_guard = expiry.clone();
    on_cleanup(move || expiry.cancel());
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        if timer_guard.is_live() {
            on_remove.run(id);
        }
    });

    let (modifier, symbol) = match toast.severity {
        Severity::Success => ("toast--success", "check-circle"),
        Severity::Error => ("toast--error", "x-circle"),
    };

    view! {
        <div class=format!("toast {}", modifier) role="status">
            <div class="toast__icon">{icon(symbol)}</div>
            <div class="toast__message">{toast.message}</div>
            <button class="toast__close" title="Dismiss" on:click=move |_| on_remove.run(id)>
                {icon("x")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_guard_is_seen_by_timer_clone() {
        let guard = ExpiryGuard::new();
        let timer_side = guard.clone();
        assert!(timer_side.is_live());
        guard.cancel();
        assert!(!timer_side.is_live());
    }
}
