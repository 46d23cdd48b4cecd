//! TopHeader component - application top bar with the page title and
//! the system status label.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">{icon("clock")}</span>
                <span class="top-header__title">"Scheduled Tasks"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__status">
                    <span class="top-header__status-dot"></span>
                    "System status: OK"
                </span>
            </div>
        </div>
    }
}
