//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle and brand
//! - Create-collaboration button
//! - Notifications dropdown

pub mod collaboration;
pub mod notifications;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use collaboration::CreateCollaborationModal;
use leptos::prelude::*;
use notifications::NotificationsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    type="button"
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <a href="/dashboard/" class="top-header__title">"Pallate"</a>
            </div>

            <div class="top-header__actions">
                <button
                    type="button"
                    id="addPostBtn"
                    class="top-header__icon-btn top-header__icon-btn--accent"
                    title="Create collaboration"
                    on:click=move |_| ctx.open_create_modal()
                >
                    {icon("plus")}
                </button>
                <NotificationsDropdown />
            </div>
        </header>
        <CreateCollaborationModal />
    }
}
