use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Sidebar zone. On narrow screens an overlay behind the open sidebar closes it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <Show when=is_open>
            <div class="sidebar-overlay" on:click=move |_| ctx.close_left()></div>
        </Show>
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--collapsed=move || !is_open()>
            {children()}
        </aside>
    }
}
