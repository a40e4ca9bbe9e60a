//! Notifications dropdown behind the bell button.
//!
//! The list is embedded by the server as the `notifications-data` JSON island.

use crate::layout::global_context::use_global_context;
use crate::shared::date_utils::format_created;
use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::page_data::read_json_island;
use contracts::notifications::NotificationsData;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

pub const NOTIFICATIONS_ISLAND: &str = "notifications-data";

#[component]
pub fn NotificationsDropdown() -> impl IntoView {
    let ctx = use_global_context();
    let data = StoredValue::new(
        read_json_island::<NotificationsData>(NOTIFICATIONS_ISLAND).unwrap_or_default(),
    );
    let container = NodeRef::<Div>::new();
    let is_open = move || ctx.notifications_open.get();

    let outside_click = window_event_listener(ev::click, move |ev| {
        if !ctx.notifications_open.get_untracked() {
            return;
        }
        let Some(el) = container.get_untracked() else {
            return;
        };
        if !dom::event_within(&ev, &el) {
            ctx.close_notifications();
        }
    });
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_notifications();
        }
    });
    on_cleanup(move || {
        outside_click.remove();
        escape.remove();
    });

    let unread = data.with_value(|d| d.unread());

    view! {
        <div class="notifications" node_ref=container>
            <button
                type="button"
                class="top-header__icon-btn notifications__toggle"
                title="Notifications"
                on:click=move |_| ctx.toggle_notifications()
            >
                {icon("bell")}
                {(unread > 0).then(|| view! { <span class="notifications__badge">{unread}</span> })}
            </button>

            <div class="notifications__dropdown" class:hidden=move || !is_open()>
                <div class="notifications__header">
                    <span>"Notifications"</span>
                    <button
                        type="button"
                        class="notifications__close"
                        title="Close"
                        on:click=move |ev: ev::MouseEvent| {
                            ev.stop_propagation();
                            ctx.close_notifications();
                        }
                    >
                        {icon("x")}
                    </button>
                </div>
                // the page must not scroll while the list does
                <div class="notifications__list" on:wheel=|ev: ev::WheelEvent| ev.stop_propagation()>
                    {data.with_value(|d| {
                        if d.visible().is_empty() {
                            view! { <div class="notifications__empty">"No notifications yet"</div> }
                                .into_any()
                        } else {
                            d.visible()
                                .iter()
                                .map(|n| {
                                    let body = view! {
                                        <p class="notifications__message">{n.message.clone()}</p>
                                        <span class="notifications__time">{format_created(&n.created_at)}</span>
                                    };
                                    view! {
                                        <a
                                            class="notifications__item"
                                            class:notifications__item--unread=!n.is_read
                                            href=n.link.clone().unwrap_or_else(|| "#".to_string())
                                        >
                                            {body}
                                        </a>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
