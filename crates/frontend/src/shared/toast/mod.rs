//! Toast notifications.
//!
//! `ToastService` is provided once by the app; `ToastHost` renders the stack and
//! runs the sweep timer that expires toasts.

mod queue;

pub use queue::{Toast, ToastKind, ToastQueue};

use crate::shared::icons::icon;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const SWEEP_INTERVAL_MS: u32 = 100;
/// Flash message markup of the server templates, old and new class names
const SERVER_MESSAGE_SELECTOR: &str = ".django-message, .server-message";

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new(fade_ms)),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> u64 {
        let message = message.into();
        log::debug!("toast [{:?}] {}", kind, message);
        let now = js_sys::Date::now();
        let mut id = 0;
        self.queue
            .update(|q| id = q.push(message, kind, duration_ms, now));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success, ToastKind::Success.default_duration_ms())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error, ToastKind::Error.default_duration_ms())
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info, ToastKind::Info.default_duration_ms())
    }

    pub fn dismiss(&self, id: u64) {
        let now = js_sys::Date::now();
        self.queue.update(|q| {
            q.dismiss(id, now);
        });
    }

    fn sweep(&self) {
        let now = js_sys::Date::now();
        if self.queue.with_untracked(|q| q.needs_sweep(now)) {
            self.queue.update(|q| q.sweep(now));
        }
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Turns server-rendered flash messages into toasts:
/// `<div class="django-message" data-type="success" hidden>Saved</div>`
fn adopt_server_messages(toasts: ToastService) {
    let Some(document) = crate::shared::dom::document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(SERVER_MESSAGE_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let kind = ToastKind::from_tag(&element.get_attribute("data-type").unwrap_or_default());
        let text = element.text_content().unwrap_or_default();
        if !text.trim().is_empty() {
            toasts.show(text.trim(), kind, kind.default_duration_ms());
        }
        element.remove();
    }
}

/// Row identity in the stack. Fading out must not remount the row.
fn toast_key(toast: &Toast) -> u64 {
    toast.id
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    adopt_server_messages(toasts);

    let sweeper = Interval::new(SWEEP_INTERVAL_MS, move || toasts.sweep());
    let sweeper = StoredValue::new_local(Some(sweeper));
    on_cleanup(move || {
        sweeper.update_value(|s| {
            s.take();
        })
    });

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.queue.get().entries().to_vec()
                key=toast_key
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    let leaving = move || toasts.queue.with(|q| q.is_leaving(id));
                    view! {
                        <div class=class class:toast--leaving=leaving role="status">
                            <p class="toast__message">{toast.message.clone()}</p>
                            <button
                                type="button"
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                            <div
                                class="toast__progress"
                                style=format!("animation-duration: {}ms;", toast.duration_ms)
                            ></div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_selector_covers_template_markup() {
        let classes: Vec<&str> = SERVER_MESSAGE_SELECTOR.split(',').map(str::trim).collect();
        assert!(classes.contains(&".django-message"));
        assert!(classes.contains(&".server-message"));
    }

    #[test]
    fn test_row_key_stable_while_leaving() {
        let mut queue = ToastQueue::new(400);
        let id = queue.push("Saved", ToastKind::Success, 4000, 0.0);
        let before = toast_key(&queue.entries()[0]);

        assert!(queue.dismiss(id, 100.0));
        let row = &queue.entries()[0];
        assert!(row.is_leaving());
        assert_eq!(toast_key(row), before);
    }
}
