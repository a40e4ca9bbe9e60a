use crate::config::UiConfig;
use crate::shared::icons::icon;
use leptos::html::Main;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Whether the scroll-to-top button should be shown at `scroll_top`
pub fn scroll_top_visible(scroll_top: i32, threshold_px: i32) -> bool {
    scroll_top > threshold_px
}

/// Main scrolling content area with the scroll-to-top button.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let threshold = use_context::<UiConfig>()
        .unwrap_or_default()
        .scroll_top_threshold_px;
    let main_ref = NodeRef::<Main>::new();
    let show_to_top = RwSignal::new(false);

    let on_scroll = move |_: leptos::ev::Event| {
        if let Some(el) = main_ref.get_untracked() {
            let visible = scroll_top_visible(el.scroll_top(), threshold);
            if visible != show_to_top.get_untracked() {
                show_to_top.set(visible);
            }
        }
    };

    let scroll_to_top = move |_: leptos::ev::MouseEvent| {
        let Some(el) = main_ref.get_untracked() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <main data-zone="center" id="mainContent" class="app-main" node_ref=main_ref on:scroll=on_scroll>
            {children()}
            <button
                type="button"
                id="scrollToTop"
                class="scroll-to-top"
                class:scroll-to-top--visible=move || show_to_top.get()
                title="Back to top"
                on:click=scroll_to_top
            >
                {icon("arrow-up")}
            </button>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_only_past_threshold() {
        assert!(!scroll_top_visible(0, 300));
        assert!(!scroll_top_visible(300, 300));
        assert!(scroll_top_visible(301, 300));
    }
}
