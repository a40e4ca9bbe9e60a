use crate::config::UiConfig;
use crate::dashboard::{Dashboard, PageMode};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    log::debug!("ui config: {:?}", config);

    provide_context(config);
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new(config.toast_fade_ms));

    let mode = PageMode::current();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <Dashboard mode=mode /> }.into_any()
        />
        <ToastHost />
    }
}
