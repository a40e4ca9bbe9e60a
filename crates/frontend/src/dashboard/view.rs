//! Dashboard - View

use super::card_grid::CardGrid;
use super::comments_panel::CommentsPanel;
use super::filter_bar::FilterBar;
use super::view_model::DashboardVm;
use super::PageMode;
use crate::config::UiConfig;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;

#[component]
pub fn Dashboard(mode: PageMode) -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let vm = DashboardVm::new(mode, config, use_toasts());
    provide_context(vm);

    vm.init();

    let heading = match mode {
        PageMode::Dashboard => "Recent uploads",
        PageMode::Favorites => "My favorites",
    };

    view! {
        <section class="dashboard">
            <div class="dashboard__header">
                <h2 class="dashboard__title">
                    {icon(if mode == PageMode::Favorites { "heart" } else { "image" })}
                    <span>{heading}</span>
                </h2>
                // the favorites list is server-rendered and not filterable
                {(mode == PageMode::Dashboard).then(|| view! { <FilterBar /> })}
            </div>
            <CardGrid />
            <CommentsPanel panel=vm.comments />
        </section>
    }
}
