//! Category filter: the toggle-button row and the checkbox dropdown.
//!
//! Both variants drive the same [`FilterSelection`] in the page view-model and
//! hand the resulting [`FilterOutcome`] back to it. The dropdown edits a
//! [`FilterDraft`] and touches the selection only on Apply or Clear.

use super::view_model::use_dashboard;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::category::ArtworkCategory;
use contracts::filter::{FilterDraft, FilterOutcome, FilterSelection, ALL_CATEGORY};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn FilterBar() -> impl IntoView {
    let vm = use_dashboard();

    let on_button = move |code: &'static str| {
        let mut outcome = None;
        vm.selection.update(|s| outcome = Some(s.toggle(code)));
        if let Some(outcome) = outcome {
            log::debug!("filter button '{}': {:?}", code, outcome);
            vm.handle_outcome(outcome);
        }
    };

    view! {
        <div class="category-filter">
            <div class="category-filter__buttons">
                <button
                    type="button"
                    class="category-filter__btn"
                    class:active=move || vm.selection.with(FilterSelection::is_all_active)
                    on:click=move |_| on_button(ALL_CATEGORY)
                >
                    "All"
                </button>
                {ArtworkCategory::all()
                    .into_iter()
                    .map(|category| {
                        let code = category.code();
                        view! {
                            <button
                                type="button"
                                class="category-filter__btn"
                                class:active=move || vm.selection.with(|s| s.is_selected(code))
                                data-category=code
                                on:click=move |_| on_button(code)
                            >
                                {category.display_name()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <CategoryDropdown />
        </div>
    }
}

/// Checkbox variant: changes stay in a draft until Apply.
#[component]
pub fn CategoryDropdown() -> impl IntoView {
    let vm = use_dashboard();
    let is_open = RwSignal::new(false);
    let draft = RwSignal::new(FilterDraft::default());
    let container = NodeRef::<Div>::new();

    let active_count = move || vm.selection.with(|s| s.state().len());

    let open_menu = move || {
        draft.set(vm.selection.with_untracked(FilterDraft::from_selection));
        is_open.set(true);
    };

    let outside_click = window_event_listener(ev::click, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(el) = container.get_untracked() else {
            return;
        };
        if !dom::event_within(&ev, &el) {
            // unapplied boxes are dropped with the menu
            is_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let finish = move |outcome: Option<FilterOutcome>| {
        is_open.set(false);
        if let Some(outcome) = outcome {
            log::debug!("filter dropdown: {:?}", outcome);
            vm.handle_outcome(outcome);
        }
    };

    let on_apply = move |_: ev::MouseEvent| {
        let pending = draft.get_untracked();
        let mut outcome = None;
        vm.selection.update(|s| outcome = Some(s.commit(pending)));
        finish(outcome);
    };

    let on_clear = move |_: ev::MouseEvent| {
        let mut outcome = None;
        vm.selection.update(|s| outcome = Some(s.clear()));
        finish(outcome);
    };

    view! {
        <div class="category-dropdown" node_ref=container>
            <button
                type="button"
                class="category-dropdown__toggle"
                on:click=move |_| {
                    if is_open.get_untracked() {
                        is_open.set(false);
                    } else {
                        open_menu();
                    }
                }
            >
                {icon("filter")}
                <span>"Categories"</span>
                {move || {
                    let count = active_count();
                    if count > 0 {
                        view! { <span class="badge badge--primary">{count}</span> }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
                {icon("chevron-down")}
            </button>

            <Show when=move || is_open.get()>
                <div class="category-dropdown__menu">
                    <div class="category-dropdown__list">
                        {ArtworkCategory::all()
                            .into_iter()
                            .map(|category| {
                                let code = category.code();
                                view! {
                                    <label class="category-dropdown__option">
                                        <input
                                            type="checkbox"
                                            value=code
                                            prop:checked=move || draft.with(|d| d.is_checked(code))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                draft.update(|d| d.set(code, checked));
                                            }
                                        />
                                        <span>{category.display_name()}</span>
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="category-dropdown__actions">
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Primary
                            on_click=on_apply
                        >
                            "Apply"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_clear
                        >
                            "Clear"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
