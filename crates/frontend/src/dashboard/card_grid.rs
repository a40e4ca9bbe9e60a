//! Artwork card grid inside the auto-scrolling scroller.
//!
//! Cards are replaced wholesale on every load. Their interactive elements carry
//! `data-action` / `data-artwork-id` and are handled by ONE click listener on
//! the scroller, so freshly rendered cards never need binding.

use super::carousel::AutoScrollDriver;
use super::view_model::{use_dashboard, ArtworkCard, DashboardVm, LoadState};
use crate::config::UiConfig;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::category::ArtworkCategory;
use contracts::endpoints::{artist_profile_url, toggle_favorite_url};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use thaw::Spinner;

pub const CARD_ACTION_SELECTOR: &str = "[data-action]";

/// What the scroller shows for a given load state
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Blank,
    Empty,
    Cards(Vec<ArtworkCard>),
    Error(String),
}

impl From<&LoadState> for GridContent {
    fn from(load: &LoadState) -> Self {
        match load {
            LoadState::Idle | LoadState::Loading => GridContent::Blank,
            LoadState::Loaded(cards) if cards.is_empty() => GridContent::Empty,
            LoadState::Loaded(cards) => GridContent::Cards(cards.clone()),
            LoadState::Failed(details) => GridContent::Error(details.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ToggleFavorite(i64),
    OpenComments(i64),
}

impl CardAction {
    /// Decodes the `data-action` / `data-artwork-id` pair of a clicked element
    pub fn resolve(action: Option<&str>, artwork_id: Option<&str>) -> Option<Self> {
        let id = artwork_id?.trim().parse::<i64>().ok()?;
        match action? {
            "favorite" => Some(CardAction::ToggleFavorite(id)),
            "comments" => Some(CardAction::OpenComments(id)),
            _ => None,
        }
    }

    pub fn dispatch(self, vm: &DashboardVm) {
        match self {
            CardAction::ToggleFavorite(id) => vm.toggle_favorite(id),
            CardAction::OpenComments(id) => vm.open_comments(id),
        }
    }
}

#[component]
pub fn CardGrid() -> impl IntoView {
    let vm = use_dashboard();
    let config = use_context::<UiConfig>().unwrap_or_default();
    let scroller = NodeRef::<Div>::new();
    let driver = AutoScrollDriver::new(config, scroller);

    // new content starts a fresh idle wait
    Effect::new(move |_| {
        vm.load.track();
        driver.reset();
    });

    let on_click = move |ev: ev::MouseEvent| {
        let Some(el) = dom::closest_from_event(&ev, CARD_ACTION_SELECTOR) else {
            return;
        };
        let action = CardAction::resolve(
            el.get_attribute("data-action").as_deref(),
            el.get_attribute("data-artwork-id").as_deref(),
        );
        if let Some(action) = action {
            ev.prevent_default();
            action.dispatch(&vm);
        }
    };

    let on_scroll = move |_: ev::Event| {
        if let Some(el) = scroller.get_untracked() {
            driver.on_scroll(el.scroll_left());
        }
    };

    view! {
        <div
            class="loading-indicator"
            class:hidden=move || !vm.load.with(|l| matches!(l, LoadState::Loading))
        >
            <Spinner />
        </div>
        <div
            node_ref=scroller
            id="recentUploadsScroller"
            class="recent-uploads"
            on:click=on_click
            on:pointerenter=move |_| driver.interact()
            on:pointermove=move |_| driver.interact()
            on:wheel=move |_| driver.interact()
            on:touchstart=move |_| driver.interact()
            on:scroll=on_scroll
        >
            {move || match vm.load.with(|l| GridContent::from(l)) {
                GridContent::Blank => view! { <></> }.into_any(),
                GridContent::Empty => empty_placeholder().into_any(),
                GridContent::Cards(cards) => cards
                    .into_iter()
                    .map(|card| artwork_card(vm, card))
                    .collect_view()
                    .into_any(),
                GridContent::Error(details) => error_placeholder(details).into_any(),
            }}
        </div>
    }
}

fn empty_placeholder() -> impl IntoView {
    view! {
        <div class="grid-placeholder">
            <p class="grid-placeholder__icon">"🎨"</p>
            <p>"No artworks found for the selected categories."</p>
            <p class="grid-placeholder__hint">
                "Try selecting different categories or upload your own artwork!"
            </p>
        </div>
    }
}

fn error_placeholder(details: String) -> impl IntoView {
    view! {
        <div class="grid-placeholder grid-placeholder--error">
            <p class="grid-placeholder__icon">"⚠️"</p>
            <p>"Error loading artworks. Please try again."</p>
            <p class="grid-placeholder__hint">"Details: " {details}</p>
        </div>
    }
}

fn artwork_card(vm: DashboardVm, card: ArtworkCard) -> impl IntoView {
    let id = card.id;
    let id_attr = id.to_string();
    let favorited = move || vm.favorites.with(|f| f.get(id).favorited);
    let favorite_count = move || vm.favorites.with(|f| f.get(id).count);
    let pending = move || vm.favorites.with(|f| f.is_pending(id));
    let removing = move || vm.removing.with(|r| r.contains(&id));

    let categories = (!card.categories.is_empty()).then(|| {
        view! {
            <div class="artwork-card__categories">
                {card
                    .categories
                    .iter()
                    .map(|code| view! { <span class="category-tag">{ArtworkCategory::label_for(code)}</span> })
                    .collect_view()}
            </div>
        }
    });

    let media = match card.image_url.clone() {
        Some(url) => view! {
            <img class="artwork-card__image" src=url alt=card.title.clone() loading="lazy" />
            <div class="artwork-card__overlay">
                <span>{card.title.clone()}</span>
            </div>
        }
        .into_any(),
        None => view! {
            <span class="artwork-card__placeholder">{icon("image")} "Image here"</span>
        }
        .into_any(),
    };

    view! {
        <article class="artwork-card" class:artwork-card--removing=removing>
            <div class="artwork-card__body">
                <div>
                    <h3 class="artwork-card__title">{card.title.clone()}</h3>
                    <p class="artwork-card__description">{card.description.clone()}</p>
                    {categories}
                </div>

                <div class="artwork-card__created" title=card.created_ago.clone()>
                    {icon("clock")}
                    <span>{card.created_text.clone()}</span>
                </div>

                <div class="artwork-card__actions">
                    <a
                        href=artist_profile_url(card.user_id)
                        class="artwork-card__action"
                        title=format!("Artist: {}", card.artist_name)
                    >
                        {icon("user")}
                    </a>
                    <a
                        href=toggle_favorite_url(id)
                        class="artwork-card__action toggle-favorite"
                        class:toggle-favorite--active=favorited
                        class:toggle-favorite--pending=pending
                        data-action="favorite"
                        data-artwork-id=id_attr.clone()
                        title=move || if favorited() { "Remove from favorites" } else { "Add to favorites" }
                    >
                        {icon("heart")}
                        <span class="artwork-card__count">{favorite_count}</span>
                    </a>
                    <button
                        type="button"
                        class="artwork-card__action open-comments"
                        data-action="comments"
                        data-artwork-id=id_attr
                        title="View comments"
                    >
                        {icon("message-circle")}
                        <span class="artwork-card__count">{card.comment_count}</span>
                    </button>
                </div>
            </div>

            <div class="artwork-card__media">{media}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::favorites::{FavoriteChange, FavoriteState, FavoriteStore};
    use crate::dashboard::view_model::project_cards;
    use crate::dashboard::PageMode;
    use contracts::artworks::ArtworksResponse;

    fn loaded(ids: &[i64]) -> LoadState {
        let json = format!(
            r#"{{"artworks": [{}]}}"#,
            ids.iter()
                .map(|id| format!(
                    r#"{{"id": {}, "created_at": "2024-03-15T09:00:00Z", "user_id": 1, "favorite_count": 2}}"#,
                    id
                ))
                .collect::<Vec<_>>()
                .join(",")
        );
        let response: ArtworksResponse = serde_json::from_str(&json).unwrap();
        LoadState::Loaded(project_cards(response, PageMode::Dashboard, chrono::Utc::now()))
    }

    #[test]
    fn test_grid_content_per_load_state() {
        assert_eq!(GridContent::from(&LoadState::Idle), GridContent::Blank);
        assert_eq!(GridContent::from(&LoadState::Loading), GridContent::Blank);
        assert_eq!(GridContent::from(&loaded(&[])), GridContent::Empty);
        assert_eq!(
            GridContent::from(&LoadState::Failed("HTTP 500".into())),
            GridContent::Error("HTTP 500".into())
        );

        let GridContent::Cards(cards) = GridContent::from(&loaded(&[3, 8, 9])) else {
            panic!("expected cards");
        };
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![3, 8, 9]);
    }

    #[test]
    fn test_click_after_two_swaps_toggles_once() {
        let mut store = FavoriteStore::default();

        // the same result set rendered twice in a row
        for _ in 0..2 {
            let GridContent::Cards(cards) = GridContent::from(&loaded(&[4, 5])) else {
                panic!("expected cards");
            };
            assert_eq!(cards.len(), 2);
            store.reset(cards.iter().map(|c| (c.id, c.favorite)));
        }

        // one delegated listener, so one resolved action per click
        let clicked = CardAction::resolve(Some("favorite"), Some("4"));
        assert_eq!(clicked, Some(CardAction::ToggleFavorite(4)));
        assert!(store.begin(4));
        assert!(!store.begin(4));
        assert_eq!(store.finish(4, true), FavoriteChange::Added);
        assert_eq!(store.get(4), FavoriteState::new(true, 3));
    }

    #[test]
    fn test_resolve_known_actions() {
        assert_eq!(
            CardAction::resolve(Some("favorite"), Some("12")),
            Some(CardAction::ToggleFavorite(12))
        );
        assert_eq!(
            CardAction::resolve(Some("comments"), Some(" 7 ")),
            Some(CardAction::OpenComments(7))
        );
    }

    #[test]
    fn test_resolve_rejects_incomplete_markup() {
        assert_eq!(CardAction::resolve(Some("favorite"), None), None);
        assert_eq!(CardAction::resolve(None, Some("3")), None);
        assert_eq!(CardAction::resolve(Some("favorite"), Some("abc")), None);
        assert_eq!(CardAction::resolve(Some("share"), Some("3")), None);
    }
}
