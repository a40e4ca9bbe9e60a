//! Dashboard - View Model
//!
//! One `DashboardVm` per page. Every handler on the page goes through it, so
//! timers and in-flight state live in one place.

use super::comments_panel::PanelState;
use super::favorites::{FavoriteChange, FavoriteState, FavoriteStore};
use super::model;
use super::{PageMode, FAVORITES_ISLAND};
use crate::config::UiConfig;
use crate::shared::date_utils::{format_created, parse_utc, time_ago};
use crate::shared::dom;
use crate::shared::page_data::read_json_island;
use crate::shared::toast::ToastService;
use contracts::artworks::{ArtworkDto, ArtworksResponse};
use contracts::endpoints::{comments_url, toggle_favorite_url};
use contracts::filter::{with_categories_param, FilterOutcome, FilterSelection, FilterState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;

/// View projection of one server record
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_text: String,
    pub created_ago: Option<String>,
    pub user_id: i64,
    pub artist_name: String,
    pub favorite: FavoriteState,
    pub comment_count: u32,
    pub categories: Vec<String>,
}

impl ArtworkCard {
    pub fn from_dto(dto: ArtworkDto, mode: PageMode, now: chrono::DateTime<chrono::Utc>) -> Self {
        let favorited = dto.favorited_or(mode.favorited_default());
        Self {
            id: dto.id,
            created_text: format_created(&dto.created_at),
            created_ago: parse_utc(&dto.created_at).map(|then| time_ago(then, now)),
            artist_name: dto.display_name().to_string(),
            image_url: dto.image().map(str::to_string),
            favorite: FavoriteState::new(favorited, dto.favorite_count),
            user_id: dto.user_id,
            comment_count: dto.comment_count,
            title: dto.title,
            description: dto.description,
            categories: dto.categories,
        }
    }
}

pub fn project_cards(
    response: ArtworksResponse,
    mode: PageMode,
    now: chrono::DateTime<chrono::Utc>,
) -> Vec<ArtworkCard> {
    response
        .artworks
        .into_iter()
        .map(|dto| ArtworkCard::from_dto(dto, mode, now))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Before the first fetch is issued
    Idle,
    Loading,
    Loaded(Vec<ArtworkCard>),
    Failed(String),
}

impl LoadState {
    /// Drops a card, returns how many are left. `None` if nothing was loaded.
    pub fn remove_card(&mut self, id: i64) -> Option<usize> {
        match self {
            LoadState::Loaded(cards) => {
                cards.retain(|c| c.id != id);
                Some(cards.len())
            }
            _ => None,
        }
    }
}

/// Issues increasing request tickets; only the newest ticket may render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[derive(Clone, Copy)]
pub struct DashboardVm {
    pub mode: PageMode,
    pub selection: RwSignal<FilterSelection>,
    pub load: RwSignal<LoadState>,
    pub favorites: RwSignal<FavoriteStore>,
    /// Cards fading out on the favorites page
    pub removing: RwSignal<BTreeSet<i64>>,
    pub comments: RwSignal<PanelState>,
    seq: StoredValue<RequestSeq>,
    config: UiConfig,
    toasts: ToastService,
}

impl DashboardVm {
    pub fn new(mode: PageMode, config: UiConfig, toasts: ToastService) -> Self {
        let initial = FilterState::from_search(&dom::search());
        Self {
            mode,
            selection: RwSignal::new(FilterSelection::from_state(initial)),
            load: RwSignal::new(LoadState::Idle),
            favorites: RwSignal::new(FavoriteStore::default()),
            removing: RwSignal::new(BTreeSet::new()),
            comments: RwSignal::new(PanelState::default()),
            seq: StoredValue::new(RequestSeq::default()),
            config,
            toasts,
        }
    }

    /// First load. The favorites page renders the list embedded in the page.
    /// Elsewhere a filter carried over in the URL is restored, otherwise the
    /// unfiltered list is fetched.
    pub fn init(&self) {
        if self.mode == PageMode::Favorites {
            let response =
                read_json_island::<ArtworksResponse>(FAVORITES_ISLAND).unwrap_or_default();
            let cards = project_cards(response, self.mode, chrono::Utc::now());
            log::debug!("rendering {} favorites from the page", cards.len());
            self.show_cards(cards);
            return;
        }
        let state = self.selection.with_untracked(|s| s.state().clone());
        if !state.is_empty() {
            log::debug!("restoring filter from url: {:?}", state);
        }
        self.refresh(state);
    }

    pub fn handle_outcome(&self, outcome: FilterOutcome) {
        match outcome {
            FilterOutcome::Reload => {
                let search = contracts::filter::strip_categories_param(&dom::search());
                dom::navigate(&format!("{}{}", dom::pathname(), search));
            }
            FilterOutcome::Fetch(state) => self.refresh(state),
        }
    }

    pub fn refresh(&self, state: FilterState) {
        let mut ticket = 0;
        self.seq.update_value(|s| ticket = s.next());
        self.load.set(LoadState::Loading);

        let this = *self;
        spawn_local(async move {
            let result = model::fetch_artworks(&state).await;
            if !this.seq.with_value(|s| s.is_current(ticket)) {
                log::debug!("dropping stale artworks response #{}", ticket);
                return;
            }
            match result {
                Ok(response) => {
                    let cards = project_cards(response, this.mode, chrono::Utc::now());
                    log::debug!("rendering {} artworks for {:?}", cards.len(), state);
                    this.show_cards(cards);
                    dom::replace_search(&with_categories_param(&dom::search(), &state));
                }
                Err(e) => {
                    log::error!("Error loading artworks by category: {}", e);
                    this.load.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    }

    fn show_cards(&self, cards: Vec<ArtworkCard>) {
        self.favorites
            .update(|f| f.reset(cards.iter().map(|c| (c.id, c.favorite))));
        self.removing.set(BTreeSet::new());
        self.load.set(LoadState::Loaded(cards));
    }

    pub fn open_comments(&self, artwork_id: i64) {
        self.comments.update(|p| p.open_with(comments_url(artwork_id)));
        dom::set_body_scroll_locked(true);
    }

    pub fn toggle_favorite(&self, artwork_id: i64) {
        let mut started = false;
        self.favorites.update(|f| started = f.begin(artwork_id));
        if !started {
            log::debug!("favorite toggle for #{} already in flight", artwork_id);
            return;
        }

        let this = *self;
        spawn_local(async move {
            match model::toggle_favorite(artwork_id).await {
                Ok(response) => {
                    let mut change = FavoriteChange::Unchanged;
                    this.favorites
                        .update(|f| change = f.finish(artwork_id, response.favorited));
                    if response.favorited {
                        this.toasts.success("Added to favorites!");
                    } else {
                        this.toasts.info("Removed from favorites");
                    }
                    if change == FavoriteChange::Removed && this.mode == PageMode::Favorites {
                        this.remove_card_animated(artwork_id).await;
                    }
                }
                Err(e) => {
                    log::error!("Error toggling favorite: {}", e);
                    this.favorites.update(|f| f.fail(artwork_id));
                    this.toasts.error("Failed to update favorite. Please try again.");
                    TimeoutFuture::new(this.config.favorite_fallback_ms).await;
                    dom::navigate(&toggle_favorite_url(artwork_id));
                }
            }
        });
    }

    async fn remove_card_animated(&self, artwork_id: i64) {
        self.removing.update(|r| {
            r.insert(artwork_id);
        });
        TimeoutFuture::new(self.config.card_removal_ms).await;

        let mut remaining = None;
        self.load.update(|l| remaining = l.remove_card(artwork_id));
        self.removing.update(|r| {
            r.remove(&artwork_id);
        });
        if remaining == Some(0) {
            dom::reload();
        }
    }
}

pub fn use_dashboard() -> DashboardVm {
    use_context::<DashboardVm>().expect("DashboardVm not provided in context")
}
