//! Dashboard - Model (API functions)

use crate::shared::api_utils::{ajax_get_json, ajax_post_json, ApiError};
use contracts::artworks::{ArtworksResponse, FavoriteToggleResponse};
use contracts::endpoints::{artworks_url, toggle_favorite_url};
use contracts::filter::FilterState;

/// Artworks matching the filter; an empty filter returns everything
pub async fn fetch_artworks(state: &FilterState) -> Result<ArtworksResponse, ApiError> {
    ajax_get_json(&artworks_url(state)).await
}

/// Always POST; the same URL also works as a plain link when AJAX fails
pub async fn toggle_favorite(artwork_id: i64) -> Result<FavoriteToggleResponse, ApiError> {
    ajax_post_json(&toggle_favorite_url(artwork_id)).await
}
