//! Server paths the client talks to. All are same-origin and relative.

use crate::filter::{FilterState, CATEGORIES_PARAM};

pub const ARTWORKS_BY_CATEGORY: &str = "/api/fetch-artworks-by-category/";

pub fn artworks_url(state: &FilterState) -> String {
    match state.to_query_value() {
        Some(value) => format!("{}?{}={}", ARTWORKS_BY_CATEGORY, CATEGORIES_PARAM, value),
        None => ARTWORKS_BY_CATEGORY.to_string(),
    }
}

/// Accepts both AJAX requests and plain navigation
pub fn toggle_favorite_url(artwork_id: i64) -> String {
    format!("/toggle-favorite/{}/", artwork_id)
}

/// Embeddable HTML page, loaded into the comments frame
pub fn comments_url(artwork_id: i64) -> String {
    format!("/artwork/{}/comments/", artwork_id)
}

pub fn artist_profile_url(user_id: i64) -> String {
    format!("/artist/{}/", user_id)
}
