//! AJAX helpers for talking to the server that rendered the page.
//!
//! All requests are same-origin, carry `X-Requested-With: XMLHttpRequest` so the
//! server answers with JSON instead of a redirect, and carry `X-CSRFToken` when
//! the page exposes one.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub const AJAX_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// CSRF token from `<meta name="csrf-token">`, or from the hidden
/// `csrfmiddlewaretoken` form field when the meta tag is absent.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let from_meta = document
        .query_selector("meta[name=\"csrf-token\"]")
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"));
    let from_field = || {
        document
            .query_selector("input[name=\"csrfmiddlewaretoken\"]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("value"))
    };
    non_empty(from_meta).or_else(|| non_empty(from_field()))
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

fn with_ajax_headers(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header(AJAX_HEADER.0, AJAX_HEADER.1);
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn ajax_get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = with_ajax_headers(Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn ajax_post_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = with_ajax_headers(Request::post(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_token() {
        assert_eq!(non_empty(Some("abc".into())), Some("abc".to_string()));
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error: 500");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
