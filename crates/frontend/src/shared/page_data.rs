//! JSON islands embedded by the server templates.

use serde::de::DeserializeOwned;

/// Parses `<script type="application/json" id="{id}">` into `T`.
///
/// A missing island is normal (not every page carries every island); a
/// malformed one is logged and ignored.
pub fn read_json_island<T: DeserializeOwned>(id: &str) -> Option<T> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    parse_island(id, &text)
}

fn parse_island<T: DeserializeOwned>(id: &str, text: &str) -> Option<T> {
    match serde_json::from_str::<T>(text.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed #{}: {}", id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_island_trims_whitespace() {
        let parsed: Option<HashMap<String, u32>> = parse_island("x", "\n  {\"a\": 1}\n");
        assert_eq!(parsed.and_then(|m| m.get("a").copied()), Some(1));
    }

    #[test]
    fn test_parse_island_malformed_is_none() {
        let parsed: Option<HashMap<String, u32>> = parse_island("x", "{");
        assert!(parsed.is_none());
    }
}
