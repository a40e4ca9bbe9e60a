use serde::{Deserialize, Serialize};

/// Artwork record as returned by `/api/fetch-artworks-by-category/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// ISO datetime
    pub created_at: String,
    pub user_id: i64,
    #[serde(default)]
    pub user_username: String,
    #[serde(default)]
    pub user_first_name: String,
    #[serde(default)]
    pub favorite_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Not every server build sends it; see [`ArtworkDto::favorited_or`]
    #[serde(default)]
    pub is_favorited: Option<bool>,
}

impl ArtworkDto {
    /// First name when the artist has one, username otherwise
    pub fn display_name(&self) -> &str {
        if self.user_first_name.trim().is_empty() {
            &self.user_username
        } else {
            &self.user_first_name
        }
    }

    /// The server's flag when present, otherwise what the page implies
    /// (every card on the favorites list is a favorite).
    pub fn favorited_or(&self, page_default: bool) -> bool {
        self.is_favorited.unwrap_or(page_default)
    }

    /// Empty strings from the server are treated as "no image"
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworksResponse {
    #[serde(default)]
    pub artworks: Vec<ArtworkDto>,
}

/// Response of `/toggle-favorite/<id>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggleResponse {
    pub favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "artworks": [{
                "id": 7,
                "title": "Nebula",
                "description": "Space study",
                "image_url": "/media/nebula.png",
                "created_at": "2024-03-15T14:02:26Z",
                "user_id": 3,
                "user_username": "mira",
                "user_first_name": "",
                "favorite_count": 4,
                "comment_count": 2,
                "categories": ["digital", "scifi"]
            }]
        }"#;
        let response: ArtworksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.artworks.len(), 1);

        let artwork = &response.artworks[0];
        assert_eq!(artwork.display_name(), "mira");
        assert_eq!(artwork.image(), Some("/media/nebula.png"));
        assert_eq!(artwork.categories, vec!["digital", "scifi"]);
        assert_eq!(artwork.is_favorited, None);
        assert!(!artwork.favorited_or(false));
        assert!(artwork.favorited_or(true));
    }

    #[test]
    fn test_explicit_flag_wins_over_page_default() {
        let json = r#"{"id": 1, "created_at": "2024-01-01T00:00:00Z", "user_id": 9, "is_favorited": false}"#;
        let artwork: ArtworkDto = serde_json::from_str(json).unwrap();
        assert!(!artwork.favorited_or(true));
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"artworks": [{
            "id": 1, "created_at": "2024-01-01T00:00:00Z", "user_id": 9,
            "image_url": "", "user_first_name": "Ana"
        }]}"#;
        let response: ArtworksResponse = serde_json::from_str(json).unwrap();
        let artwork = &response.artworks[0];
        assert_eq!(artwork.favorite_count, 0);
        assert_eq!(artwork.image(), None);
        assert_eq!(artwork.display_name(), "Ana");
        assert!(artwork.categories.is_empty());
    }

    #[test]
    fn test_missing_artworks_key_is_empty() {
        let response: ArtworksResponse = serde_json::from_str("{}").unwrap();
        assert!(response.artworks.is_empty());
    }

    #[test]
    fn test_parse_toggle_response() {
        let response: FavoriteToggleResponse =
            serde_json::from_str(r#"{"favorited": true}"#).unwrap();
        assert!(response.favorited);
    }
}
