use serde::{Deserialize, Serialize};

/// Artwork categories known to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtworkCategory {
    Digital,
    Traditional,
    Illustration,
    Concept,
    Character,
    Landscape,
    Portrait,
    Abstract,
    Fantasy,
    SciFi,
    Anime,
    Photography,
    ThreeD,
    Pixel,
    Other,
}

impl ArtworkCategory {
    /// Wire identifier used in the `categories` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            ArtworkCategory::Digital => "digital",
            ArtworkCategory::Traditional => "traditional",
            ArtworkCategory::Illustration => "illustration",
            ArtworkCategory::Concept => "concept",
            ArtworkCategory::Character => "character",
            ArtworkCategory::Landscape => "landscape",
            ArtworkCategory::Portrait => "portrait",
            ArtworkCategory::Abstract => "abstract",
            ArtworkCategory::Fantasy => "fantasy",
            ArtworkCategory::SciFi => "scifi",
            ArtworkCategory::Anime => "anime",
            ArtworkCategory::Photography => "photography",
            ArtworkCategory::ThreeD => "3d",
            ArtworkCategory::Pixel => "pixel",
            ArtworkCategory::Other => "other",
        }
    }

    /// Label shown on filter buttons and card chips
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtworkCategory::Digital => "Digital Art",
            ArtworkCategory::Traditional => "Traditional Art",
            ArtworkCategory::Illustration => "Illustration",
            ArtworkCategory::Concept => "Concept Art",
            ArtworkCategory::Character => "Character Design",
            ArtworkCategory::Landscape => "Landscape",
            ArtworkCategory::Portrait => "Portrait",
            ArtworkCategory::Abstract => "Abstract",
            ArtworkCategory::Fantasy => "Fantasy",
            ArtworkCategory::SciFi => "Sci-Fi",
            ArtworkCategory::Anime => "Anime/Manga",
            ArtworkCategory::Photography => "Photography",
            ArtworkCategory::ThreeD => "3D Art",
            ArtworkCategory::Pixel => "Pixel Art",
            ArtworkCategory::Other => "Other",
        }
    }

    pub fn all() -> Vec<ArtworkCategory> {
        vec![
            ArtworkCategory::Digital,
            ArtworkCategory::Traditional,
            ArtworkCategory::Illustration,
            ArtworkCategory::Concept,
            ArtworkCategory::Character,
            ArtworkCategory::Landscape,
            ArtworkCategory::Portrait,
            ArtworkCategory::Abstract,
            ArtworkCategory::Fantasy,
            ArtworkCategory::SciFi,
            ArtworkCategory::Anime,
            ArtworkCategory::Photography,
            ArtworkCategory::ThreeD,
            ArtworkCategory::Pixel,
            ArtworkCategory::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }

    /// Label for a raw wire code; unknown codes are shown as-is
    pub fn label_for(code: &str) -> String {
        Self::from_code(code)
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for category in ArtworkCategory::all() {
            assert_eq!(ArtworkCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(ArtworkCategory::from_code("all"), None);
    }

    #[test]
    fn test_label_for_unknown_code() {
        assert_eq!(ArtworkCategory::label_for("3d"), "3D Art");
        assert_eq!(ArtworkCategory::label_for("sculpture"), "sculpture");
    }
}
