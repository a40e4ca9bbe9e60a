//! Artwork dashboard page: category filter, card grid, favorites and the
//! comments panel.

pub mod card_grid;
pub mod carousel;
pub mod comments_panel;
pub mod favorites;
pub mod filter_bar;
pub mod model;
pub mod view;
pub mod view_model;

pub use view::Dashboard;

/// Server-rendered list of the user's favorites, embedded in the favorites page
pub const FAVORITES_ISLAND: &str = "favorites-data";

/// Which page the dashboard runs on. On the favorites page an unfavorited
/// card is removed from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    #[default]
    Dashboard,
    Favorites,
}

impl PageMode {
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname.contains("favorites") {
            PageMode::Favorites
        } else {
            PageMode::Dashboard
        }
    }

    pub fn current() -> Self {
        Self::from_pathname(&crate::shared::dom::pathname())
    }

    /// Favorite flag assumed for records that do not carry one
    pub fn favorited_default(self) -> bool {
        self == PageMode::Favorites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_pathname() {
        assert_eq!(PageMode::from_pathname("/dashboard/"), PageMode::Dashboard);
        assert_eq!(PageMode::from_pathname("/"), PageMode::Dashboard);
        assert_eq!(PageMode::from_pathname("/favorites/"), PageMode::Favorites);
        assert_eq!(PageMode::from_pathname("/artists/3/favorites"), PageMode::Favorites);
    }

    #[test]
    fn test_only_favorites_page_assumes_favorited() {
        assert!(PageMode::Favorites.favorited_default());
        assert!(!PageMode::Dashboard.favorited_default());
    }
}
