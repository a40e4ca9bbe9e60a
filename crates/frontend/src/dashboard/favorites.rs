//! Favorite toggle state per rendered card.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteState {
    pub favorited: bool,
    pub count: u32,
}

/// Direction of an applied server response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
    Unchanged,
}

impl FavoriteState {
    pub fn new(favorited: bool, count: u32) -> Self {
        Self { favorited, count }
    }

    /// Applies the answer of a toggle request. Every answer reports a flip
    /// the server just made, so it wins over whatever the card assumed.
    pub fn apply(&mut self, favorited: bool) -> FavoriteChange {
        self.favorited = favorited;
        if favorited {
            self.count += 1;
            FavoriteChange::Added
        } else {
            self.count = self.count.saturating_sub(1);
            FavoriteChange::Removed
        }
    }
}

/// Favorite state of every card on screen plus the toggles still in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteStore {
    states: HashMap<i64, FavoriteState>,
    in_flight: HashSet<i64>,
}

impl FavoriteStore {
    /// Replaces the store after a bulk render. Toggles still in flight stay
    /// marked so a click on the freshly rendered card cannot start a second one.
    pub fn reset<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = (i64, FavoriteState)>,
    {
        self.states = states.into_iter().collect();
    }

    pub fn get(&self, id: i64) -> FavoriteState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.in_flight.contains(&id)
    }

    /// Claims the toggle for `id`. Returns false while another toggle for the
    /// same artwork is still pending.
    pub fn begin(&mut self, id: i64) -> bool {
        self.in_flight.insert(id)
    }

    pub fn finish(&mut self, id: i64, favorited: bool) -> FavoriteChange {
        self.in_flight.remove(&id);
        match self.states.get_mut(&id) {
            Some(state) => state.apply(favorited),
            // card was re-rendered away while the request was running
            None => FavoriteChange::Unchanged,
        }
    }

    pub fn fail(&mut self, id: i64) {
        self.in_flight.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_flip_restores_counter() {
        let mut state = FavoriteState::new(false, 7);
        assert_eq!(state.apply(true), FavoriteChange::Added);
        assert_eq!(state.count, 8);
        assert_eq!(state.apply(false), FavoriteChange::Removed);
        assert_eq!(state, FavoriteState::new(false, 7));
    }

    #[test]
    fn test_answer_overrides_stale_flag() {
        // rendered without a flag, but the artwork was already a favorite
        let mut state = FavoriteState::new(false, 5);
        assert_eq!(state.apply(false), FavoriteChange::Removed);
        assert_eq!(state, FavoriteState::new(false, 4));
    }

    #[test]
    fn test_counter_never_underflows() {
        let mut state = FavoriteState::new(true, 0);
        state.apply(false);
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_two_render_cycles_single_click_flips_once() {
        let mut store = FavoriteStore::default();
        let cards = [(1, FavoriteState::new(false, 2)), (2, FavoriteState::new(true, 5))];

        // two consecutive bulk renders of the same result set
        store.reset(cards);
        store.reset(cards);

        // one click dispatched, possibly observed twice
        let started: Vec<bool> = (0..2).map(|_| store.begin(1)).collect();
        assert_eq!(started, vec![true, false]);

        assert_eq!(store.finish(1, true), FavoriteChange::Added);
        assert_eq!(store.get(1), FavoriteState::new(true, 3));
        assert!(!store.is_pending(1));

        // the next click is accepted again
        assert!(store.begin(1));
    }

    #[test]
    fn test_pending_survives_rerender() {
        let mut store = FavoriteStore::default();
        store.reset([(4, FavoriteState::new(false, 0))]);
        assert!(store.begin(4));
        store.reset([(4, FavoriteState::new(false, 0))]);
        assert!(store.is_pending(4));
        assert!(!store.begin(4));
    }

    #[test]
    fn test_finish_for_card_no_longer_rendered() {
        let mut store = FavoriteStore::default();
        store.reset([(9, FavoriteState::new(false, 1))]);
        assert!(store.begin(9));
        store.reset([]);
        assert_eq!(store.finish(9, true), FavoriteChange::Unchanged);
        assert!(!store.is_pending(9));
    }

    #[test]
    fn test_failure_releases_claim() {
        let mut store = FavoriteStore::default();
        assert!(store.begin(3));
        store.fail(3);
        assert!(store.begin(3));
    }
}
