//! Category filter state and its URL representation.
//!
//! The page URL's `categories` parameter is the only persisted form of the
//! filter: `?categories=digital,anime`. An empty filter means "show all" and is
//! represented by the parameter being absent.
//!
//! Query strings are read and written with `serde_qs`; only the comma join of
//! the categories value is done here.

use std::collections::{BTreeMap, BTreeSet};

pub const CATEGORIES_PARAM: &str = "categories";

/// Pseudo-category of the "All" control. Never stored in a [`FilterState`].
pub const ALL_CATEGORY: &str = "all";

/// Set of selected category identifiers. Empty means unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = Self::new();
        for code in codes {
            state.insert(code.as_ref());
        }
        state
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.categories.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Adds a category. Blank codes and the "all" pseudo-category are ignored.
    pub fn insert(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() || code == ALL_CATEGORY {
            return false;
        }
        self.categories.insert(code.to_string())
    }

    pub fn remove(&mut self, code: &str) -> bool {
        self.categories.remove(code.trim())
    }

    /// Flips membership, returns whether the category is selected afterwards
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.remove(code) {
            false
        } else {
            self.insert(code)
        }
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Value of the `categories` parameter for an API request, `None` when
    /// unfiltered.
    ///
    /// Items are percent-encoded individually and joined by a literal comma.
    pub fn to_query_value(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.categories
                .iter()
                .map(|c| urlencoding::encode(c).into_owned())
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Parses an already decoded `categories` value.
    pub fn from_query_value(value: &str) -> Self {
        Self::from_codes(value.split(','))
    }

    /// Extracts the filter from a `location.search` string.
    pub fn from_search(search: &str) -> Self {
        parse_query(search)
            .get(CATEGORIES_PARAM)
            .map(|value| Self::from_query_value(value))
            .unwrap_or_default()
    }

    fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(",")
    }
}

/// What the page has to do after a selection change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Navigate to the base URL without the `categories` parameter (full reload)
    Reload,
    /// Fetch artworks for this state and re-render the grid
    Fetch(FilterState),
}

/// Selection controller behind both filter UIs (toggle buttons and the
/// checkbox dropdown). "All" is mutually exclusive with every category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    state: FilterState,
    all_active: bool,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            state: FilterState::new(),
            all_active: true,
        }
    }
}

impl FilterSelection {
    pub fn from_state(state: FilterState) -> Self {
        let all_active = state.is_empty();
        Self { state, all_active }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_all_active(&self) -> bool {
        self.all_active
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.state.contains(code)
    }

    pub fn select_all(&mut self) -> FilterOutcome {
        self.state.clear();
        self.all_active = true;
        FilterOutcome::Reload
    }

    /// Button variant: every click triggers immediately.
    pub fn toggle(&mut self, code: &str) -> FilterOutcome {
        if code == ALL_CATEGORY {
            return self.select_all();
        }
        self.all_active = false;
        self.state.toggle(code);
        self.settle()
    }

    /// Checkbox variant: replaces the selection with the dropdown's draft.
    pub fn commit(&mut self, draft: FilterDraft) -> FilterOutcome {
        self.state = draft.state;
        self.all_active = false;
        self.settle()
    }

    pub fn clear(&mut self) -> FilterOutcome {
        self.select_all()
    }

    fn settle(&mut self) -> FilterOutcome {
        if self.state.is_empty() {
            self.all_active = true;
            FilterOutcome::Reload
        } else {
            FilterOutcome::Fetch(self.state.clone())
        }
    }
}

/// Checked boxes of the open dropdown. Lives apart from the committed
/// [`FilterSelection`] until Apply; closing the menu discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    state: FilterState,
}

impl FilterDraft {
    pub fn from_selection(selection: &FilterSelection) -> Self {
        Self {
            state: selection.state().clone(),
        }
    }

    pub fn is_checked(&self, code: &str) -> bool {
        self.state.contains(code)
    }

    pub fn set(&mut self, code: &str, checked: bool) {
        if checked {
            self.state.insert(code);
        } else {
            self.state.remove(code);
        }
    }
}

type QueryParams = BTreeMap<String, String>;

fn parse_query(search: &str) -> QueryParams {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

fn render_query(params: &QueryParams) -> String {
    if params.is_empty() {
        return String::new();
    }
    match serde_qs::to_string(params) {
        Ok(query) => format!("?{}", query),
        Err(_) => String::new(),
    }
}

/// `location.search` without the `categories` parameter; other parameters kept.
pub fn strip_categories_param(search: &str) -> String {
    let mut params = parse_query(search);
    params.remove(CATEGORIES_PARAM);
    render_query(&params)
}

/// `location.search` with the `categories` parameter replaced by `state`.
pub fn with_categories_param(search: &str, state: &FilterState) -> String {
    let mut params = parse_query(search);
    if state.is_empty() {
        params.remove(CATEGORIES_PARAM);
    } else {
        params.insert(CATEGORIES_PARAM.to_string(), state.joined());
    }
    render_query(&params)
}
