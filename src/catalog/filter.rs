//! Filter state and the conjunctive filter engine.
//!
//! The engine is a pure function of a collection and a [`FilterState`]
//! value: every active dimension must match (logical AND), matching is
//! case-insensitive, and source order is preserved unless a sort is
//! requested. The UI layer owns one `FilterState` per section and feeds it
//! through on every interaction.

use chrono::{DateTime, Utc};

/// Sentinel category meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "all";

/// A record the filter engine can evaluate.
///
/// Each catalog section's model implements this to expose its filterable
/// dimensions; sections without a dimension return `None`/empty and that
/// dimension then matches nothing when constrained.
pub trait CatalogEntry {
    /// Primary category slug, if the entry has one.
    fn category(&self) -> Option<&str>;

    /// Tag set for the tag dimension (taste tags or topic tags).
    fn tags(&self) -> &[String];

    /// Type slug for the type dimension, independent of category.
    fn kind(&self) -> Option<&str>;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Date used by the sort comparator, if the entry is dated.
    fn sort_date(&self) -> Option<DateTime<Utc>>;
}

impl<T: CatalogEntry> CatalogEntry for &T {
    fn category(&self) -> Option<&str> {
        (*self).category()
    }

    fn tags(&self) -> &[String] {
        (*self).tags()
    }

    fn kind(&self) -> Option<&str> {
        (*self).kind()
    }

    fn search_fields(&self) -> Vec<&str> {
        (*self).search_fields()
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        (*self).sort_date()
    }
}

/// Sort order over an entry's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first.
    Newest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            other => Err(format!("unknown sort order '{other}' (expected newest or oldest)")),
        }
    }
}

/// Current filter selection for one catalog section.
///
/// At most one tag and one type can be active at a time; selecting the
/// already-active value clears it, selecting a different one replaces it.
/// The category dimension uses the `"all"` sentinel instead of an Option so
/// it round-trips directly from UI controls and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Selected category slug, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Selected tag, if any.
    pub tag: Option<String>,
    /// Selected type, if any.
    pub kind: Option<String>,
    /// Free-text query; empty means unconstrained.
    pub query: String,
    /// Requested sort, if any; `None` keeps source order.
    pub sort: Option<SortOrder>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            tag: None,
            kind: None,
            query: String::new(),
            sort: None,
        }
    }
}

impl FilterState {
    /// Creates the default (unconstrained) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category selection.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Toggles the tag selection: re-selecting the active tag clears it,
    /// any other tag replaces it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.tag.as_deref() == Some(tag) {
            self.tag = None;
        } else {
            self.tag = Some(tag.to_string());
        }
    }

    /// Toggles the type selection with the same semantics as [`Self::toggle_tag`].
    pub fn toggle_kind(&mut self, kind: &str) {
        if self.kind.as_deref() == Some(kind) {
            self.kind = None;
        } else {
            self.kind = Some(kind.to_string());
        }
    }

    /// Returns true when no dimension constrains the collection.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.category.eq_ignore_ascii_case(ALL_CATEGORIES)
            && self.tag.is_none()
            && self.kind.is_none()
            && self.query.is_empty()
    }

    /// Resets every dimension, keeping the sort.
    pub fn clear(&mut self) {
        let sort = self.sort;
        *self = Self::default();
        self.sort = sort;
    }
}

/// Applies `state` to `items`, returning references to the matching
/// entries.
///
/// Relative source order is preserved; when `state.sort` is set the result
/// is stably sorted by entry date, with undated or unparsable dates pinned
/// to the UNIX epoch (last under newest-first, first under oldest-first).
pub fn filter<'a, T: CatalogEntry>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let mut visible: Vec<&T> = items.iter().filter(|item| matches(*item, state)).collect();

    if let Some(order) = state.sort {
        visible.sort_by_key(|item| {
            let date = item.sort_date().unwrap_or(DateTime::UNIX_EPOCH);
            match order {
                SortOrder::Newest => std::cmp::Reverse(date.timestamp()),
                SortOrder::Oldest => std::cmp::Reverse(-date.timestamp()),
            }
        });
    }

    visible
}

/// Like [`filter`], but returns indices into `items` instead of
/// references. The UI keeps its visible set in this form so selection can
/// map back to the source collection.
pub fn filter_indices<T: CatalogEntry>(items: &[T], state: &FilterState) -> Vec<usize> {
    let mut visible: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item, state))
        .map(|(i, _)| i)
        .collect();

    if let Some(order) = state.sort {
        visible.sort_by_key(|&i| {
            let date = items[i].sort_date().unwrap_or(DateTime::UNIX_EPOCH);
            match order {
                SortOrder::Newest => std::cmp::Reverse(date.timestamp()),
                SortOrder::Oldest => std::cmp::Reverse(-date.timestamp()),
            }
        });
    }

    visible
}

/// Distinct category slugs present in `items`, sorted, original casing
/// kept from the first occurrence.
#[must_use]
pub fn distinct_categories<T: CatalogEntry>(items: &[T]) -> Vec<String> {
    distinct(items.iter().filter_map(CatalogEntry::category))
}

/// Distinct tag slugs present in `items`, sorted.
#[must_use]
pub fn distinct_tags<T: CatalogEntry>(items: &[T]) -> Vec<String> {
    distinct(items.iter().flat_map(|i| i.tags().iter().map(String::as_str)))
}

/// Distinct type slugs present in `items`, sorted.
#[must_use]
pub fn distinct_kinds<T: CatalogEntry>(items: &[T]) -> Vec<String> {
    distinct(items.iter().filter_map(CatalogEntry::kind))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(value)) {
            seen.push(value.to_string());
        }
    }
    seen.sort();
    seen
}

/// Conjunctive predicate over all active dimensions.
#[must_use]
pub fn matches<T: CatalogEntry>(item: &T, state: &FilterState) -> bool {
    matches_category(item, &state.category)
        && matches_tag(item, state.tag.as_deref())
        && matches_kind(item, state.kind.as_deref())
        && matches_query(item, &state.query)
}

fn matches_category<T: CatalogEntry>(item: &T, category: &str) -> bool {
    if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return true;
    }
    item.category()
        .is_some_and(|c| c.eq_ignore_ascii_case(category))
}

fn matches_tag<T: CatalogEntry>(item: &T, tag: Option<&str>) -> bool {
    match tag {
        None => true,
        Some(tag) => item.tags().iter().any(|t| t.eq_ignore_ascii_case(tag)),
    }
}

fn matches_kind<T: CatalogEntry>(item: &T, kind: Option<&str>) -> bool {
    match kind {
        None => true,
        Some(kind) => item.kind().is_some_and(|k| k.eq_ignore_ascii_case(kind)),
    }
}

fn matches_query<T: CatalogEntry>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: String,
        category: Option<String>,
        tags: Vec<String>,
        kind: Option<String>,
        date: Option<DateTime<Utc>>,
    }

    impl Entry {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                category: None,
                tags: Vec::new(),
                kind: None,
                date: None,
            }
        }

        fn category(mut self, c: &str) -> Self {
            self.category = Some(c.to_string());
            self
        }

        fn tag(mut self, t: &str) -> Self {
            self.tags.push(t.to_string());
            self
        }

        fn kind(mut self, k: &str) -> Self {
            self.kind = Some(k.to_string());
            self
        }

        fn date(mut self, raw: &str) -> Self {
            self.date = crate::models::parse_date(raw);
            self
        }
    }

    impl CatalogEntry for Entry {
        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn kind(&self) -> Option<&str> {
            self.kind.as_deref()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.name]
        }

        fn sort_date(&self) -> Option<DateTime<Utc>> {
            self.date
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new("Cyber Suit").category("avatar").tag("cyber").kind("costume"),
            Entry::new("Wa Dress").category("costume").tag("wa-modern"),
            Entry::new("Neon Visor").category("avatar").tag("cyber").kind("accessory"),
        ]
    }

    fn names(visible: &[&Entry]) -> Vec<String> {
        visible.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn test_default_state_matches_everything() {
        let items = sample();
        let visible = filter(&items, &FilterState::default());
        assert_eq!(visible.len(), items.len());
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let items = sample();
        let mut state = FilterState::default();
        state.set_category("avatar");

        let visible = filter(&items, &state);
        assert_eq!(names(&visible), vec!["Cyber Suit", "Neon Visor"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        let mut state = FilterState::default();
        state.toggle_tag("cyber");

        let once = filter(&items, &state);
        let twice = filter(&once, &state);

        let once_names: Vec<&str> = once.iter().map(|e| e.name.as_str()).collect();
        let twice_names: Vec<&str> = twice.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(once_names, twice_names);
    }

    #[test]
    fn test_tag_toggle_law() {
        let mut state = FilterState::default();
        state.toggle_tag("cyber");
        assert_eq!(state.tag.as_deref(), Some("cyber"));
        state.toggle_tag("cyber");
        assert_eq!(state.tag, None);
    }

    #[test]
    fn test_tag_replaces_previous_selection() {
        let mut state = FilterState::default();
        state.toggle_tag("cyber");
        state.toggle_tag("gothic");
        assert_eq!(state.tag.as_deref(), Some("gothic"));
    }

    #[test]
    fn test_conjunctive_composition() {
        let items = sample();

        let mut combined = FilterState::default();
        combined.set_category("avatar");
        combined.toggle_tag("cyber");

        let mut category_only = FilterState::default();
        category_only.set_category("avatar");

        let mut tag_only = FilterState::default();
        tag_only.toggle_tag("cyber");

        let direct = names(&filter(&items, &combined));
        let staged: Vec<String> = filter(&items, &category_only)
            .into_iter()
            .filter(|i| matches(*i, &tag_only))
            .map(|i| i.name.clone())
            .collect();

        assert_eq!(direct, staged);
    }

    #[test]
    fn test_kind_is_independent_of_tag() {
        let items = sample();
        let mut state = FilterState::default();
        state.toggle_tag("cyber");
        state.toggle_kind("accessory");

        assert_eq!(names(&filter(&items, &state)), vec!["Neon Visor"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = sample();
        let mut state = FilterState::default();
        state.query = "WA DRESS".to_string();

        assert_eq!(names(&filter(&items, &state)), vec!["Wa Dress"]);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let items = vec![Entry::new("Pancake House").category("CHILL")];
        let mut state = FilterState::default();
        state.set_category("chill");

        assert_eq!(filter(&items, &state).len(), 1);
    }

    #[test]
    fn test_zero_matches_is_empty_not_error() {
        let items = sample();
        let mut state = FilterState::default();
        state.query = "does-not-exist".to_string();

        assert!(filter(&items, &state).is_empty());
    }

    #[test]
    fn test_sort_newest_puts_unparsable_dates_last() {
        let items = vec![
            Entry::new("old").date("2020-01-01"),
            Entry::new("undated"),
            Entry::new("new").date("2025-01-01"),
        ];
        let mut state = FilterState::default();
        state.sort = Some(SortOrder::Newest);

        // Unparsable/missing dates pin to the epoch, sorting last.
        assert_eq!(names(&filter(&items, &state)), vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_sort_oldest_puts_unparsable_dates_first() {
        let items = vec![
            Entry::new("new").date("2025-01-01"),
            Entry::new("undated"),
            Entry::new("old").date("2020-01-01"),
        ];
        let mut state = FilterState::default();
        state.sort = Some(SortOrder::Oldest);

        assert_eq!(names(&filter(&items, &state)), vec!["undated", "old", "new"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let items = vec![
            Entry::new("first").date("2024-05-05"),
            Entry::new("second").date("2024-05-05"),
        ];
        let mut state = FilterState::default();
        state.sort = Some(SortOrder::Newest);

        assert_eq!(names(&filter(&items, &state)), vec!["first", "second"]);
    }

    #[test]
    fn test_filter_indices_agrees_with_filter() {
        let items = sample();
        let mut state = FilterState::default();
        state.set_category("avatar");

        let by_ref = names(&filter(&items, &state));
        let by_index: Vec<String> = filter_indices(&items, &state)
            .into_iter()
            .map(|i| items[i].name.clone())
            .collect();
        assert_eq!(by_ref, by_index);
    }

    #[test]
    fn test_clear_keeps_sort() {
        let mut state = FilterState::default();
        state.set_category("avatar");
        state.toggle_tag("cyber");
        state.sort = Some(SortOrder::Oldest);

        state.clear();
        assert!(state.is_unconstrained());
        assert_eq!(state.sort, Some(SortOrder::Oldest));
    }
}
