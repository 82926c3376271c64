//! Client-side filter/search engine. Filtering is stable (original order
//! preserved) and conjunctive: every active predicate must pass.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Event, EventCategory, ForumPost};

/// Maximum number of live-search suggestions shown under the search box.
const MAX_SUGGESTIONS: usize = 5;

/// The active predicate set. Empty/unset fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub search: String,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub category: Option<EventCategory>,
    pub location: String,
    pub topic: Option<String>,
}

impl FilterState {
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// What an entity must expose to be filterable. Posts match the text
/// predicate on both title and content; events on title only.
pub trait Filterable {
    fn title(&self) -> &str;

    fn content(&self) -> Option<&str> {
        None
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        None
    }

    fn category(&self) -> Option<EventCategory> {
        None
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String];
}

impl Filterable for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            (Some(start), None) => Some((start, start)),
            _ => None,
        }
    }

    fn category(&self) -> Option<EventCategory> {
        Some(self.category)
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn tags(&self) -> &[String] {
        &self.topics
    }
}

impl Filterable for ForumPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn content(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Apply the full predicate set, preserving relative order.
pub fn apply_filters<'a, T: Filterable>(items: &'a [T], filters: &FilterState) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_filters(*item, filters))
        .collect()
}

fn matches_filters<T: Filterable>(item: &T, filters: &FilterState) -> bool {
    matches_text(item, &filters.search)
        && matches_date_range(item, filters.date_start, filters.date_end)
        && matches_category(item, filters.category)
        && matches_location(item, &filters.location)
        && matches_topic(item, filters.topic.as_deref())
}

fn matches_text<T: Filterable>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    if item.title().to_lowercase().contains(&term) {
        return true;
    }
    item.content()
        .map(|content| content.to_lowercase().contains(&term))
        .unwrap_or(false)
}

/// Inclusive at both bounds: an event starting exactly on the range start
/// is retained. A set bound excludes entities without dates.
fn matches_date_range<T: Filterable>(
    item: &T,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let Some((item_start, item_end)) = item.date_range() else {
        return false;
    };
    if let Some(start) = start {
        if item_start < start {
            return false;
        }
    }
    if let Some(end) = end {
        if item_end > end {
            return false;
        }
    }
    true
}

fn matches_category<T: Filterable>(item: &T, category: Option<EventCategory>) -> bool {
    match category {
        Some(selected) => item.category() == Some(selected),
        None => true,
    }
}

/// Case-insensitive substring on the venue, for entities that have one.
fn matches_location<T: Filterable>(item: &T, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    item.location()
        .map(|venue| venue.to_lowercase().contains(&location.to_lowercase()))
        .unwrap_or(false)
}

fn matches_topic<T: Filterable>(item: &T, topic: Option<&str>) -> bool {
    match topic {
        Some(selected) => item.tags().iter().any(|tag| tag == selected),
        None => true,
    }
}

/// Live-search suggestions: title-only substring match, at most 5 results.
pub fn suggest<'a, T: Filterable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title().to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggestion-box state. Recomputed on every keystroke; an outside click
/// dismisses the list until the next keystroke.
#[derive(Debug, Clone, Default)]
pub struct LiveSearch {
    query: String,
    dismissed: bool,
}

impl LiveSearch {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.dismissed = false;
    }

    /// Pointer-down outside the search container.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn suggestions<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.dismissed {
            return Vec::new();
        }
        suggest(items, &self.query)
    }
}

/// The set of tags available for filtering posts: the union of all tags
/// across the loaded collection, duplicates collapsed.
pub fn tag_universe(posts: &[ForumPost]) -> BTreeSet<String> {
    posts
        .iter()
        .flat_map(|post| post.tags.iter().cloned())
        .collect()
}
