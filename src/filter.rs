//! List Filtering
//!
//! Tag filter, free-text search, date ordering and feed merging.
//! All functions are pure and keep the relative order of their input.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::config::FeedKind;
use crate::models::{Article, FeedEntry};

/// Tag value meaning "no tag filter"
pub const ALL_TAG: &str = "all";

/// Whether `tag` selects every item
pub fn is_all_tag(tag: &str) -> bool {
    let tag = tag.trim();
    tag.is_empty() || tag.eq_ignore_ascii_case(ALL_TAG)
}

/// Items carrying `tag` (case-insensitive exact match)
pub fn filter_by_tag(items: &[Article], tag: &str) -> Vec<Article> {
    if is_all_tag(tag) {
        return items.to_vec();
    }
    let wanted = tag.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.tags.iter().any(|t| t.to_lowercase() == wanted))
        .cloned()
        .collect()
}

fn contains_term(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}

/// Whether any of title, summary, author or tags contains the lowercased `term`
fn matches_term(item: &Article, term: &str) -> bool {
    contains_term(Some(&item.title), term)
        || contains_term(item.summary.as_deref(), term)
        || contains_term(item.author.as_deref(), term)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// Case-insensitive substring search over title, summary, author and tags.
/// A blank term returns every item.
pub fn search(items: &[Article], term: &str) -> Vec<Article> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| matches_term(item, &term)).cloned().collect()
}

/// Stable sort, newest first. Invalid or missing dates go last.
pub fn sort_newest_first(items: &mut [Article]) {
    items.sort_by_cached_key(|item| Reverse(item.published()));
}

/// Tag every item with its feed, concatenate and sort newest first
pub fn merge_feeds(research: Vec<Article>, writeups: Vec<Article>) -> Vec<FeedEntry> {
    let tagged = |kind: FeedKind| move |article: Article| FeedEntry { kind, article };
    let mut merged: Vec<FeedEntry> = research
        .into_iter()
        .map(tagged(FeedKind::Research))
        .chain(writeups.into_iter().map(tagged(FeedKind::Writeups)))
        .collect();
    merged.sort_by_cached_key(|entry| Reverse(entry.article.published()));
    merged
}

/// `"all"` followed by every distinct lowercased tag, sorted
pub fn all_tags(items: &[Article]) -> Vec<String> {
    let tags: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.tags.iter())
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty() && tag != ALL_TAG)
        .collect();
    std::iter::once(ALL_TAG.to_string()).chain(tags).collect()
}

/// The `count` most recent items
pub fn featured(items: &[Article], count: usize) -> Vec<Article> {
    let mut sorted = items.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(count);
    sorted
}

/// Shorten `text` to `keep` characters plus `...` when it is longer than `limit`
pub fn truncate_summary(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}
