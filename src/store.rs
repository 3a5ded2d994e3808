//! List View State
//!
//! One `ListState` per mounted list view, held in a reactive_stores Store
//! and shared with the view's child components through context.

use leptos::prelude::*;
use leptos_paginator::{page, PageState};
use reactive_stores::Store;

use crate::config::{FeedKind, DEFAULT_PAGE_SIZE};
use crate::filter::{filter_by_tag, search, sort_newest_first, ALL_TAG};
use crate::models::Article;
use crate::prefs::{save_page_size, PreferenceStore};

/// State of a paginated, filterable article list
#[derive(Clone, Debug, Store)]
pub struct ListState {
    pub feed: FeedKind,
    /// Every article of the feed, newest first
    pub articles: Vec<Article>,
    /// Active tag filter (`"all"` for none)
    pub tag: String,
    /// Active search term
    pub query: String,
    pub current_page: usize,
    pub page_size: usize,
}

impl ListState {
    pub fn new(feed: FeedKind, page_size: usize, current_page: usize) -> Self {
        Self {
            feed,
            articles: Vec::new(),
            tag: ALL_TAG.to_string(),
            query: String::new(),
            current_page: current_page.max(1),
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    /// Articles passing both the tag filter and the search
    pub fn visible(&self) -> Vec<Article> {
        search(&filter_by_tag(&self.articles, &self.tag), &self.query)
    }

    pub fn page_state(&self) -> PageState {
        PageState::new(self.current_page, self.page_size, self.visible().len())
    }

    /// Page bookkeeping and the current page's articles from one filter pass
    fn current_window(&self) -> (PageState, Vec<Article>) {
        let visible = self.visible();
        let state = PageState::new(self.current_page, self.page_size, visible.len());
        let articles = page(&visible, state.current_page, state.page_size).to_vec();
        (state, articles)
    }

    /// Articles on the current page
    pub fn page_articles(&self) -> Vec<Article> {
        self.current_window().1
    }

    /// Articles on the current page with their position in the filtered list.
    /// Positions are unique even when urls repeat.
    pub fn page_rows(&self) -> Vec<(usize, Article)> {
        let (state, articles) = self.current_window();
        let offset = state.first_item().saturating_sub(1);
        articles
            .into_iter()
            .enumerate()
            .map(|(i, article)| (offset + i, article))
            .collect()
    }

    pub fn is_filtered(&self) -> bool {
        !crate::filter::is_all_tag(&self.tag) || !self.query.trim().is_empty()
    }

    /// Replace the collection; keeps the requested page if it still exists
    pub fn set_articles(&mut self, mut articles: Vec<Article>) {
        sort_newest_first(&mut articles);
        self.articles = articles;
        self.clamp_page();
    }

    pub fn set_tag(&mut self, tag: &str) {
        self.tag = tag.trim().to_string();
        self.current_page = 1;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.tag = ALL_TAG.to_string();
        self.query.clear();
        self.current_page = 1;
    }

    /// Change the page size, go back to page 1 and persist the choice
    pub fn set_page_size(&mut self, size: usize, prefs: &impl PreferenceStore) {
        self.page_size = size.max(1);
        self.current_page = 1;
        save_page_size(prefs, self.feed.config().page_size_key, self.page_size);
    }

    /// Move to `page`, clamped to the existing pages. Returns the page shown.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page;
        self.clamp_page();
        self.current_page
    }

    fn clamp_page(&mut self) {
        self.current_page = self.page_state().current_page;
    }
}

pub type ListStore = Store<ListState>;

/// Get the list store of the enclosing list view
pub fn use_list_store() -> ListStore {
    expect_context::<ListStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::tests::MemoryStore;
    use crate::prefs::load_page_size;

    fn article(n: usize, tags: &[&str]) -> Article {
        Article {
            title: format!("Post {}", n),
            url: format!("/writeups/post-{}/", n),
            date: Some(format!("2024-01-{:02}", n)),
            summary: None,
            description: None,
            author: None,
            profile_picture: None,
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn state_with(count: usize) -> ListState {
        let mut state = ListState::new(FeedKind::Writeups, 10, 1);
        let tags: [&[&str]; 2] = [&["web"], &["pwn"]];
        state.set_articles((1..=count).map(|n| article(n, tags[n % 2])).collect());
        state
    }

    #[test]
    fn test_articles_are_sorted_newest_first() {
        let state = state_with(3);
        let titles: Vec<_> = state.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Post 3", "Post 2", "Post 1"]);
    }

    #[test]
    fn test_requested_page_is_clamped_on_load() {
        let mut state = ListState::new(FeedKind::Writeups, 10, 9);
        state.set_articles((1..=25).map(|n| article(n, &[])).collect());
        assert_eq!(state.current_page, 3);
        assert_eq!(state.page_articles().len(), 5);
    }

    #[test]
    fn test_page_articles() {
        let mut state = state_with(25);
        assert_eq!(state.page_state().total_pages(), 3);
        assert_eq!(state.page_articles().len(), 10);
        assert_eq!(state.page_articles()[0].title, "Post 25");

        assert_eq!(state.go_to_page(3), 3);
        assert_eq!(state.page_articles().len(), 5);
        assert_eq!(state.go_to_page(40), 3);
    }

    #[test]
    fn test_filters_reset_to_first_page() {
        let mut state = state_with(25);
        state.go_to_page(2);
        state.set_tag("WEB");
        assert_eq!(state.current_page, 1);
        assert_eq!(state.visible().len(), 12);
        assert!(state.is_filtered());

        state.go_to_page(2);
        state.set_query("post 1");
        assert_eq!(state.current_page, 1);
        // Posts 10, 12, 14, 16, 18 carry "web" and contain "post 1"
        assert_eq!(state.visible().len(), 5);

        state.clear_filters();
        assert_eq!(state.visible().len(), 25);
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_page_rows_are_positioned_when_urls_repeat() {
        let mut state = ListState::new(FeedKind::Writeups, 10, 1);
        let mut articles: Vec<Article> = (1..=12).map(|n| article(n, &[])).collect();
        articles[10].url = articles[11].url.clone();
        state.set_articles(articles);

        let first: Vec<usize> = state.page_rows().iter().map(|(pos, _)| *pos).collect();
        assert_eq!(first, (0..10).collect::<Vec<_>>());
        // Posts 12 and 11 share a url and both open page 1
        assert_eq!(state.page_rows()[0].1.url, state.page_rows()[1].1.url);

        state.go_to_page(2);
        let second: Vec<(usize, String)> =
            state.page_rows().into_iter().map(|(pos, a)| (pos, a.title)).collect();
        assert_eq!(second, vec![(10, "Post 2".to_string()), (11, "Post 1".to_string())]);
    }

    #[test]
    fn test_page_articles_match_page_state() {
        let mut state = state_with(25);
        state.set_tag("pwn");
        state.go_to_page(2);
        let page_state = state.page_state();
        assert_eq!(page_state.total_items, 13);
        assert_eq!(state.page_articles().len(), page_state.last_item() - page_state.first_item() + 1);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let mut state = state_with(5);
        state.set_query("no such post");
        assert!(state.visible().is_empty());
        assert_eq!(state.page_state().total_pages(), 0);
        assert!(state.page_state().controls().is_empty());
        assert!(state.page_articles().is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page_and_persists() {
        let prefs = MemoryStore::default();
        let mut state = state_with(60);
        state.go_to_page(4);

        state.set_page_size(30, &prefs);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_state().total_pages(), 2);

        // A fresh load reads the stored size back
        let key = FeedKind::Writeups.config().page_size_key;
        let reloaded = ListState::new(FeedKind::Writeups, load_page_size(&prefs, key), 1);
        assert_eq!(reloaded.page_size, 30);
    }
}
