//! Site Configuration
//!
//! Static settings for each feed and site-wide UI constants.

use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size controls
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 30, 50];

/// Page size used when no valid preference is stored
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Items published within this many days get a NEW badge
pub const NEW_ITEM_DAYS: i64 = 14;

/// Scroll offset (px) after which the scroll-to-top button shows
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// How long copy-button feedback stays visible (ms)
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Number of items on the combined landing view
pub const COMBINED_FEATURED_COUNT: usize = 3;

/// Path segment preceding the page number, e.g. `/writeups/all/3/`
pub const PAGE_PATH_MARKER: &str = "all";

/// How dates are printed for a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// "January 5, 2024"
    Long,
    /// "Jan 5, 2024"
    Short,
}

/// Source type of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Research,
    Writeups,
}

/// Per-feed settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// JSON manifest location
    pub manifest_url: &'static str,
    /// Landing path of the feed section
    pub section_path: &'static str,
    /// Base path of the paginated list (page 1)
    pub list_path: &'static str,
    /// Local storage key of the page-size preference
    pub page_size_key: &'static str,
    /// Plural noun used in messages ("writeups")
    pub noun: &'static str,
    /// Badge text on the combined view
    pub badge: &'static str,
    /// CSS modifier class
    pub css_class: &'static str,
    /// Items on the featured view
    pub featured_count: usize,
    /// Date format in the compact list
    pub list_date_style: DateStyle,
}

const WRITEUPS: FeedConfig = FeedConfig {
    manifest_url: "/writeups/writeups.json",
    section_path: "/writeups/",
    list_path: "/writeups/all/",
    page_size_key: "writeups-pageSize",
    noun: "writeups",
    badge: "WRITEUP",
    css_class: "writeup",
    featured_count: 3,
    list_date_style: DateStyle::Long,
};

const RESEARCH: FeedConfig = FeedConfig {
    manifest_url: "/research/articles.json",
    section_path: "/research/",
    list_path: "/research/all/",
    page_size_key: "research-pageSize",
    noun: "articles",
    badge: "RESEARCH",
    css_class: "research",
    featured_count: 3,
    list_date_style: DateStyle::Short,
};

impl FeedKind {
    pub fn config(self) -> &'static FeedConfig {
        match self {
            FeedKind::Writeups => &WRITEUPS,
            FeedKind::Research => &RESEARCH,
        }
    }

    /// Parse the `data-feed` attribute value
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "writeups" | "writeup" => Some(FeedKind::Writeups),
            "research" => Some(FeedKind::Research),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_kind_from_attr() {
        assert_eq!(FeedKind::from_attr("Writeups"), Some(FeedKind::Writeups));
        assert_eq!(FeedKind::from_attr(" research "), Some(FeedKind::Research));
        assert_eq!(FeedKind::from_attr("blog"), None);
    }

    #[test]
    fn test_storage_keys_are_scoped_per_feed() {
        assert_ne!(FeedKind::Writeups.config().page_size_key, FeedKind::Research.config().page_size_key);
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }
}
