//! Frontend Models
//!
//! Data structures matching the JSON feed manifests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FeedKind;
use crate::dates::parse_date;

/// One article/writeup record of a feed manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    /// ISO-8601 publication date
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Parsed publication date; `None` for missing or invalid dates
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date)
    }
}

/// An article tagged with the feed it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub kind: FeedKind,
    pub article: Article,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_article() {
        let json = r#"{"title": "Intro", "url": "/writeups/intro/"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Intro");
        assert!(article.date.is_none());
        assert!(article.tags.is_empty());
        assert!(article.published().is_none());
    }

    #[test]
    fn test_deserialize_full_article_ignores_unknown_fields() {
        let json = r#"{
            "title": "SSRF in the wild",
            "url": "/writeups/ssrf/",
            "date": "2024-03-01",
            "summary": "Server-side request forgery",
            "author": "sam",
            "profile_picture": "/img/sam.png",
            "tags": ["Web", "SSRF"],
            "layout": "post"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.tags, vec!["Web", "SSRF"]);
        assert_eq!(article.author.as_deref(), Some("sam"));
        assert!(article.published().is_some());
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let json = r#"{"url": "/x/"}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }
}
