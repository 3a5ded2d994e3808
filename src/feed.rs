//! Feed Loading
//!
//! HTTP GET of JSON manifests and markdown documents through `window.fetch`.
//! One request per view initialisation, no retry.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::FeedKind;
use crate::error::{FeedError, FeedResult};
use crate::filter::merge_feeds;
use crate::models::{Article, FeedEntry};

fn js_error(value: wasm_bindgen::JsValue) -> FeedError {
    FeedError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// A request that has been sent but not awaited yet
pub struct PendingFetch {
    url: String,
    response: JsFuture,
}

impl PendingFetch {
    /// Send a GET request for `url`
    pub fn start(url: &str) -> FeedResult<Self> {
        let window = web_sys::window().ok_or(FeedError::Unavailable)?;
        Ok(Self {
            url: url.to_string(),
            response: JsFuture::from(window.fetch_with_str(url)),
        })
    }

    /// Await the response body as text; non-2xx statuses are errors
    pub async fn text(self) -> FeedResult<String> {
        let value = self.response.await.map_err(js_error)?;
        let response: web_sys::Response = value.dyn_into().map_err(js_error)?;
        if !response.ok() {
            log::warn!("GET {} -> {}", self.url, response.status());
            return Err(FeedError::Status(response.status()));
        }
        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string().ok_or_else(|| FeedError::Network("response body is not text".to_string()))
    }

    /// Await the response as a manifest of articles
    pub async fn articles(self) -> FeedResult<Vec<Article>> {
        let url = self.url.clone();
        let body = self.text().await?;
        let articles = parse_manifest(&body)?;
        log::info!("Loaded {} items from {}", articles.len(), url);
        Ok(articles)
    }
}

/// Decode a manifest body
pub fn parse_manifest(body: &str) -> FeedResult<Vec<Article>> {
    Ok(serde_json::from_str(body)?)
}

pub async fn fetch_articles(url: &str) -> FeedResult<Vec<Article>> {
    PendingFetch::start(url)?.articles().await
}

pub async fn fetch_text(url: &str) -> FeedResult<String> {
    PendingFetch::start(url)?.text().await
}

/// A feed answering with an error status counts as empty
fn skip_missing(url: &str, result: FeedResult<Vec<Article>>) -> FeedResult<Vec<Article>> {
    match result {
        Err(FeedError::Status(status)) => {
            log::warn!("Skipping {} (status {})", url, status);
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Both manifests, requested together, merged newest first
pub async fn fetch_combined() -> FeedResult<Vec<FeedEntry>> {
    let research_url = FeedKind::Research.config().manifest_url;
    let writeups_url = FeedKind::Writeups.config().manifest_url;

    let research = PendingFetch::start(research_url)?;
    let writeups = PendingFetch::start(writeups_url)?;

    let research = skip_missing(research_url, research.articles().await)?;
    let writeups = skip_missing(writeups_url, writeups.articles().await)?;
    Ok(merge_feeds(research, writeups))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let body = r#"[
            {"title": "One", "url": "/one/", "date": "2024-01-01"},
            {"title": "Two", "url": "/two/", "tags": ["a"]}
        ]"#;
        let articles = parse_manifest(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].tags, vec!["a"]);
    }

    #[test]
    fn test_parse_manifest_rejects_non_array() {
        assert!(matches!(parse_manifest(r#"{"title": "x"}"#), Err(FeedError::Parse(_))));
        assert!(matches!(parse_manifest("<html>"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_skip_missing_only_swallows_status_errors() {
        let missing = skip_missing("/research/articles.json", Err(FeedError::Status(404)));
        assert!(missing.unwrap().is_empty());

        let offline = skip_missing("/research/articles.json", Err(FeedError::Network("offline".to_string())));
        assert!(matches!(offline, Err(FeedError::Network(_))));

        let bad_json = skip_missing("/writeups/writeups.json", parse_manifest("{"));
        assert!(matches!(bad_json, Err(FeedError::Parse(_))));
    }
}
