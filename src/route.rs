//! URL Routing
//!
//! Page number in the path (`/writeups/all/3/`), history state for
//! back/forward, and the `?tag=` query parameter.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::config::PAGE_PATH_MARKER;

/// State stored with each history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub page: usize,
}

/// Page number from the segment after `marker`; 1 when absent or unparseable
pub fn page_from_path(path: &str, marker: &str) -> usize {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    if !segments.any(|segment| segment == marker) {
        return 1;
    }
    segments
        .next()
        .and_then(|segment| segment.parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Path of `page` under `base`; page 1 is the base itself
pub fn path_for_page(base: &str, page: usize) -> String {
    if page > 1 {
        format!("{}{}/", base, page)
    } else {
        base.to_string()
    }
}

/// Value of `name` in a query string (leading `?` optional)
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            percent_decode_str(&value).decode_utf8_lossy().into_owned()
        })
        .filter(|value| !value.is_empty())
}

/// Link to the list of `base` filtered by `tag`
pub fn tag_link(base: &str, tag: &str) -> String {
    format!("{}?tag={}", base, utf8_percent_encode(tag, NON_ALPHANUMERIC))
}

/// Current page according to the browser location
pub fn current_page() -> usize {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| page_from_path(&path, PAGE_PATH_MARKER))
        .unwrap_or(1)
}

/// `?tag=` of the browser location, read once at load
pub fn initial_tag() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param(&search, "tag")
}

/// Push a history entry for `page` of the list rooted at `base`
pub fn push_page(base: &str, page: usize) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = serde_wasm_bindgen::to_value(&HistoryState { page }).unwrap_or(JsValue::NULL);
    if let Err(e) = history.push_state_with_url(&state, "", Some(&path_for_page(base, page))) {
        log::warn!("pushState failed: {:?}", e);
    }
}

/// Page restored by a popstate event: the entry's state, else the location path
pub fn page_from_history(state: JsValue) -> usize {
    serde_wasm_bindgen::from_value::<HistoryState>(state)
        .map(|s| s.page.max(1))
        .unwrap_or_else(|_| current_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(page_from_path("/writeups/all/3/", "all"), 3);
        assert_eq!(page_from_path("/writeups/all/", "all"), 1);
        assert_eq!(page_from_path("/writeups/all/abc/", "all"), 1);
        assert_eq!(page_from_path("/writeups/all/0/", "all"), 1);
        assert_eq!(page_from_path("/writeups/", "all"), 1);
        assert_eq!(page_from_path("//research//all//12", "all"), 12);
    }

    #[test]
    fn test_path_for_page() {
        assert_eq!(path_for_page("/writeups/all/", 1), "/writeups/all/");
        assert_eq!(path_for_page("/writeups/all/", 4), "/writeups/all/4/");
    }

    #[test]
    fn test_path_round_trip() {
        for page in 1..5 {
            assert_eq!(page_from_path(&path_for_page("/research/all/", page), "all"), page);
        }
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?tag=web", "tag"), Some("web".to_string()));
        assert_eq!(query_param("?page=2&tag=active%20directory", "tag"), Some("active directory".to_string()));
        assert_eq!(query_param("?tag=red+team", "tag"), Some("red team".to_string()));
        assert_eq!(query_param("?tag=", "tag"), None);
        assert_eq!(query_param("", "tag"), None);
        assert_eq!(query_param("?tags=web", "tag"), None);
    }

    #[test]
    fn test_tag_link_encodes() {
        assert_eq!(tag_link("/writeups/all/", "c++"), "/writeups/all/?tag=c%2B%2B");
        assert_eq!(query_param("?tag=c%2B%2B", "tag"), Some("c++".to_string()));
    }
}
