//! Persisted Preferences
//!
//! The page-size preference, stored under a per-feed key.
//! Storage sits behind `PreferenceStore` so list state can be driven without a browser.

use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Key-value persistence for small string preferences
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Could not persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

/// Interpret a stored page size; anything outside the offered sizes falls back to the default
pub fn parse_page_size(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|size| PAGE_SIZE_OPTIONS.contains(size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

pub fn load_page_size(store: &impl PreferenceStore, key: &str) -> usize {
    parse_page_size(store.get(key).as_deref())
}

pub fn save_page_size(store: &impl PreferenceStore, key: &str, size: usize) {
    store.set(key, &size.to_string());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store used by list state tests
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size(Some("30")), 30);
        assert_eq!(parse_page_size(Some(" 50 ")), 50);
        assert_eq!(parse_page_size(Some("7")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("lots")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_saved_size_reads_back() {
        let store = MemoryStore::default();
        assert_eq!(load_page_size(&store, "writeups-pageSize"), DEFAULT_PAGE_SIZE);

        save_page_size(&store, "writeups-pageSize", 50);
        assert_eq!(load_page_size(&store, "writeups-pageSize"), 50);
        assert_eq!(load_page_size(&store, "research-pageSize"), DEFAULT_PAGE_SIZE);
    }
}
