//! Site Frontend App
//!
//! Finds the mount points in the static page and attaches a view to each.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::components::{ArticleListView, CombinedFeed, FeaturedList, MarkdownArticle, ScrollToTop};
use crate::config::FeedKind;
use crate::enhance::{enhance_static_code_blocks, install_copy_handler};
use crate::error::MountError;

const MOUNT_SELECTOR: &str = "[data-view]";

/// What a `data-view` element asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountView {
    List(FeedKind),
    Featured(FeedKind),
    Combined,
    Markdown(String),
}

/// Interpret the `data-view`, `data-feed` and `data-src` attributes
pub fn parse_mount(view: &str, feed: Option<&str>, src: Option<&str>) -> Result<MountView, MountError> {
    let feed_kind = |name: &'static str| {
        feed.and_then(FeedKind::from_attr).ok_or(MountError::MissingFeed(name))
    };
    match view.trim().to_ascii_lowercase().as_str() {
        "list" => Ok(MountView::List(feed_kind("list")?)),
        "featured" => Ok(MountView::Featured(feed_kind("featured")?)),
        "combined" => Ok(MountView::Combined),
        "markdown" => src
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| MountView::Markdown(s.to_string()))
            .ok_or(MountError::MissingSource),
        other => Err(MountError::UnknownView(other.to_string())),
    }
}

fn mount_view(element: HtmlElement, view: MountView) {
    // Replace the no-script fallback
    element.set_inner_html("");
    match view {
        MountView::List(kind) => mount_to(element, move || view! { <ArticleListView kind=kind /> }).forget(),
        MountView::Featured(kind) => mount_to(element, move || view! { <FeaturedList kind=kind /> }).forget(),
        MountView::Combined => mount_to(element, || view! { <CombinedFeed /> }).forget(),
        MountView::Markdown(src) => {
            mount_to(element, move || view! { <MarkdownArticle src=src.clone() /> }).forget()
        }
    }
}

/// Mount a view on every `[data-view]` element; malformed ones are skipped
pub fn mount_views() -> usize {
    let Ok(nodes) = document().query_selector_all(MOUNT_SELECTOR) else {
        return 0;
    };

    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let view = element.get_attribute("data-view").unwrap_or_default();
        let feed = element.get_attribute("data-feed");
        let src = element.get_attribute("data-src");
        match parse_mount(&view, feed.as_deref(), src.as_deref()) {
            Ok(mount) => {
                log::debug!("Mounting {:?}", mount);
                mount_view(element, mount);
                mounted += 1;
            }
            Err(e) => log::warn!("Skipping mount point: {}", e),
        }
    }
    mounted
}

/// Page-wide pieces present on every page
#[component]
pub fn App() -> impl IntoView {
    install_copy_handler();
    let enhanced = enhance_static_code_blocks(&document());
    log::debug!("Enhanced {} static code blocks", enhanced);

    view! { <ScrollToTop /> }
}
