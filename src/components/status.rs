//! Status Messages
//!
//! Loading, fetch-failure and empty-result states shown in place of a list.

use leptos::prelude::*;

use crate::config::FeedKind;

/// Progress of a view's one fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed,
}

/// Why a list shows no items
pub fn empty_message(noun: &str, tag_active: bool, query_active: bool) -> String {
    if query_active {
        format!("No {} found matching your search.", noun)
    } else if tag_active {
        format!("No {} found with this tag.", noun)
    } else {
        format!("No {} available at this time. Check back soon!", noun)
    }
}

pub fn failure_message(noun: &str) -> String {
    format!("Failed to load {}. Please try again later.", noun)
}

#[component]
pub fn LoadingMessage() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

/// Inline fetch failure, no retry
#[component]
pub fn FetchFailure(#[prop(into)] noun: String) -> impl IntoView {
    view! { <p class="fetch-failure">{failure_message(&noun)}</p> }
}

/// Empty list with a way back to the unfiltered view
#[component]
pub fn EmptyResult(
    #[prop(into)] message: String,
    /// Clears filters; `None` when nothing is filtered
    #[prop(optional)] on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="empty-result">
            <p>{message}</p>
            {on_reset.map(|reset| view! {
                <button class="show-all-btn" on:click=move |_| reset.run(())>
                    "Show all"
                </button>
            })}
        </div>
    }
}

/// Links back to both feed sections
#[component]
pub fn SectionLinks(#[prop(into)] verb: String) -> impl IntoView {
    let link = move |kind: FeedKind, label: &'static str| {
        let config = kind.config();
        view! {
            <a href=config.section_path class=format!("section-link {}", config.css_class)>
                {format!("{} {}", verb, label)}
            </a>
        }
    };
    view! {
        <div class="section-links">
            {link(FeedKind::Research, "Research")}
            {link(FeedKind::Writeups, "Writeups")}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message("writeups", false, false), "No writeups available at this time. Check back soon!");
        assert_eq!(empty_message("writeups", true, false), "No writeups found with this tag.");
        assert_eq!(empty_message("articles", true, true), "No articles found matching your search.");
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message("writeups"), "Failed to load writeups. Please try again later.");
    }
}
