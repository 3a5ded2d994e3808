//! List Controls
//!
//! Page size buttons, tag filter bar, search box and the "Showing X-Y" line.
//! All of them read the enclosing list's store from context.

use leptos::prelude::*;
use leptos_paginator::PageState;

use crate::config::PAGE_SIZE_OPTIONS;
use crate::filter::{all_tags, ALL_TAG};
use crate::store::{use_list_store, ListStateStoreFields};

/// "Showing 11-20 of 42 writeups (Page 2 of 5)"
pub fn pagination_info(state: &PageState, noun: &str) -> String {
    format!(
        "Showing {}-{} of {} {} (Page {} of {})",
        state.first_item(),
        state.last_item(),
        state.total_items,
        noun,
        state.current_page,
        state.total_pages()
    )
}

/// Items-per-page buttons
#[component]
pub fn PageSizeControls(#[prop(into)] on_change: Callback<usize>) -> impl IntoView {
    let store = use_list_store();

    view! {
        <div class="page-size-controls">
            <span class="page-size-label">"Items per page:"</span>
            {PAGE_SIZE_OPTIONS.into_iter().map(|size| {
                view! {
                    <button
                        class="page-size-btn"
                        class:active=move || store.page_size().get() == size
                        on:click=move |_| on_change.run(size)
                    >
                        {size}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Tag filter bar built from every tag of the feed
#[component]
pub fn FilterTags(#[prop(into)] on_select: Callback<String>) -> impl IntoView {
    let store = use_list_store();
    let tags = Memo::new(move |_| all_tags(&store.articles().read()));

    view! {
        <div class="filter-tags">
            <For
                each=move || tags.get()
                key=|tag| tag.clone()
                children=move |tag| {
                    let label = if tag == ALL_TAG { "All".to_string() } else { tag.clone() };
                    let is_active = {
                        let tag = tag.clone();
                        move || store.tag().get().eq_ignore_ascii_case(&tag)
                    };
                    let clicked = tag.clone();
                    view! {
                        <span
                            class="filter-tag"
                            class:active=is_active
                            data-tag=tag
                            on:click=move |_| on_select.run(clicked.clone())
                        >
                            {label}
                        </span>
                    }
                }
            />
        </div>
    }
}

/// Search input with a clear button
#[component]
pub fn SearchBox(
    #[prop(into)] on_search: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let store = use_list_store();
    let has_query = move || !store.query().get().is_empty();

    view! {
        <div class="search-box">
            <input
                type="text"
                class="article-search"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            <Show when=has_query>
                <button
                    class="search-clear"
                    title="Clear search"
                    on:click=move |_| on_search.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// Position within the list, hidden when nothing is listed
#[component]
pub fn PaginationInfo(page_state: Memo<PageState>, noun: &'static str) -> impl IntoView {
    view! {
        <Show when=move || { page_state.get().total_items > 0 }>
            <div class="pagination-info">{move || pagination_info(&page_state.get(), noun)}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_info() {
        let state = PageState::new(2, 10, 42);
        assert_eq!(pagination_info(&state, "writeups"), "Showing 11-20 of 42 writeups (Page 2 of 5)");

        let last = PageState::new(5, 10, 42);
        assert_eq!(pagination_info(&last, "articles"), "Showing 41-42 of 42 articles (Page 5 of 5)");
    }
}
