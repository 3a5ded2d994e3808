//! Article List View
//!
//! Paginated, filterable list of one feed. Owns its `ListState`; the page
//! number lives in the URL path and in history entries.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_paginator::Pagination;
use reactive_stores::Store;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::{
    ArticleCard, CardStyle, EmptyResult, FetchFailure, FilterTags, LoadState, LoadingMessage,
    PageSizeControls, PaginationInfo, SearchBox,
};
use crate::components::status::empty_message;
use crate::config::FeedKind;
use crate::feed::fetch_articles;
use crate::filter::is_all_tag;
use crate::prefs::{load_page_size, LocalStorage};
use crate::route;
use crate::store::{ListState, ListStateStoreFields};

fn scroll_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn ArticleListView(kind: FeedKind) -> impl IntoView {
    let config = kind.config();
    let page_size = load_page_size(&LocalStorage, config.page_size_key);
    let store = Store::new(ListState::new(kind, page_size, route::current_page()));
    provide_context(store);

    let (load_state, set_load_state) = signal(LoadState::Loading);
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Load the manifest once on mount
    Effect::new(move |_| {
        let initial_tag = route::initial_tag();
        spawn_local(async move {
            match fetch_articles(config.manifest_url).await {
                Ok(articles) => {
                    store.update(|state| {
                        state.set_articles(articles);
                        if let Some(tag) = initial_tag.as_deref() {
                            log::debug!("Initial tag filter {:?}", tag);
                            state.set_tag(tag);
                        }
                    });
                    set_load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("Error loading {}: {}", config.noun, e);
                    set_load_state.set(LoadState::Failed);
                }
            }
        });
    });

    // Back/forward restores the page from history without refetching
    let _ = window_event_listener(leptos::ev::popstate, move |ev| {
        let page = route::page_from_history(ev.state());
        store.update(|state| {
            state.go_to_page(page);
        });
    });

    let page_state = Memo::new(move |_| store.with(|state| state.page_state()));
    let page_rows = Memo::new(move |_| store.with(|state| state.page_rows()));

    let change_page = Callback::new(move |page: usize| {
        store.update(|state| {
            state.go_to_page(page);
        });
        let shown = store.current_page().get_untracked();
        if !store.with_untracked(|state| state.is_filtered()) {
            route::push_page(config.list_path, shown);
        }
        if let Some(list) = list_ref.get_untracked() {
            scroll_into_view(&list);
        }
    });

    let change_page_size = Callback::new(move |size: usize| {
        store.update(|state| state.set_page_size(size, &LocalStorage));
        route::push_page(config.list_path, 1);
    });

    let select_tag = Callback::new(move |tag: String| {
        store.update(|state| state.set_tag(&tag));
    });

    let run_search = Callback::new(move |query: String| {
        store.update(|state| state.set_query(&query));
    });

    let reset_filters = Callback::new(move |_: ()| {
        store.update(|state| state.clear_filters());
    });

    let list_body = move || match load_state.get() {
        LoadState::Loading => view! { <LoadingMessage /> }.into_any(),
        LoadState::Failed => view! { <FetchFailure noun=config.noun /> }.into_any(),
        LoadState::Ready if page_rows.with(|rows| rows.is_empty()) => {
            let (tag_active, query_active) = store.with(|state| {
                (!is_all_tag(&state.tag), !state.query.trim().is_empty())
            });
            let message = empty_message(config.noun, tag_active, query_active);
            if tag_active || query_active {
                view! { <EmptyResult message=message on_reset=reset_filters /> }.into_any()
            } else {
                view! { <EmptyResult message=message /> }.into_any()
            }
        }
        LoadState::Ready => view! {
            <div class="article-list">
                <For
                    each=move || page_rows.get()
                    key=|(position, article)| (*position, article.url.clone())
                    children=move |(_, article)| {
                        view! {
                            <ArticleCard
                                article=article
                                kind=kind
                                style=CardStyle::Compact
                                on_tag=select_tag
                            />
                        }
                    }
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=format!("article-list-view {}", config.css_class)>
            <PageSizeControls on_change=change_page_size />
            <FilterTags on_select=select_tag />
            <SearchBox on_search=run_search placeholder=format!("Search {}...", config.noun) />
            <PaginationInfo page_state=page_state noun=config.noun />
            <div class="article-list-container" node_ref=list_ref>
                {list_body}
            </div>
            <Pagination
                current=Signal::derive(move || page_state.get().current_page)
                total=Signal::derive(move || page_state.get().total_pages())
                on_select=change_page
            />
            <PaginationInfo page_state=page_state noun=config.noun />
        </div>
    }
}
