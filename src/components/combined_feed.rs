//! Combined Feed
//!
//! Latest items across research and writeups, each with its type badge.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, CardStyle, LoadState, LoadingMessage, SectionLinks};
use crate::config::COMBINED_FEATURED_COUNT;
use crate::feed::fetch_combined;
use crate::models::FeedEntry;

#[component]
pub fn CombinedFeed() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (entries, set_entries) = signal(Vec::<FeedEntry>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_combined().await {
                Ok(mut merged) => {
                    merged.truncate(COMBINED_FEATURED_COUNT);
                    set_entries.set(merged);
                    set_load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("Error loading combined feed: {}", e);
                    set_load_state.set(LoadState::Failed);
                }
            }
        });
    });

    let body = move || match load_state.get() {
        LoadState::Loading => view! { <LoadingMessage /> }.into_any(),
        LoadState::Failed => view! {
            <div class="empty-result">
                <p>"Failed to load content. Please try again later."</p>
                <SectionLinks verb="Visit" />
            </div>
        }
        .into_any(),
        LoadState::Ready if entries.with(|e| e.is_empty()) => view! {
            <div class="empty-result">
                <p>"No content available at this time."</p>
                <SectionLinks verb="Browse" />
            </div>
        }
        .into_any(),
        LoadState::Ready => entries
            .get()
            .into_iter()
            .map(|entry| {
                view! { <ArticleCard article=entry.article kind=entry.kind style=CardStyle::Combined /> }
            })
            .collect_view()
            .into_any(),
    };

    view! { <div class="featured-articles combined">{body}</div> }
}
