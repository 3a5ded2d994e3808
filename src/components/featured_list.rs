//! Featured List
//!
//! The few most recent items of one feed, shown on the section landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ArticleCard, CardStyle, EmptyResult, FetchFailure, LoadState, LoadingMessage};
use crate::components::status::empty_message;
use crate::config::FeedKind;
use crate::feed::fetch_articles;
use crate::filter::featured;
use crate::models::Article;

#[component]
pub fn FeaturedList(kind: FeedKind) -> impl IntoView {
    let config = kind.config();
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (articles, set_articles) = signal(Vec::<Article>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_articles(config.manifest_url).await {
                Ok(all) => {
                    set_articles.set(featured(&all, config.featured_count));
                    set_load_state.set(LoadState::Ready);
                }
                Err(e) => {
                    log::error!("Error loading featured {}: {}", config.noun, e);
                    set_load_state.set(LoadState::Failed);
                }
            }
        });
    });

    let body = move || match load_state.get() {
        LoadState::Loading => view! { <LoadingMessage /> }.into_any(),
        LoadState::Failed => view! { <FetchFailure noun=config.noun /> }.into_any(),
        LoadState::Ready if articles.with(|a| a.is_empty()) => {
            view! { <EmptyResult message=empty_message(config.noun, false, false) /> }.into_any()
        }
        LoadState::Ready => articles
            .get()
            .into_iter()
            .map(|article| view! { <ArticleCard article=article kind=kind style=CardStyle::Featured /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class=format!("featured-articles {}", config.css_class)>
            {body}
        </div>
    }
}
