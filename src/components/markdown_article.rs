//! Markdown Article
//!
//! Fetches a markdown document and renders it with highlighted code blocks
//! and callouts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::LoadingMessage;
use crate::feed::fetch_text;
use crate::markdown::{extract_title, parse_markdown};

#[derive(Clone, Debug, PartialEq)]
enum Rendered {
    Loading,
    Html(String),
    Failed,
}

#[component]
pub fn MarkdownArticle(#[prop(into)] src: String) -> impl IntoView {
    let (rendered, set_rendered) = signal(Rendered::Loading);

    Effect::new(move |_| {
        let src = src.clone();
        spawn_local(async move {
            match fetch_text(&src).await {
                Ok(text) => {
                    if let Some(title) = extract_title(&text) {
                        document().set_title(&title);
                    }
                    set_rendered.set(Rendered::Html(parse_markdown(&text)));
                }
                Err(e) => {
                    log::error!("Error loading article {}: {}", src, e);
                    set_rendered.set(Rendered::Failed);
                }
            }
        });
    });

    move || match rendered.get() {
        Rendered::Loading => view! { <LoadingMessage /> }.into_any(),
        Rendered::Html(html) => view! { <article class="markdown-body" inner_html=html></article> }.into_any(),
        Rendered::Failed => view! { <p class="fetch-failure">"Failed to load article."</p> }.into_any(),
    }
}
