//! Scroll-to-top Button

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::SCROLL_TOP_THRESHOLD;

const COMPACT_QUERY: &str = "(max-width: 768px)";

/// Whether the button should be visible at vertical offset `scroll_y`
pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

fn is_compact() -> bool {
    window()
        .match_media(COMPACT_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = signal(past_threshold(scroll_y()));
    let (compact, set_compact) = signal(is_compact());

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        set_visible.set(past_threshold(scroll_y()));
    });
    let _ = window_event_listener(leptos::ev::resize, move |_| {
        set_compact.set(is_compact());
    });

    let scroll_up = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <button
            id="scrollToTop"
            class="scroll-to-top"
            class:visible=move || visible.get()
            class:compact=move || compact.get()
            title="Scroll to top"
            aria-label="Scroll to top"
            on:click=scroll_up
        >
            "↑"
        </button>
    }
}
