//! Pagination Component
//!
//! Renders a control sequence as a `<ul class="pagination">` bar.

use leptos::prelude::*;

use crate::controls::{render_controls, PageControl};

fn control_view(control: PageControl, on_select: Callback<usize>) -> impl IntoView {
    let link = move |page: usize, label: String, title: &'static str| {
        view! {
            <li>
                <a
                    href="#"
                    title=title
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_select.run(page);
                    }
                >
                    {label}
                </a>
            </li>
        }
        .into_any()
    };

    match control {
        PageControl::PrevLink(page) => link(page, "«".to_string(), "Previous Page"),
        PageControl::NextLink(page) => link(page, "»".to_string(), "Next Page"),
        PageControl::PageLink(page) => link(page, page.to_string(), ""),
        PageControl::PrevDisabled => view! { <li class="disabled"><span>"«"</span></li> }.into_any(),
        PageControl::NextDisabled => view! { <li class="disabled"><span>"»"</span></li> }.into_any(),
        PageControl::Ellipsis => view! { <li class="disabled"><span>"..."</span></li> }.into_any(),
        PageControl::ActivePage(page) => view! { <li class="active"><span>{page}</span></li> }.into_any(),
    }
}

/// Pagination bar, hidden when there is at most one page
///
/// # Arguments
/// * `current` - Page being displayed (1-based)
/// * `total` - Number of pages
/// * `on_select` - Called with the target page when a link is clicked
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    let controls = move || render_controls(current.get(), total.get());

    view! {
        <Show when=move || { total.get() > 1 }>
            <ul class="pagination">
                {move || controls()
                    .into_iter()
                    .map(|control| control_view(control, on_select))
                    .collect_view()}
            </ul>
        </Show>
    }
}
