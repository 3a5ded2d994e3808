//! Leptos Paginator
//!
//! Page windows, page counts and compressed pagination controls.
//! The computations are pure; `Pagination` renders the control sequence.

mod component;
mod controls;
mod window;

pub use component::Pagination;
pub use controls::{render_controls, PageControl, MAX_UNCOMPRESSED_PAGES};
pub use window::{page, total_pages, PageState};
