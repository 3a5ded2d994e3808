//! UI Components
//!
//! Leptos components mounted into the static site pages.

mod article_card;
mod article_list;
mod combined_feed;
mod featured_list;
mod list_controls;
mod markdown_article;
mod scroll_to_top;
pub mod status;

pub use article_card::{ArticleCard, CardStyle};
pub use article_list::ArticleListView;
pub use combined_feed::CombinedFeed;
pub use featured_list::FeaturedList;
pub use list_controls::{FilterTags, PageSizeControls, PaginationInfo, SearchBox};
pub use markdown_article::MarkdownArticle;
pub use scroll_to_top::ScrollToTop;
pub use status::{EmptyResult, FetchFailure, LoadState, LoadingMessage, SectionLinks};
