//! Article Card Component
//!
//! One item of a list, featured or combined view.

use leptos::prelude::*;

use crate::config::{DateStyle, FeedKind, NEW_ITEM_DAYS};
use crate::dates::{format_date, is_new, now};
use crate::filter::truncate_summary;
use crate::models::Article;
use crate::route::tag_link;

/// Which view a card is rendered in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    /// Paginated list: short excerpt, every tag
    Compact,
    /// Featured view: image, longer summary, "Read More"
    Featured,
    /// Combined view: type badge, at most three tags
    Combined,
}

/// Tags shown on combined cards
const COMBINED_TAG_LIMIT: usize = 3;

impl CardStyle {
    /// (length limit, characters kept) of the summary excerpt
    fn summary_limits(self) -> (usize, usize) {
        match self {
            CardStyle::Compact => (100, 100),
            CardStyle::Featured => (150, 147),
            CardStyle::Combined => (120, 117),
        }
    }

    fn date_style(self, kind: FeedKind) -> DateStyle {
        match self {
            CardStyle::Compact => kind.config().list_date_style,
            _ => DateStyle::Long,
        }
    }
}

/// Tags shown on a card in the given style
fn card_tags(tags: &[String], style: CardStyle) -> Vec<String> {
    let limit = match style {
        CardStyle::Combined => COMBINED_TAG_LIMIT,
        _ => tags.len(),
    };
    tags.iter().take(limit).cloned().collect()
}

/// Article card
///
/// # Arguments
/// * `article` - Item to render
/// * `kind` - Feed the item belongs to
/// * `style` - Layout variant
/// * `on_tag` - Called with the tag name when a tag is clicked
#[component]
pub fn ArticleCard(
    article: Article,
    kind: FeedKind,
    style: CardStyle,
    #[prop(optional)] on_tag: Option<Callback<String>>,
) -> impl IntoView {
    let config = kind.config();
    let modifier = if style == CardStyle::Combined { config.css_class } else { "" };

    let new_badge = is_new(article.date.as_deref(), now(), NEW_ITEM_DAYS)
        .then(|| view! { <span class="new-badge">"NEW"</span> });
    let type_badge = (style == CardStyle::Combined).then(|| {
        view! { <span class=format!("content-type-badge {}", config.css_class)>{config.badge}</span> }
    });

    let (limit, keep) = style.summary_limits();
    let summary = article
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| truncate_summary(s, limit, keep));
    let summary_view = summary.map(|text| match style {
        CardStyle::Compact => view! { <div class="article-excerpt">{text}</div> }.into_any(),
        _ => view! { <div class="article-summary"><p>{text}</p></div> }.into_any(),
    });

    let image = (style == CardStyle::Featured)
        .then(|| article.image.clone())
        .flatten()
        .map(|src| view! { <img class="article-image" src=src alt=article.title.clone() /> });

    let description = article
        .description
        .clone()
        .map(|d| view! { <div class="article-subtitle">{d}</div> });

    let author = article.author.clone().map(|name| {
        let avatar = article
            .profile_picture
            .clone()
            .map(|src| view! { <img src=src alt=name.clone() class="author-avatar" /> });
        view! {
            " • "
            <span class="article-author"><span>{name.clone()}</span>{avatar}</span>
        }
    });

    let tags = card_tags(&article.tags, style);
    let tag_class = format!("article-tag {}", modifier);
    let tags_view = (!tags.is_empty()).then(|| {
        view! {
            <div class="article-tags">
                {tags.into_iter().map(|tag| match on_tag {
                    Some(on_tag) => {
                        let data_tag = tag.clone();
                        let clicked = tag.clone();
                        view! {
                            <span
                                class=format!("{} clickable", tag_class)
                                data-tag=data_tag
                                on:click=move |_| on_tag.run(clicked.clone())
                            >
                                {tag}
                            </span>
                        }
                        .into_any()
                    }
                    // Outside a list, tags open the feed's list filtered by that tag
                    None => {
                        let href = tag_link(config.list_path, &tag);
                        view! { <a class=tag_class.clone() href=href>{tag}</a> }.into_any()
                    }
                }).collect_view()}
            </div>
        }
    });

    let read_more = (style != CardStyle::Compact).then(|| {
        view! { <a href=article.url.clone() class=format!("read-more {}", modifier)>"Read More"</a> }
    });

    let date = format_date(article.date.as_deref(), style.date_style(kind));

    view! {
        <div class=format!("article-item {}", modifier)>
            {image}
            <h3 class=format!("article-title {}", modifier)>
                <a href=article.url.clone()>{article.title.clone()}</a>
                {type_badge}
                {new_badge}
            </h3>
            {description}
            <div class="article-meta">
                <span class="article-date">{date}</span>
                {author}
            </div>
            {summary_view}
            {tags_view}
            {read_more}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_card_tags_limit_combined_only() {
        let all = tags(&["web", "sqli", "auth", "oauth"]);
        assert_eq!(card_tags(&all, CardStyle::Combined), tags(&["web", "sqli", "auth"]));
        assert_eq!(card_tags(&all, CardStyle::Compact), all);
        assert_eq!(card_tags(&all, CardStyle::Featured), all);
        assert!(card_tags(&[], CardStyle::Combined).is_empty());
    }

    #[test]
    fn test_tag_links_point_at_the_feed_list() {
        let config = FeedKind::Research.config();
        let shown = card_tags(&tags(&["Red Team"]), CardStyle::Featured);
        assert_eq!(tag_link(config.list_path, &shown[0]), "/research/all/?tag=Red%20Team");
    }

    #[test]
    fn test_summary_limits() {
        assert_eq!(CardStyle::Compact.summary_limits(), (100, 100));
        assert_eq!(CardStyle::Featured.summary_limits(), (150, 147));
        assert_eq!(CardStyle::Combined.summary_limits(), (120, 117));
        assert_eq!(CardStyle::Compact.date_style(FeedKind::Research), DateStyle::Short);
        assert_eq!(CardStyle::Combined.date_style(FeedKind::Research), DateStyle::Long);
    }
}
