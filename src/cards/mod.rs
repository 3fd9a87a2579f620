//! Typed card construction.
//!
//! A [`CardView`] is the render-target-independent form of one catalog
//! entry: the card builders here are pure functions from a model record to
//! the fields a card displays, so card content is unit-testable without a
//! terminal. Per-field degradation happens here — a missing thumbnail,
//! author, or recognized label falls back rather than failing the card.

use chrono::{DateTime, Utc};

use crate::models::{
    category_label, parse_date, type_label, Article, FashionItem, TrendPost, World,
};

/// Render-target-independent card content for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardView {
    /// Main heading.
    pub title: String,
    /// Secondary line (shop or author).
    pub subtitle: Option<String>,
    /// Corner badge text (type or category label).
    pub badge: Option<String>,
    /// Tag badge labels, in display form.
    pub tags: Vec<String>,
    /// Meta line (price and likes, or a date).
    pub meta: Option<String>,
    /// Body text (description, excerpt, or post content).
    pub body: Option<String>,
    /// Outbound link.
    pub link: Option<String>,
    /// Thumbnail URL; `None` renders the placeholder.
    pub thumbnail: Option<String>,
}

/// Formats a JPY price with thousands separators (`¥1,000`).
#[must_use]
pub fn format_price(price: u32) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("¥{grouped}")
}

/// Formats a timestamp in the portal's compact `YYYY.MM.DD` form.
#[must_use]
pub fn format_date_compact(date: DateTime<Utc>) -> String {
    date.format("%Y.%m.%d").to_string()
}

/// Builds the card for a fashion item.
#[must_use]
pub fn build_item_card(item: &FashionItem) -> CardView {
    CardView {
        title: item.name.clone(),
        subtitle: (!item.shop_name.is_empty()).then(|| item.shop_name.clone()),
        badge: item.item_type.as_deref().map(|t| type_label(t).to_string()),
        tags: item
            .taste
            .iter()
            .map(|t| crate::models::taste_label(t).to_string())
            .collect(),
        meta: Some(format!("{}  ♡ {}", format_price(item.price), item.likes)),
        body: None,
        link: Some(item.booth_url.clone()),
        thumbnail: item.thumbnail_url.clone(),
    }
}

/// Builds the card for a world. An uncategorized world shows the portal's
/// `OTHER` badge; an unparsable date leaves the meta line empty.
#[must_use]
pub fn build_world_card(world: &World) -> CardView {
    let badge = world
        .category
        .clone()
        .unwrap_or_else(|| "OTHER".to_string());
    let author = world.author.as_deref().unwrap_or("Unknown");

    CardView {
        title: world.name.clone(),
        subtitle: Some(format!("by {author}")),
        badge: Some(badge),
        tags: Vec::new(),
        meta: world
            .date
            .as_deref()
            .and_then(parse_date)
            .map(format_date_compact),
        body: world.description.clone(),
        link: Some(world.url.clone()),
        thumbnail: world.thumbnail_url.clone(),
    }
}

/// Builds the card for a knowledge article.
#[must_use]
pub fn build_article_card(article: &Article) -> CardView {
    CardView {
        title: article.title.clone(),
        subtitle: article.subtitle.clone(),
        badge: article.category.clone(),
        tags: article.tags.clone(),
        meta: article
            .publish_date
            .as_deref()
            .and_then(parse_date)
            .map(format_date_compact),
        body: article.teaser().map(String::from),
        link: None,
        thumbnail: article.thumbnail().map(String::from),
    }
}

/// Builds the card for a trend post. Tags keep one leading `#` regardless
/// of whether the document included it.
#[must_use]
pub fn build_trend_card(post: &TrendPost) -> CardView {
    CardView {
        title: post.title.clone(),
        subtitle: None,
        badge: None,
        tags: post
            .tags
            .iter()
            .map(|tag| format!("#{}", tag.trim_start_matches('#')))
            .collect(),
        meta: Some(post.date.clone().unwrap_or_else(|| "Today".to_string())),
        body: (!post.content.is_empty()).then(|| post.content.clone()),
        link: post.source_url.clone(),
        thumbnail: None,
    }
}

/// Builds the audience-category badge used by the filter bar for items.
#[must_use]
pub fn item_category_badge(item: &FashionItem) -> Option<String> {
    item.category
        .as_deref()
        .map(|c| category_label(c).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(0), "¥0");
        assert_eq!(format_price(500), "¥500");
        assert_eq!(format_price(1000), "¥1,000");
        assert_eq!(format_price(1234567), "¥1,234,567");
    }

    #[test]
    fn test_item_card_uses_label_tables() {
        let item = FashionItem {
            id: "1".to_string(),
            name: "Cyber Suit".to_string(),
            category: Some("womens".to_string()),
            item_type: Some("costume".to_string()),
            taste: vec!["cyber".to_string(), "vaporwave".to_string()],
            price: 2000,
            likes: 321,
            thumbnail_url: None,
            booth_url: "https://booth.pm/ja/items/1".to_string(),
            shop_name: "neon-atelier".to_string(),
            is_r18: false,
        };

        let card = build_item_card(&item);
        assert_eq!(card.badge.as_deref(), Some("Costume"));
        // Known slug gets its label, unknown slug falls through raw.
        assert_eq!(card.tags, vec!["Cyberpunk", "vaporwave"]);
        assert_eq!(card.meta.as_deref(), Some("¥2,000  ♡ 321"));
        assert!(card.thumbnail.is_none());
    }

    #[test]
    fn test_world_card_fallbacks() {
        let world = World {
            name: "Pancake House".to_string(),
            url: "https://vrchat.com/home/world/wrld_p".to_string(),
            category: None,
            date: Some("not a date".to_string()),
            author: None,
            author_url: None,
            description: None,
            thumbnail_url: None,
            fetched_at: None,
        };

        let card = build_world_card(&world);
        assert_eq!(card.badge.as_deref(), Some("OTHER"));
        assert_eq!(card.subtitle.as_deref(), Some("by Unknown"));
        assert!(card.meta.is_none());
    }

    #[test]
    fn test_world_card_formats_date() {
        let world = World {
            name: "W".to_string(),
            url: "https://vrchat.com/home/world/wrld_w".to_string(),
            category: Some("GAME".to_string()),
            date: Some("2024-11-03".to_string()),
            author: Some("someone".to_string()),
            author_url: None,
            description: Some("A game world".to_string()),
            thumbnail_url: None,
            fetched_at: None,
        };

        assert_eq!(build_world_card(&world).meta.as_deref(), Some("2024.11.03"));
    }

    #[test]
    fn test_trend_card_normalizes_hash_prefix() {
        let post: TrendPost = serde_json::from_str(
            r##"{"title": "T", "tags": ["#Event", "Update"], "content": "body"}"##,
        )
        .unwrap();

        let card = build_trend_card(&post);
        assert_eq!(card.tags, vec!["#Event", "#Update"]);
        assert_eq!(card.meta.as_deref(), Some("Today"));
    }
}
