//! Knowledge-base article records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::CatalogEntry;
use crate::models::parse_date;

/// A knowledge article from `knowledge.json`.
///
/// The knowledge scraper writes snake_case keys, unlike the item/world
/// documents, so this type takes the field names as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Stable article identifier (stringified number in the documents).
    pub id: String,
    /// Article title.
    pub title: String,
    /// Short subtitle shown under the title.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Category label (e.g. "VRC START GUIDE").
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Teaser text; some documents use `summary` instead.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Alternate teaser field used by older documents.
    #[serde(default)]
    pub summary: Option<String>,
    /// Publish date as written in the sheet.
    #[serde(default)]
    pub publish_date: Option<String>,
    /// Card thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Alternate image field used by older documents.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Article {
    /// The teaser text for cards: `excerpt`, falling back to `summary`.
    #[must_use]
    pub fn teaser(&self) -> Option<&str> {
        self.excerpt.as_deref().or(self.summary.as_deref())
    }

    /// The thumbnail for cards: `thumbnail_url`, falling back to `image_url`.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail_url.as_deref().or(self.image_url.as_deref())
    }
}

impl CatalogEntry for Article {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn kind(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        if let Some(teaser) = self.teaser() {
            fields.push(teaser);
        }
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.publish_date.as_deref().and_then(parse_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teaser_prefers_excerpt() {
        let article: Article = serde_json::from_str(
            r#"{"id": "3", "title": "T", "excerpt": "short", "summary": "long"}"#,
        )
        .unwrap();
        assert_eq!(article.teaser(), Some("short"));
    }

    #[test]
    fn test_teaser_falls_back_to_summary() {
        let article: Article =
            serde_json::from_str(r#"{"id": "3", "title": "T", "summary": "long"}"#).unwrap();
        assert_eq!(article.teaser(), Some("long"));
    }

    #[test]
    fn test_search_fields_include_tags() {
        let article: Article = serde_json::from_str(
            r#"{"id": "1", "title": "Avatar Setup", "tags": ["unity", "basics"]}"#,
        )
        .unwrap();
        assert!(article.search_fields().contains(&"unity"));
    }
}
