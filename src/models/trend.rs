//! Trend post records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::CatalogEntry;
use crate::models::parse_date;

/// A dated trend post from `trends.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPost {
    /// Headline.
    pub title: String,
    /// Body text (plain prose, 100-150 characters in practice).
    #[serde(default)]
    pub content: String,
    /// Topic tags; the pipeline sometimes keeps a leading `#`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Link to the source the post summarizes.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Publish date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<String>,
}

impl CatalogEntry for TrendPost {
    fn category(&self) -> Option<&str> {
        None
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn kind(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.date.as_deref().and_then(parse_date)
    }
}
