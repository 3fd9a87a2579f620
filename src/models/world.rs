//! World records from the world catalog document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::filter::CatalogEntry;
use crate::models::parse_date;

/// A VRChat world entry from `worlds.json`.
///
/// The world scraper emits a bare array (no wrapper object). `date` is the
/// creation date from the curation sheet and `fetched_at` the scrape
/// timestamp; sorting prefers `date` and falls back to `fetched_at`, the
/// same precedence the portal used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    /// World display name.
    pub name: String,
    /// Outbound link to the VRChat world page.
    pub url: String,
    /// Curated category label (e.g. `CHILL`, `GAME`).
    #[serde(default)]
    pub category: Option<String>,
    /// Creation date as written in the curation sheet.
    #[serde(default)]
    pub date: Option<String>,
    /// World author name.
    #[serde(default)]
    pub author: Option<String>,
    /// Link to the author's page, when the sheet provides one.
    #[serde(default)]
    pub author_url: Option<String>,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Thumbnail image URL scraped from the world page.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Scrape timestamp (RFC 3339).
    #[serde(default)]
    pub fetched_at: Option<String>,
}

impl CatalogEntry for World {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn kind(&self) -> Option<&str> {
        None
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(author) = self.author.as_deref() {
            fields.push(author);
        }
        if let Some(description) = self.description.as_deref() {
            fields.push(description);
        }
        fields
    }

    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.date
            .as_deref()
            .and_then(parse_date)
            .or_else(|| self.fetched_at.as_deref().and_then(parse_date))
    }
}
