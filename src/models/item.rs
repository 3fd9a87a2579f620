//! Fashion item records from the BOOTH catalog document.

use serde::{Deserialize, Serialize};

use crate::catalog::filter::CatalogEntry;

/// A single BOOTH marketplace item from `items.json`.
///
/// Field names mirror the document's camelCase keys. `category` is one of
/// the pipeline's audience slugs (`mens`, `womens`, `kids`), `item_type` is
/// the product kind (`avatar`, `costume`, ...) and `taste` carries zero or
/// more style tags (`cyber`, `gothic`, ...).
///
/// The raw pipeline output additionally carries an `isR18` flag; it is
/// consumed by the ingest filter and never serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FashionItem {
    /// Stable item identifier assigned by the scraper.
    pub id: String,
    /// Item display name.
    pub name: String,
    /// Audience category slug, if categorized.
    #[serde(default)]
    pub category: Option<String>,
    /// Product type slug, if known.
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Style taste tags.
    #[serde(default)]
    pub taste: Vec<String>,
    /// Price in JPY.
    #[serde(default)]
    pub price: u32,
    /// Like count on BOOTH.
    #[serde(default)]
    pub likes: u32,
    /// Thumbnail image URL, if one was scraped.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Outbound link to the BOOTH product page.
    pub booth_url: String,
    /// Shop display name.
    #[serde(default)]
    pub shop_name: String,
    /// Adult-content flag from the raw scrape; dropped by ingest.
    #[serde(default, skip_serializing)]
    pub is_r18: bool,
}

impl CatalogEntry for FashionItem {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.taste
    }

    fn kind(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.shop_name]
    }

    fn sort_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        // Items carry no date; the document itself is ordered newest-first.
        None
    }
}
