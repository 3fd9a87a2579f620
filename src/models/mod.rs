//! Data models for the catalog browser.
//!
//! One type per catalog section, matching the field names of the JSON
//! documents the portal pipeline generates. All records are immutable once
//! loaded; unknown fields are ignored and missing optional fields degrade
//! per-field at render time.

pub mod article;
pub mod item;
pub mod labels;
pub mod trend;
pub mod world;

pub use article::Article;
pub use item::FashionItem;
pub use labels::{category_label, label_for, taste_label, type_label};
pub use trend::TrendPost;
pub use world::World;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Parses a document date string into a UTC timestamp.
///
/// Accepts RFC 3339 (the scrapers' `fetchedAt` format), `YYYY-MM-DD`, and
/// `YYYY/MM/DD`. Returns `None` when the string matches none of these;
/// callers decide the fallback ordering (the filter engine pins unparsable
/// dates to the UNIX epoch).
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Utc
                .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
                .single();
        }
    }
    None
}
