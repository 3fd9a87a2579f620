//! Catalog storage, loading, filtering, and ingest.
//!
//! The catalog is the application's single data source: four sections of
//! pre-generated JSON documents, loaded wholesale and filtered in memory.

pub mod document;
pub mod filter;
pub mod ingest;
pub mod loader;

pub use document::CatalogDocument;
pub use filter::{filter, filter_indices, CatalogEntry, FilterState, SortOrder, ALL_CATEGORIES};
pub use loader::LoadError;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{ARTICLES_FILE, ITEMS_FILE, TRENDS_FILE, WORLDS_FILE};
use crate::models::{Article, FashionItem, TrendPost, World};

/// The four catalog sections of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// BOOTH fashion items.
    Items,
    /// VRChat worlds.
    Worlds,
    /// Knowledge-base articles.
    Articles,
    /// Trend posts.
    Trends,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 4] = [Self::Items, Self::Worlds, Self::Articles, Self::Trends];

    /// Section title for tabs and headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Items => "Fashion",
            Self::Worlds => "Worlds",
            Self::Articles => "Knowledge",
            Self::Trends => "Trends",
        }
    }

    /// Document file name under the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Items => ITEMS_FILE,
            Self::Worlds => WORLDS_FILE,
            Self::Articles => ARTICLES_FILE,
            Self::Trends => TRENDS_FILE,
        }
    }

    /// Lowercase slug used by the CLI and web query parameters.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Worlds => "worlds",
            Self::Articles => "articles",
            Self::Trends => "trends",
        }
    }

    /// The next section in tab order, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Items => Self::Worlds,
            Self::Worlds => Self::Articles,
            Self::Articles => Self::Trends,
            Self::Trends => Self::Items,
        }
    }

    /// The previous section in tab order, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Items => Self::Trends,
            Self::Worlds => Self::Items,
            Self::Articles => Self::Worlds,
            Self::Trends => Self::Articles,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "items" | "fashion" => Ok(Self::Items),
            "worlds" => Ok(Self::Worlds),
            "articles" | "knowledge" => Ok(Self::Articles),
            "trends" => Ok(Self::Trends),
            other => Err(format!(
                "unknown section '{other}' (expected items, worlds, articles, or trends)"
            )),
        }
    }
}

/// All four catalog documents, loaded from a data directory.
///
/// Sections that fail to load come back as empty collections with the
/// error recorded; the rest of the application treats that as the defined
/// empty state rather than a fatal condition.
#[derive(Debug, Default)]
pub struct CatalogSet {
    /// Fashion item document.
    pub items: CatalogDocument<FashionItem>,
    /// World document.
    pub worlds: CatalogDocument<World>,
    /// Article document.
    pub articles: CatalogDocument<Article>,
    /// Trend document.
    pub trends: CatalogDocument<TrendPost>,
    /// Load failures by section.
    pub load_errors: Vec<(Section, LoadError)>,
}

impl CatalogSet {
    /// Loads every section's document from `data_dir`.
    #[must_use]
    pub fn load_dir(data_dir: &Path) -> Self {
        let mut load_errors = Vec::new();

        let (items, err) = loader::load_file_or_empty(&data_dir.join(ITEMS_FILE));
        if let Some(err) = err {
            load_errors.push((Section::Items, err));
        }
        let (worlds, err) = loader::load_file_or_empty(&data_dir.join(WORLDS_FILE));
        if let Some(err) = err {
            load_errors.push((Section::Worlds, err));
        }
        let (articles, err) = loader::load_file_or_empty(&data_dir.join(ARTICLES_FILE));
        if let Some(err) = err {
            load_errors.push((Section::Articles, err));
        }
        let (trends, err) = loader::load_file_or_empty(&data_dir.join(TRENDS_FILE));
        if let Some(err) = err {
            load_errors.push((Section::Trends, err));
        }

        Self {
            items,
            worlds,
            articles,
            trends,
            load_errors,
        }
    }

    /// The load failure recorded for `section`, if any.
    #[must_use]
    pub fn error_for(&self, section: Section) -> Option<&LoadError> {
        self.load_errors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, err)| err)
    }

    /// Entry count for `section`.
    #[must_use]
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Items => self.items.len(),
            Section::Worlds => self.worlds.len(),
            Section::Articles => self.articles.len(),
            Section::Trends => self.trends.len(),
        }
    }

    /// Document generation timestamp for `section`, when present.
    #[must_use]
    pub fn last_updated(&self, section: Section) -> Option<chrono::DateTime<chrono::Utc>> {
        match section {
            Section::Items => self.items.last_updated,
            Section::Worlds => self.worlds.last_updated,
            Section::Articles => self.articles.last_updated,
            Section::Trends => self.trends.last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_slug_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.slug().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_section_aliases() {
        assert_eq!("fashion".parse::<Section>().unwrap(), Section::Items);
        assert_eq!("knowledge".parse::<Section>().unwrap(), Section::Articles);
        assert!("avatars".parse::<Section>().is_err());
    }

    #[test]
    fn test_section_tab_order_wraps() {
        assert_eq!(Section::Trends.next(), Section::Items);
        assert_eq!(Section::Items.previous(), Section::Trends);
    }

    #[test]
    fn test_load_dir_missing_files_yield_empty_sections() {
        let temp = tempfile::TempDir::new().unwrap();
        let set = CatalogSet::load_dir(temp.path());

        assert!(set.items.is_empty());
        assert_eq!(set.load_errors.len(), 4);
        assert!(set.error_for(Section::Worlds).is_some());
    }
}
