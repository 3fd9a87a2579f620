//! Catalog document parsing.
//!
//! The pipeline emits two document shapes: the item catalog wraps its
//! entries (`{"items": [...], "lastUpdated": "..."}`) while the world,
//! article, and trend catalogs are bare arrays. [`CatalogDocument`] parses
//! either and normalizes them into one type.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A parsed catalog document: the ordered entry list plus optional
/// document-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogDocument<T> {
    /// Entries in source order.
    pub items: Vec<T>,
    /// Generation timestamp of the document, when the wrapper carries one.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr<T> {
    Wrapped {
        items: Vec<T>,
        #[serde(rename = "lastUpdated", default)]
        last_updated: Option<DateTime<Utc>>,
    },
    Bare(Vec<T>),
}

impl<T> CatalogDocument<T> {
    /// Wraps a bare entry list with no metadata.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items,
            last_updated: None,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the document holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: DeserializeOwned> CatalogDocument<T> {
    /// Parses a document from JSON text, accepting both the wrapped and
    /// the bare-array shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let repr: DocumentRepr<T> = serde_json::from_str(json)?;
        Ok(match repr {
            DocumentRepr::Wrapped {
                items,
                last_updated,
            } => Self {
                items,
                last_updated,
            },
            DocumentRepr::Bare(items) => Self {
                items,
                last_updated: None,
            },
        })
    }
}

impl<T> Default for CatalogDocument<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}
