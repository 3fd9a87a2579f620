//! Catalog document loading from disk or HTTP.
//!
//! Loading is the one fallible, suspending operation in the system. A
//! failure is a [`LoadError`]; callers recover locally by showing the fixed
//! empty-state message and never retry.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::document::CatalogDocument;

/// Why a catalog document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    /// The HTTP request failed before producing a response body.
    #[error("failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("catalog request returned HTTP {0}")]
    Status(reqwest::StatusCode),
    /// The document body is not a valid catalog document.
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Returns true when `source` should be fetched over HTTP rather than read
/// from disk.
#[must_use]
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads a catalog document from a file path or an http(s) URL.
pub fn load<T: DeserializeOwned>(source: &str) -> Result<CatalogDocument<T>, LoadError> {
    let body = if is_url(source) {
        fetch_body(source)?
    } else {
        fs::read_to_string(source)?
    };
    Ok(CatalogDocument::from_json(&body)?)
}

/// Loads a catalog document from a path under the data directory.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<CatalogDocument<T>, LoadError> {
    let body = fs::read_to_string(path)?;
    Ok(CatalogDocument::from_json(&body)?)
}

/// Loads a document, substituting an empty collection on failure.
///
/// The error is handed back alongside the empty document so the caller can
/// render the failure message; the collection itself stays empty rather
/// than partially populated.
pub fn load_file_or_empty<T: DeserializeOwned>(
    path: &Path,
) -> (CatalogDocument<T>, Option<LoadError>) {
    match load_file(path) {
        Ok(document) => (document, None),
        Err(err) => (CatalogDocument::default(), Some(err)),
    }
}

/// Fetches a document body over HTTP, turning non-success statuses into
/// [`LoadError::Status`].
pub fn fetch_body(url: &str) -> Result<String, LoadError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status));
    }
    Ok(response.text()?)
}
