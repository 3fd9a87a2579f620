//! Catalog download command.
//!
//! Downloads the four catalog documents from the portal's publish URL into
//! the local data directory. Files whose content hash is unchanged are
//! left untouched so timestamps only move on real updates.

use clap::Args;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{loader, Section};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;

/// Download catalog documents into the data directory
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Base URL the documents are published under
    /// (falls back to fetch.base_url in config.toml)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory to write the documents into
    /// (falls back to the configured data directory)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Only download this section's document
    #[arg(short, long)]
    pub section: Option<Section>,
}

/// What happened to one document during a fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Document downloaded and written.
    Updated,
    /// Remote content matched the existing file; nothing written.
    Unchanged,
}

/// Hex-encoded SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Writes `body` to `path` unless the existing content already hashes the
/// same.
pub fn write_if_changed(path: &Path, body: &str) -> CliResult<FetchOutcome> {
    if let Ok(existing) = fs::read(path) {
        if sha256_hex(&existing) == sha256_hex(body.as_bytes()) {
            return Ok(FetchOutcome::Unchanged);
        }
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }
    fs::write(path, body)
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))?;
    Ok(FetchOutcome::Updated)
}

impl FetchArgs {
    /// Execute the fetch command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let base_url = self
            .base_url
            .clone()
            .or_else(|| config.fetch.base_url.clone())
            .ok_or_else(|| {
                CliError::usage("No base URL given (pass --base-url or set fetch.base_url)")
            })?;

        if !loader::is_url(&base_url) {
            return Err(CliError::usage(format!(
                "Base URL must start with http:// or https://: {base_url}"
            )));
        }

        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => config
                .data_dir()
                .map_err(|e| CliError::io(e.to_string()))?,
        };

        let sections: Vec<Section> = match self.section {
            Some(section) => vec![section],
            None => Section::ALL.to_vec(),
        };

        let mut failures = 0usize;
        for section in sections {
            let url = format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                section.file_name()
            );
            match loader::fetch_body(&url) {
                Ok(body) => {
                    let path = data_dir.join(section.file_name());
                    match write_if_changed(&path, &body)? {
                        FetchOutcome::Updated => println!("{}: updated", section.file_name()),
                        FetchOutcome::Unchanged => println!("{}: unchanged", section.file_name()),
                    }
                }
                Err(e) => {
                    eprintln!("{}: fetch failed ({e})", section.file_name());
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(CliError::io(format!(
                "{failures} document(s) could not be fetched"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sha256_hex_is_stable() {
        assert_eq!(
            sha256_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_write_if_changed_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("items.json");

        assert_eq!(
            write_if_changed(&path, "{\"items\": []}").unwrap(),
            FetchOutcome::Updated
        );
        assert_eq!(
            write_if_changed(&path, "{\"items\": []}").unwrap(),
            FetchOutcome::Unchanged
        );
        assert_eq!(
            write_if_changed(&path, "{\"items\": [1]}").unwrap(),
            FetchOutcome::Updated
        );
    }

    #[test]
    fn test_write_if_changed_creates_parent_dirs(){
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/data/items.json");

        assert_eq!(
            write_if_changed(&path, "[]").unwrap(),
            FetchOutcome::Updated
        );
        assert!(path.exists());
    }
}
