//! Ingest-and-tag pipeline command.
//!
//! Runs the publish steps of the original pipeline over a raw scraped
//! item document: drop excluded items, fill missing classification tags,
//! and write the cleaned document with a fresh timestamp.

use chrono::Utc;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::catalog::ingest;
use crate::catalog::{loader, CatalogDocument};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::FashionItem;
use crate::tagger::Tagger;

/// Clean and auto-tag a raw item document
#[derive(Debug, Clone, Args)]
pub struct TagArgs {
    /// Path to the raw items document
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Where to write the cleaned document (defaults to the input path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minimum like count to keep an item
    /// (falls back to fetch.min_likes in config.toml)
    #[arg(long, value_name = "N")]
    pub min_likes: Option<u32>,

    /// Report what would change without writing the output
    #[arg(long)]
    pub dry_run: bool,
}

impl TagArgs {
    /// Execute the tag command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let document: CatalogDocument<FashionItem> = loader::load_file(&self.input)
            .map_err(|e| CliError::io(format!("Failed to load items: {e}")))?;

        let min_likes = self.min_likes.unwrap_or(config.fetch.min_likes);
        let (mut items, report) = ingest::clean(document.items, min_likes);

        let tagger =
            Tagger::new().map_err(|e| CliError::validation(format!("Bad tag rule: {e}")))?;
        let tagged = tagger.tag_all(&mut items);

        println!("input:      {} items", report.input);
        println!("r18:        {} removed", report.r18_removed);
        println!("low likes:  {} removed (<{min_likes})", report.low_likes_removed);
        println!("duplicates: {} removed", report.duplicates_removed);
        println!("tagged:     {tagged} items");
        println!("output:     {} items", report.output);

        if self.dry_run {
            println!("(dry run, nothing written)");
            return Ok(());
        }

        let output_path = self.output.as_ref().unwrap_or(&self.input);
        let document = CatalogDocument {
            items,
            last_updated: Some(Utc::now()),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| CliError::io(format!("Failed to serialize items: {e}")))?;
        fs::write(output_path, json).map_err(|e| {
            CliError::io(format!("Failed to write {}: {e}", output_path.display()))
        })?;
        println!("wrote {}", output_path.display());

        Ok(())
    }
}
