//! Headless catalog filtering command.
//!
//! Applies the same filter engine the TUI uses to one catalog document
//! and prints the matching entries as text or JSON.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cards::CardView;
use crate::catalog::{filter, loader, CatalogDocument, CatalogEntry, FilterState, Section, SortOrder};
use crate::cli::common::{CliError, CliResult};

/// Filter a catalog document and print the matches
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Path or URL of the catalog document
    #[arg(short, long, value_name = "FILE|URL")]
    pub catalog: PathBuf,

    /// Catalog section the document belongs to
    #[arg(short, long, default_value = "items")]
    pub section: Section,

    /// Category to match (default: all)
    #[arg(long, value_name = "SLUG")]
    pub category: Option<String>,

    /// Taste/topic tag to match
    #[arg(long, value_name = "SLUG")]
    pub taste: Option<String>,

    /// Item type to match
    #[arg(long = "type", value_name = "SLUG")]
    pub item_type: Option<String>,

    /// Case-insensitive substring query
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Sort by date (newest or oldest)
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<SortOrder>,

    /// Keep only the first N matches (applied after filtering/sorting)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FilterResponse<'a, T> {
    section: &'static str,
    total: usize,
    matched: usize,
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<Utc>>,
    entries: Vec<&'a T>,
}

impl FilterArgs {
    /// Builds the filter state the arguments describe.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(category) = &self.category {
            state.set_category(category);
        }
        state.tag = self.taste.clone();
        state.kind = self.item_type.clone();
        state.query = self.query.clone().unwrap_or_default();
        state.sort = self.sort;
        state
    }

    /// Execute the filter command
    pub fn execute(&self) -> CliResult<()> {
        let source = self.catalog.to_string_lossy();

        match self.section {
            Section::Items => {
                let doc = load(&source)?;
                self.run(&doc, crate::cards::build_item_card)
            }
            Section::Worlds => {
                let doc = load(&source)?;
                self.run(&doc, crate::cards::build_world_card)
            }
            Section::Articles => {
                let doc = load(&source)?;
                self.run(&doc, crate::cards::build_article_card)
            }
            Section::Trends => {
                let doc = load(&source)?;
                self.run(&doc, crate::cards::build_trend_card)
            }
        }
    }

    fn run<T: CatalogEntry + Serialize>(
        &self,
        doc: &CatalogDocument<T>,
        card: impl Fn(&T) -> CardView,
    ) -> CliResult<()> {
        let state = self.filter_state();
        let mut matches = filter(&doc.items, &state);
        if let Some(limit) = self.limit {
            matches.truncate(limit);
        }

        if self.json {
            let response = FilterResponse {
                section: self.section.slug(),
                total: doc.len(),
                matched: matches.len(),
                last_updated: doc.last_updated,
                entries: matches,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if matches.is_empty() {
            println!("No entries match.");
        } else {
            for &entry in &matches {
                println!("{}", format_line(&card(entry)));
            }
            println!();
            println!("{} of {} entries", matches.len(), doc.len());
        }

        Ok(())
    }
}

fn load<T: serde::de::DeserializeOwned>(source: &str) -> CliResult<CatalogDocument<T>> {
    loader::load(source).map_err(|e| CliError::io(format!("Failed to load catalog: {e}")))
}

/// One text line per card: title, then the secondary fields that exist.
fn format_line(card: &CardView) -> String {
    let mut line = card.title.clone();
    if let Some(badge) = &card.badge {
        line.push_str(&format!("  [{badge}]"));
    }
    if let Some(subtitle) = &card.subtitle {
        line.push_str(&format!("  — {subtitle}"));
    }
    if let Some(meta) = &card.meta {
        line.push_str(&format!("  ({meta})"));
    }
    if !card.tags.is_empty() {
        line.push_str("  ");
        line.push_str(
            &card
                .tags
                .iter()
                .map(|t| format!("#{}", t.trim_start_matches('#')))
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    line
}
