//! Catalog inspection command.
//!
//! Summarizes a data directory: per-section entry counts, document
//! timestamps, and classification value distributions.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::catalog::filter::{distinct_categories, distinct_kinds, distinct_tags};
use crate::catalog::{CatalogEntry, CatalogSet, Section};
use crate::cli::common::{CliError, CliResult};

/// Summarize the catalog documents in a data directory
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Directory holding the catalog documents
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Restrict the summary to one section
    #[arg(short, long)]
    pub section: Option<Section>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary of one catalog section.
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    /// Section slug.
    pub section: &'static str,
    /// Entry count.
    pub count: usize,
    /// Whether the document failed to load.
    pub load_failed: bool,
    /// Document timestamp, when the wrapper carries one.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Entry count per category slug.
    pub categories: BTreeMap<String, usize>,
    /// Entry count per tag slug.
    pub tags: BTreeMap<String, usize>,
    /// Entry count per type slug.
    pub types: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    sections: Vec<SectionSummary>,
}

fn summarize<T: CatalogEntry>(
    section: Section,
    items: &[T],
    last_updated: Option<DateTime<Utc>>,
    load_failed: bool,
) -> SectionSummary {
    let count_by = |values: Vec<String>, counter: &dyn Fn(&T, &str) -> bool| {
        values
            .into_iter()
            .map(|value| {
                let count = items.iter().filter(|item| counter(*item, &value)).count();
                (value, count)
            })
            .collect::<BTreeMap<String, usize>>()
    };

    let categories = count_by(distinct_categories(items), &|item, value| {
        item.category().is_some_and(|c| c.eq_ignore_ascii_case(value))
    });
    let tags = count_by(distinct_tags(items), &|item, value| {
        item.tags().iter().any(|t| t.eq_ignore_ascii_case(value))
    });
    let types = count_by(distinct_kinds(items), &|item, value| {
        item.kind().is_some_and(|k| k.eq_ignore_ascii_case(value))
    });

    SectionSummary {
        section: section.slug(),
        count: items.len(),
        load_failed,
        last_updated,
        categories,
        tags,
        types,
    }
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        if !self.data_dir.is_dir() {
            return Err(CliError::io(format!(
                "Data directory not found: {}",
                self.data_dir.display()
            )));
        }

        let set = CatalogSet::load_dir(&self.data_dir);
        let wanted: Vec<Section> = match self.section {
            Some(section) => vec![section],
            None => Section::ALL.to_vec(),
        };

        let sections: Vec<SectionSummary> = wanted
            .into_iter()
            .map(|section| {
                let load_failed = set.error_for(section).is_some();
                match section {
                    Section::Items => summarize(
                        section,
                        &set.items.items,
                        set.items.last_updated,
                        load_failed,
                    ),
                    Section::Worlds => summarize(
                        section,
                        &set.worlds.items,
                        set.worlds.last_updated,
                        load_failed,
                    ),
                    Section::Articles => summarize(
                        section,
                        &set.articles.items,
                        set.articles.last_updated,
                        load_failed,
                    ),
                    Section::Trends => summarize(
                        section,
                        &set.trends.items,
                        set.trends.last_updated,
                        load_failed,
                    ),
                }
            })
            .collect();

        if self.json {
            let response = InspectResponse { sections };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for summary in &sections {
            println!("{}: {} entries", summary.section, summary.count);
            if summary.load_failed {
                println!("  (document failed to load)");
            }
            if let Some(updated) = summary.last_updated {
                println!("  last updated: {}", updated.format("%Y-%m-%d %H:%M UTC"));
            }
            print_distribution("categories", &summary.categories);
            print_distribution("tags", &summary.tags);
            print_distribution("types", &summary.types);
        }

        Ok(())
    }
}

fn print_distribution(name: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    let rendered = counts
        .iter()
        .map(|(value, count)| format!("{value} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("  {name}: {rendered}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FashionItem;

    fn item(id: &str, category: &str, taste: &[&str], kind: &str) -> FashionItem {
        FashionItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: Some(category.to_string()),
            item_type: Some(kind.to_string()),
            taste: taste.iter().map(ToString::to_string).collect(),
            price: 0,
            likes: 0,
            thumbnail_url: None,
            booth_url: format!("https://booth.pm/ja/items/{id}"),
            shop_name: String::new(),
            is_r18: false,
        }
    }

    #[test]
    fn test_summarize_counts_distributions() {
        let items = vec![
            item("1", "womens", &["cyber"], "costume"),
            item("2", "womens", &["cyber", "street"], "avatar"),
            item("3", "mens", &[], "costume"),
        ];

        let summary = summarize(Section::Items, &items, None, false);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.categories["womens"], 2);
        assert_eq!(summary.categories["mens"], 1);
        assert_eq!(summary.tags["cyber"], 2);
        assert_eq!(summary.tags["street"], 1);
        assert_eq!(summary.types["costume"], 2);
    }
}
