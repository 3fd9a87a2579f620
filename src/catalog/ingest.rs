//! Ingest-time cleanup of raw scraped item lists.
//!
//! Mirrors the pipeline step that runs between scraping and publishing:
//! adult-flagged items are excluded outright, items below the popularity
//! threshold are dropped, and duplicate ids keep their first occurrence.

use std::collections::HashSet;

use crate::models::FashionItem;

/// Default minimum like count for an item to be published.
pub const DEFAULT_MIN_LIKES: u32 = 100;

/// Counts of what a cleanup pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Items in the raw input.
    pub input: usize,
    /// Items removed by the adult-content exclusion.
    pub r18_removed: usize,
    /// Items removed for falling below the like threshold.
    pub low_likes_removed: usize,
    /// Items removed as duplicate ids.
    pub duplicates_removed: usize,
    /// Items surviving the pass.
    pub output: usize,
}

/// Applies the publish filter to a raw item list.
///
/// Order of surviving items is preserved. The R18 flag is consumed here:
/// survivors are emitted with it cleared so it never reaches a published
/// document.
pub fn clean(raw: Vec<FashionItem>, min_likes: u32) -> (Vec<FashionItem>, IngestReport) {
    let mut report = IngestReport {
        input: raw.len(),
        ..IngestReport::default()
    };

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut cleaned = Vec::with_capacity(raw.len());

    for mut item in raw {
        if item.is_r18 {
            report.r18_removed += 1;
            continue;
        }
        if item.likes < min_likes {
            report.low_likes_removed += 1;
            continue;
        }
        if !seen_ids.insert(item.id.clone()) {
            report.duplicates_removed += 1;
            continue;
        }
        item.is_r18 = false;
        cleaned.push(item);
    }

    report.output = cleaned.len();
    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, likes: u32, is_r18: bool) -> FashionItem {
        FashionItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            category: None,
            item_type: None,
            taste: Vec::new(),
            price: 1000,
            likes,
            thumbnail_url: None,
            booth_url: format!("https://booth.pm/ja/items/{id}"),
            shop_name: String::new(),
            is_r18,
        }
    }

    #[test]
    fn test_clean_applies_all_rules() {
        let raw = vec![
            item("1", 200, false),
            item("2", 50, false),  // below threshold
            item("3", 300, true),  // adult-flagged
            item("1", 200, false), // duplicate id
        ];

        let (cleaned, report) = clean(raw, DEFAULT_MIN_LIKES);

        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].id, "1");
        assert_eq!(report.input, 4);
        assert_eq!(report.r18_removed, 1);
        assert_eq!(report.low_likes_removed, 1);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(report.output, 1);
    }

    #[test]
    fn test_clean_preserves_order() {
        let raw = vec![item("b", 500, false), item("a", 400, false)];
        let (cleaned, _) = clean(raw, 100);
        let ids: Vec<&str> = cleaned.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_clean_zero_threshold_keeps_unliked_items() {
        let raw = vec![item("1", 0, false)];
        let (cleaned, report) = clean(raw, 0);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(report.low_likes_removed, 0);
    }
}
