//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use vrclife::models::{Article, FashionItem, TrendPost, World};

/// Creates a fashion item with the given classification.
pub fn test_item(
    id: &str,
    name: &str,
    category: &str,
    item_type: &str,
    taste: &[&str],
    price: u32,
    likes: u32,
) -> FashionItem {
    FashionItem {
        id: id.to_string(),
        name: name.to_string(),
        category: Some(category.to_string()),
        item_type: Some(item_type.to_string()),
        taste: taste.iter().map(ToString::to_string).collect(),
        price,
        likes,
        thumbnail_url: Some(format!("https://booth.pximg.net/{id}.jpg")),
        booth_url: format!("https://booth.pm/ja/items/{id}"),
        shop_name: "test-shop".to_string(),
        is_r18: false,
    }
}

/// The two-item collection from the filter engine's reference scenario.
pub fn scenario_items() -> Vec<FashionItem> {
    vec![
        FashionItem {
            id: "1".to_string(),
            name: "Cyber Suit".to_string(),
            category: Some("avatar".to_string()),
            item_type: None,
            taste: vec!["cyber".to_string()],
            price: 1000,
            likes: 0,
            thumbnail_url: None,
            booth_url: "https://booth.pm/ja/items/1".to_string(),
            shop_name: String::new(),
            is_r18: false,
        },
        FashionItem {
            id: "2".to_string(),
            name: "Wa Dress".to_string(),
            category: Some("costume".to_string()),
            item_type: None,
            taste: vec!["wa-modern".to_string()],
            price: 2000,
            likes: 0,
            thumbnail_url: None,
            booth_url: "https://booth.pm/ja/items/2".to_string(),
            shop_name: String::new(),
            is_r18: false,
        },
    ]
}

/// A world with the given sheet date (possibly unparsable).
pub fn test_world(name: &str, category: &str, date: Option<&str>) -> World {
    World {
        name: name.to_string(),
        url: format!("https://vrchat.com/home/world/wrld_{name}"),
        category: Some(category.to_string()),
        date: date.map(String::from),
        author: Some("author".to_string()),
        author_url: None,
        description: Some(format!("{name} description")),
        thumbnail_url: None,
        fetched_at: None,
    }
}

/// A knowledge article.
pub fn test_article(id: &str, title: &str, category: &str, tags: &[&str]) -> Article {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "subtitle": "subtitle",
        "category": category,
        "tags": tags,
        "excerpt": format!("{title} excerpt"),
        "thumbnail_url": "https://example.com/thumb.jpg",
    }))
    .expect("article fixture should deserialize")
}

/// A trend post.
pub fn test_trend(title: &str, date: &str, tags: &[&str]) -> TrendPost {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "content": format!("{title} content"),
        "tags": tags,
        "sourceUrl": "https://example.com/source",
        "date": date,
    }))
    .expect("trend fixture should deserialize")
}

/// Writes a wrapped items document into `dir`, returning its path.
pub fn write_items_document(dir: &TempDir, items: &[FashionItem]) -> PathBuf {
    let path = dir.path().join("items.json");
    let document = serde_json::json!({
        "items": items,
        "lastUpdated": "2025-08-01T03:00:00Z",
    });
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

/// Writes a bare-array worlds document into `dir`, returning its path.
pub fn write_worlds_document(dir: &TempDir, worlds: &[World]) -> PathBuf {
    let path = dir.path().join("worlds.json");
    fs::write(&path, serde_json::to_string_pretty(&worlds).unwrap()).unwrap();
    path
}

/// Writes a bare-array articles document into `dir`, returning its path.
pub fn write_articles_document(dir: &TempDir, articles: &[Article]) -> PathBuf {
    let path = dir.path().join("knowledge.json");
    fs::write(&path, serde_json::to_string_pretty(&articles).unwrap()).unwrap();
    path
}

/// Writes a bare-array trends document into `dir`, returning its path.
pub fn write_trends_document(dir: &TempDir, trends: &[TrendPost]) -> PathBuf {
    let path = dir.path().join("trends.json");
    fs::write(&path, serde_json::to_string_pretty(&trends).unwrap()).unwrap();
    path
}

/// Creates a temp data directory with all four documents populated.
pub fn full_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    write_items_document(
        &dir,
        &[
            test_item("1", "Cyber Suit", "womens", "costume", &["cyber"], 1500, 820),
            test_item("2", "Wa Dress", "womens", "costume", &["wa-modern"], 2000, 340),
            test_item("3", "Boy Hoodie", "mens", "costume", &["street"], 900, 150),
        ],
    );
    write_worlds_document(
        &dir,
        &[
            test_world("Pancake House", "CHILL", Some("2024-05-01")),
            test_world("Maze Runner", "GAME", Some("2025-02-10")),
            test_world("Mystery Attic", "HORROR", Some("unknown")),
        ],
    );
    write_articles_document(
        &dir,
        &[
            test_article("1", "Getting Started", "VRC START GUIDE", &["beginner"]),
            test_article("2", "Avatar Setup", "UNITY BASICS", &["unity", "avatar"]),
        ],
    );
    write_trends_document(
        &dir,
        &[test_trend("New event announced", "2025-07-15", &["#Event"])],
    );

    dir
}
