//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the catalog document file names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "VRC-LIFE";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "vrclife";

/// File name of the fashion item catalog document.
pub const ITEMS_FILE: &str = "items.json";

/// File name of the world catalog document.
pub const WORLDS_FILE: &str = "worlds.json";

/// File name of the knowledge article catalog document.
pub const ARTICLES_FILE: &str = "knowledge.json";

/// File name of the trend post catalog document.
pub const TRENDS_FILE: &str = "trends.json";
