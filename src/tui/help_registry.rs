//! Help registry for centralized keybinding definitions.
//!
//! This module loads help definitions from an embedded TOML file and
//! provides methods to query bindings by context for the status bar and
//! the help overlay.

use serde::Deserialize;
use std::collections::HashMap;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("../data/help.toml");

/// Context name constants.
pub mod contexts {
    /// Main card grid.
    pub const MAIN: &str = "main";
    /// Search input mode.
    pub const SEARCH: &str = "search";
    /// Filter value picker.
    pub const PICKER: &str = "picker";
    /// Entry detail overlay.
    pub const DETAIL: &str = "detail";
    /// Help overlay.
    pub const HELP: &str = "help";
}

/// A single keybinding definition
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (optional)
    pub hint: Option<String>,
    /// Priority for display order (lower = more important, shown first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

impl Binding {
    /// Key label combining primary and alternative keys.
    #[must_use]
    pub fn key_label(&self) -> String {
        if self.alt_keys.is_empty() {
            self.keys.join(",")
        } else {
            format!("{}/{}", self.keys.join(","), self.alt_keys.join(","))
        }
    }
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// Description of when this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

/// Root structure of the help TOML file
#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    #[allow(dead_code)]
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

/// Queryable registry over the embedded help definitions.
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    contexts: HashMap<String, Context>,
}

impl HelpRegistry {
    /// Parses the embedded help file.
    ///
    /// The file is a compile-time asset, so a parse failure is a build
    /// defect; an empty registry is returned rather than propagating.
    #[must_use]
    pub fn load() -> Self {
        let parsed: Result<HelpFile, _> = toml::from_str(HELP_TOML);
        Self {
            contexts: parsed.map(|f| f.contexts).unwrap_or_default(),
        }
    }

    /// The context registered under `name`, if any.
    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Bindings for `context`, sorted by priority.
    #[must_use]
    pub fn bindings(&self, context: &str) -> Vec<&Binding> {
        let mut bindings: Vec<&Binding> = self
            .contexts
            .get(context)
            .map(|c| c.bindings.iter().collect())
            .unwrap_or_default();
        bindings.sort_by_key(|b| b.priority);
        bindings
    }

    /// Up to `limit` (key label, hint) pairs for the status bar.
    #[must_use]
    pub fn status_bar_hints(&self, context: &str, limit: usize) -> Vec<(String, String)> {
        self.bindings(context)
            .into_iter()
            .take(limit)
            .map(|b| {
                let hint = b.hint.clone().unwrap_or_else(|| b.action.clone());
                (b.key_label(), hint)
            })
            .collect()
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_help_file_parses() {
        let registry = HelpRegistry::load();
        assert!(registry.context(contexts::MAIN).is_some());
        assert!(registry.context(contexts::SEARCH).is_some());
        assert!(registry.context(contexts::PICKER).is_some());
        assert!(registry.context(contexts::DETAIL).is_some());
        assert!(registry.context(contexts::HELP).is_some());
    }

    #[test]
    fn test_bindings_sorted_by_priority() {
        let registry = HelpRegistry::load();
        let bindings = registry.bindings(contexts::MAIN);
        assert!(!bindings.is_empty());
        assert!(bindings.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    #[test]
    fn test_status_bar_hints_limited() {
        let registry = HelpRegistry::load();
        let hints = registry.status_bar_hints(contexts::MAIN, 3);
        assert_eq!(hints.len(), 3);
        // Highest-priority binding is navigation
        assert_eq!(hints[0].1, "Move");
    }

    #[test]
    fn test_unknown_context_is_empty() {
        let registry = HelpRegistry::load();
        assert!(registry.bindings("nonexistent").is_empty());
    }
}
