//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and
//! actions, connecting help text definitions with actual event handling
//! logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible actions in the application.
///
/// This enum represents every action a user can take in the browser. It
/// serves as the bridge between keyboard shortcuts and application
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    JumpToFirst,
    JumpToLast,

    // === SECTIONS ===
    NextSection,
    PreviousSection,

    // === FILTERS ===
    OpenCategoryPicker,
    OpenTastePicker,
    OpenTypePicker,
    ToggleSort,
    ToggleNewArrivals,
    StartSearch,
    ClearFilters,

    // === ENTRIES ===
    OpenDetail,
    CopyLink,

    // === DATA ===
    Reload,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::NextSection => "next_section",
            Self::PreviousSection => "previous_section",
            Self::OpenCategoryPicker => "open_category_picker",
            Self::OpenTastePicker => "open_taste_picker",
            Self::OpenTypePicker => "open_type_picker",
            Self::ToggleSort => "toggle_sort",
            Self::ToggleNewArrivals => "toggle_new_arrivals",
            Self::StartSearch => "start_search",
            Self::ClearFilters => "clear_filters",
            Self::OpenDetail => "open_detail",
            Self::CopyLink => "copy_link",
            Self::Reload => "reload",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// Maps key events to actions for the main browser context.
///
/// Popup components (pickers, detail, help) and the search input handle
/// their own keys; only keys that reach the main grid go through here.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Creates the registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Looks up the action bound to `key` in the main context.
    #[must_use]
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                Some(Action::NavigateUp)
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                Some(Action::NavigateDown)
            }
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                Some(Action::NavigateLeft)
            }
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                Some(Action::NavigateRight)
            }
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
                Some(Action::JumpToFirst)
            }
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => Some(Action::JumpToLast),
            (KeyCode::Tab, _) => Some(Action::NextSection),
            (KeyCode::BackTab, _) => Some(Action::PreviousSection),
            (KeyCode::Char('f'), KeyModifiers::NONE) => Some(Action::OpenCategoryPicker),
            (KeyCode::Char('t'), KeyModifiers::NONE) => Some(Action::OpenTastePicker),
            (KeyCode::Char('y'), KeyModifiers::NONE) => Some(Action::OpenTypePicker),
            (KeyCode::Char('s'), KeyModifiers::NONE) => Some(Action::ToggleSort),
            (KeyCode::Char('n'), KeyModifiers::NONE) => Some(Action::ToggleNewArrivals),
            (KeyCode::Char('/'), _) => Some(Action::StartSearch),
            (KeyCode::Char('x'), KeyModifiers::NONE) => Some(Action::ClearFilters),
            (KeyCode::Enter, _) => Some(Action::OpenDetail),
            (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Action::CopyLink),
            (KeyCode::Char('r'), KeyModifiers::NONE) => Some(Action::Reload),
            (KeyCode::Char('?'), _) => Some(Action::ToggleHelp),
            (KeyCode::Esc, _) => Some(Action::Cancel),
            (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
            _ => None,
        }
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup(key(KeyCode::Up)), Some(Action::NavigateUp));
        assert_eq!(
            registry.lookup(key(KeyCode::Char('j'))),
            Some(Action::NavigateDown)
        );
    }

    #[test]
    fn test_filter_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(key(KeyCode::Char('t'))),
            Some(Action::OpenTastePicker)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('/'))),
            Some(Action::StartSearch)
        );
        assert_eq!(
            registry.lookup(key(KeyCode::Char('x'))),
            Some(Action::ClearFilters)
        );
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup(key(KeyCode::Char('z'))), None);
    }
}
