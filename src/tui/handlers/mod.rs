//! Keyboard event handling and action dispatch.
//!
//! Every handler mutates exactly one dimension of the filter state (or one
//! piece of UI state), then synchronously recomputes the visible set, so
//! the grid never renders stale results.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::{SortOrder, ALL_CATEGORIES};
use crate::shortcuts::{Action, ShortcutRegistry};

use super::component::{Component, ComponentEvent};
use super::{AppState, DetailView, HelpOverlay, PickerDimension, Popup, TagPicker};

/// Handle one key event. Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.active_popup.is_some() {
        handle_popup_input(state, key);
        return Ok(false);
    }

    if state.search_mode {
        handle_search_input(state, key);
        return Ok(false);
    }

    let registry = ShortcutRegistry::new();
    if let Some(action) = registry.lookup(key) {
        return dispatch_action(state, action);
    }

    Ok(false)
}

/// Route input to the active popup and apply the event it emits.
fn handle_popup_input(state: &mut AppState, key: KeyEvent) {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum PopupKind {
        Category,
        Taste,
        Type,
        Detail,
        Help,
    }

    let Some(popup) = state.active_popup.as_mut() else {
        return;
    };

    let (kind, event) = match popup {
        Popup::CategoryPicker(picker) => (PopupKind::Category, picker.handle_input(key)),
        Popup::TastePicker(picker) => (PopupKind::Taste, picker.handle_input(key)),
        Popup::TypePicker(picker) => (PopupKind::Type, picker.handle_input(key)),
        Popup::Detail(view) => (PopupKind::Detail, view.handle_input(key)),
        Popup::Help(overlay) => (PopupKind::Help, overlay.handle_input(key)),
    };

    let Some(event) = event else { return };

    match (kind, event) {
        (PopupKind::Category, ComponentEvent::ValueSelected(value)) => {
            state.filter_state_mut().set_category(&value);
            state.close_popup();
            state.refresh_visible();
            state.set_status(format!("Category: {value}"));
        }
        (PopupKind::Category, ComponentEvent::SelectionCleared) => {
            state.filter_state_mut().set_category(ALL_CATEGORIES);
            state.close_popup();
            state.refresh_visible();
            state.set_status("Category: all");
        }
        (PopupKind::Taste, ComponentEvent::ValueSelected(value)) => {
            // Picking the active tag again clears it (repeat-select toggle)
            state.filter_state_mut().toggle_tag(&value);
            let message = match state.filter_state().tag {
                Some(tag) => format!("Taste: {tag}"),
                None => "Taste filter cleared".to_string(),
            };
            state.close_popup();
            state.refresh_visible();
            state.set_status(message);
        }
        (PopupKind::Taste, ComponentEvent::SelectionCleared) => {
            state.filter_state_mut().tag = None;
            state.close_popup();
            state.refresh_visible();
            state.set_status("Taste filter cleared");
        }
        (PopupKind::Type, ComponentEvent::ValueSelected(value)) => {
            state.filter_state_mut().toggle_kind(&value);
            let message = match state.filter_state().kind {
                Some(kind) => format!("Type: {kind}"),
                None => "Type filter cleared".to_string(),
            };
            state.close_popup();
            state.refresh_visible();
            state.set_status(message);
        }
        (PopupKind::Type, ComponentEvent::SelectionCleared) => {
            state.filter_state_mut().kind = None;
            state.close_popup();
            state.refresh_visible();
            state.set_status("Type filter cleared");
        }
        (PopupKind::Detail, ComponentEvent::LinkCopied) => {
            copy_selected_link(state);
        }
        (_, ComponentEvent::Cancelled | ComponentEvent::Closed) => {
            state.close_popup();
        }
        _ => {}
    }
}

/// Live search input: every keystroke mutates the query and re-filters.
fn handle_search_input(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            state.search_mode = false;
            let query = state.filter_state().query;
            if query.is_empty() {
                state.set_status("Search cleared");
            } else {
                state.set_status(format!("Search: {query}"));
            }
        }
        KeyCode::Esc => {
            state.filter_state_mut().query.clear();
            state.search_mode = false;
            state.refresh_visible();
            state.set_status("Search cleared");
        }
        KeyCode::Backspace => {
            state.filter_state_mut().query.pop();
            state.refresh_visible();
        }
        KeyCode::Char(c) => {
            state.filter_state_mut().query.push(c);
            state.refresh_visible();
        }
        _ => {}
    }
}

/// Dispatch a main-context action. Returns true when the application
/// should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::NavigateUp => {
            state.selected = state.selected.saturating_sub(state.grid_columns.max(1));
        }
        Action::NavigateDown => {
            let next = state.selected + state.grid_columns.max(1);
            if next < state.visible.len() {
                state.selected = next;
            }
        }
        Action::NavigateLeft => {
            state.selected = state.selected.saturating_sub(1);
        }
        Action::NavigateRight => {
            if state.selected + 1 < state.visible.len() {
                state.selected += 1;
            }
        }
        Action::JumpToFirst => state.selected = 0,
        Action::JumpToLast => state.selected = state.visible.len().saturating_sub(1),
        Action::NextSection => state.switch_section(state.section.next()),
        Action::PreviousSection => state.switch_section(state.section.previous()),
        Action::OpenCategoryPicker => open_picker(state, PickerDimension::Category),
        Action::OpenTastePicker => open_picker(state, PickerDimension::Taste),
        Action::OpenTypePicker => open_picker(state, PickerDimension::Type),
        Action::ToggleSort => {
            // Cycle: source order -> newest -> oldest -> source order
            let next = match state.filter_state().sort {
                None => Some(SortOrder::Newest),
                Some(SortOrder::Newest) => Some(SortOrder::Oldest),
                Some(SortOrder::Oldest) => None,
            };
            state.filter_state_mut().sort = next;
            state.refresh_visible();
            state.set_status(match next {
                Some(order) => format!("Sort: {}", order.label()),
                None => "Sort: source order".to_string(),
            });
        }
        Action::ToggleNewArrivals => {
            if state.section == crate::catalog::Section::Items {
                state.new_arrivals_only = !state.new_arrivals_only;
                state.refresh_visible();
                state.set_status(if state.new_arrivals_only {
                    format!("New arrivals: latest {}", state.config.ui.new_arrivals)
                } else {
                    "Showing all items".to_string()
                });
            } else {
                state.set_status("New arrivals view is only for the fashion section");
            }
        }
        Action::StartSearch => {
            state.search_mode = true;
            state.clear_messages();
        }
        Action::ClearFilters => {
            state.filter_state_mut().clear();
            state.refresh_visible();
            state.set_status("Filters cleared");
        }
        Action::OpenDetail => {
            if let Some(card) = state.selected_card() {
                state.active_popup = Some(Popup::Detail(DetailView::new(card)));
            }
        }
        Action::CopyLink => copy_selected_link(state),
        Action::Reload => state.reload(),
        Action::ToggleHelp => {
            state.active_popup = Some(Popup::Help(HelpOverlay::new()));
        }
        Action::Cancel => state.clear_messages(),
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }

    Ok(false)
}

fn open_picker(state: &mut AppState, dimension: PickerDimension) {
    let filter_state = state.filter_state();
    let (options, current) = match dimension {
        PickerDimension::Category => {
            let current = if filter_state.category.eq_ignore_ascii_case(ALL_CATEGORIES) {
                None
            } else {
                Some(filter_state.category.clone())
            };
            (state.category_options(), current)
        }
        PickerDimension::Taste => (state.taste_options(), filter_state.tag.clone()),
        PickerDimension::Type => (state.type_options(), filter_state.kind.clone()),
    };

    if options.is_empty() {
        state.set_status("No values to filter by in this section");
        return;
    }

    let picker = TagPicker::new(dimension, options, current.as_deref());
    state.active_popup = Some(match dimension {
        PickerDimension::Category => Popup::CategoryPicker(picker),
        PickerDimension::Taste => Popup::TastePicker(picker),
        PickerDimension::Type => Popup::TypePicker(picker),
    });
}

/// Copies the selected entry's outbound link to the system clipboard.
fn copy_selected_link(state: &mut AppState) {
    let Some(link) = state.selected_link() else {
        state.set_status("Selected entry has no link");
        return;
    };

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(link.clone())) {
        Ok(()) => state.set_status(format!("Copied: {link}")),
        Err(e) => state.set_error(format!("Clipboard unavailable: {e}")),
    }
}
