//! Component trait pattern for TUI components.
//!
//! Popup components are self-contained: they manage their own state,
//! handle keyboard input, and emit events the parent applies to the
//! application state.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the
/// parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent. Returns `None` if input was handled internally without
    /// needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components and applied by the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// User picked a filter value in a picker popup.
    ValueSelected(String),

    /// User picked the picker's clear entry.
    SelectionCleared,

    /// User asked for the selected entry's link to be copied.
    LinkCopied,

    /// User cancelled without making changes.
    Cancelled,

    /// Component closed naturally (e.g. help overlay dismissed).
    Closed,
}
