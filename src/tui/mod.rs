//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod card_grid;
pub mod component;
pub mod detail;
pub mod filter_bar;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod status_bar;
pub mod tag_picker;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::cards::{
    build_article_card, build_item_card, build_trend_card, build_world_card, CardView,
};
use crate::catalog::{filter_indices, CatalogSet, FilterState, Section};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::{category_label, taste_label, type_label};

// Re-export TUI components
pub use card_grid::CardGrid;
pub use component::{Component, ComponentEvent};
pub use detail::DetailView;
pub use filter_bar::FilterBar;
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use tag_picker::{PickerDimension, TagPicker};
pub use theme::Theme;

/// Active popup over the main grid. Only one can be open at a time.
#[derive(Debug)]
pub enum Popup {
    /// Category filter picker
    CategoryPicker(TagPicker),
    /// Taste tag filter picker
    TastePicker(TagPicker),
    /// Item type filter picker
    TypePicker(TagPicker),
    /// Entry detail overlay
    Detail(DetailView),
    /// Help overlay
    Help(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Loaded catalog documents
    pub catalogs: CatalogSet,
    /// Directory the documents were loaded from (used by reload)
    pub data_dir: PathBuf,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently displayed section
    pub section: Section,
    /// Per-section filter state; the UI owns one value per section and
    /// feeds it through the engine on every interaction
    filters: HashMap<Section, FilterState>,
    /// Indices into the current section's collection, in render order.
    /// Invariant: always equals `filter_indices(collection, filter_state)`
    /// as of the last state mutation.
    pub visible: Vec<usize>,
    /// Selected position within `visible`
    pub selected: usize,
    /// Grid columns at the last known terminal size (for row navigation)
    pub grid_columns: usize,
    /// Currently active popup (if any)
    pub active_popup: Option<Popup>,
    /// Whether keystrokes feed the search query
    pub search_mode: bool,
    /// Show only the newest N entries of the items section (the portal's
    /// NEW ARRIVALS strip)
    pub new_arrivals_only: bool,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` over loaded catalogs.
    #[must_use]
    pub fn new(catalogs: CatalogSet, data_dir: PathBuf, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let section = config.ui.startup_section();

        let mut state = Self {
            catalogs,
            data_dir,
            theme,
            section,
            filters: HashMap::new(),
            visible: Vec::new(),
            selected: 0,
            grid_columns: 1,
            active_popup: None,
            search_mode: false,
            new_arrivals_only: false,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            config,
            should_quit: false,
        };
        state.refresh_visible();
        state.surface_load_error();
        if state.config.ui.show_help_on_startup {
            state.active_popup = Some(Popup::Help(HelpOverlay::new()));
        }
        state
    }

    /// The current section's filter state.
    #[must_use]
    pub fn filter_state(&self) -> FilterState {
        self.filters
            .get(&self.section)
            .cloned()
            .unwrap_or_default()
    }

    /// Mutable access to the current section's filter state.
    pub fn filter_state_mut(&mut self) -> &mut FilterState {
        self.filters.entry(self.section).or_default()
    }

    /// Recomputes the visible set from the current section and filter
    /// state. Every mutating handler calls this before the next draw.
    pub fn refresh_visible(&mut self) {
        let state = self.filter_state();
        self.visible = match self.section {
            Section::Items => filter_indices(&self.catalogs.items.items, &state),
            Section::Worlds => filter_indices(&self.catalogs.worlds.items, &state),
            Section::Articles => filter_indices(&self.catalogs.articles.items, &state),
            Section::Trends => filter_indices(&self.catalogs.trends.items, &state),
        };
        // New-arrivals view: the items document is ordered newest-first,
        // so the strip is simply the head of the filtered set
        if self.new_arrivals_only && self.section == Section::Items {
            self.visible.truncate(self.config.ui.new_arrivals);
        }
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// Shows the load failure for the current section, if one was
    /// recorded.
    fn surface_load_error(&mut self) {
        if let Some(err) = self.catalogs.error_for(self.section) {
            self.error_message = Some(format!("Failed to load data. ({err})"));
        }
    }

    /// Cards for the visible set, in render order.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<CardView> {
        self.visible
            .iter()
            .filter_map(|&i| self.card_at(i))
            .collect()
    }

    /// Card for one collection index of the current section.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<CardView> {
        match self.section {
            Section::Items => self.catalogs.items.items.get(index).map(build_item_card),
            Section::Worlds => self.catalogs.worlds.items.get(index).map(build_world_card),
            Section::Articles => self
                .catalogs
                .articles
                .items
                .get(index)
                .map(build_article_card),
            Section::Trends => self.catalogs.trends.items.get(index).map(build_trend_card),
        }
    }

    /// Card for the currently selected entry.
    #[must_use]
    pub fn selected_card(&self) -> Option<CardView> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.card_at(i))
    }

    /// Outbound link of the currently selected entry.
    #[must_use]
    pub fn selected_link(&self) -> Option<String> {
        self.selected_card().and_then(|card| card.link)
    }

    /// Empty-state message for the current section: the fixed failure
    /// text when the section failed to load, the no-match text otherwise.
    #[must_use]
    pub fn empty_message(&self) -> String {
        if self.catalogs.error_for(self.section).is_some() {
            "Failed to load data.".to_string()
        } else {
            match self.section {
                Section::Items => "No items found.".to_string(),
                Section::Worlds => "No worlds found.".to_string(),
                Section::Articles => "No articles found.".to_string(),
                Section::Trends => "No trend posts yet.".to_string(),
            }
        }
    }

    /// Distinct category options of the current section, as
    /// (slug, display label) pairs.
    #[must_use]
    pub fn category_options(&self) -> Vec<(String, String)> {
        let slugs = match self.section {
            Section::Items => crate::catalog::filter::distinct_categories(&self.catalogs.items.items),
            Section::Worlds => {
                crate::catalog::filter::distinct_categories(&self.catalogs.worlds.items)
            }
            Section::Articles => {
                crate::catalog::filter::distinct_categories(&self.catalogs.articles.items)
            }
            Section::Trends => {
                crate::catalog::filter::distinct_categories(&self.catalogs.trends.items)
            }
        };
        slugs
            .into_iter()
            .map(|slug| {
                let label = category_label(&slug).to_string();
                (slug, label)
            })
            .collect()
    }

    /// Distinct tag options of the current section.
    #[must_use]
    pub fn taste_options(&self) -> Vec<(String, String)> {
        let slugs = match self.section {
            Section::Items => crate::catalog::filter::distinct_tags(&self.catalogs.items.items),
            Section::Worlds => crate::catalog::filter::distinct_tags(&self.catalogs.worlds.items),
            Section::Articles => {
                crate::catalog::filter::distinct_tags(&self.catalogs.articles.items)
            }
            Section::Trends => crate::catalog::filter::distinct_tags(&self.catalogs.trends.items),
        };
        slugs
            .into_iter()
            .map(|slug| {
                let label = taste_label(&slug).to_string();
                (slug, label)
            })
            .collect()
    }

    /// Distinct type options of the current section.
    #[must_use]
    pub fn type_options(&self) -> Vec<(String, String)> {
        let slugs = match self.section {
            Section::Items => crate::catalog::filter::distinct_kinds(&self.catalogs.items.items),
            Section::Worlds => crate::catalog::filter::distinct_kinds(&self.catalogs.worlds.items),
            Section::Articles => {
                crate::catalog::filter::distinct_kinds(&self.catalogs.articles.items)
            }
            Section::Trends => crate::catalog::filter::distinct_kinds(&self.catalogs.trends.items),
        };
        slugs
            .into_iter()
            .map(|slug| {
                let label = type_label(&slug).to_string();
                (slug, label)
            })
            .collect()
    }

    /// Replaces the catalogs wholesale from the data directory.
    pub fn reload(&mut self) {
        self.catalogs = CatalogSet::load_dir(&self.data_dir);
        self.error_message = None;
        self.refresh_visible();
        self.surface_load_error();
        if self.error_message.is_none() {
            self.set_status(format!(
                "Reloaded {} entries",
                self.catalogs.section_len(self.section)
            ));
        }
    }

    /// Switches to `section`, recomputing the visible set.
    pub fn switch_section(&mut self, section: Section) {
        self.section = section;
        self.selected = 0;
        self.error_message = None;
        self.refresh_visible();
        self.surface_load_error();
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }

    /// Close the currently active popup
    pub fn close_popup(&mut self) {
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Track the grid width so row navigation matches what is on screen
        let size = terminal.size()?;
        state.grid_columns = CardGrid::columns(size.width);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Title bar
            Constraint::Length(FilterBar::HEIGHT), // Section tabs + filters
            Constraint::Min(8),                    // Card grid
            Constraint::Length(StatusBar::HEIGHT), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    FilterBar::render(
        f,
        chunks[1],
        state.section,
        &state.filter_state(),
        state.search_mode,
        &state.theme,
    );

    let cards = state.visible_cards();
    CardGrid::render(
        f,
        chunks[2],
        &cards,
        state.selected,
        &state.empty_message(),
        &state.theme,
    );

    StatusBar::render(f, chunks[3], state, &state.theme);

    // Render popup if active
    if let Some(popup) = &state.active_popup {
        let area = f.area();
        match popup {
            Popup::CategoryPicker(picker)
            | Popup::TastePicker(picker)
            | Popup::TypePicker(picker) => picker.render(f, area, &state.theme),
            Popup::Detail(view) => view.render(f, area, &state.theme),
            Popup::Help(overlay) => overlay.render(f, area, &state.theme),
        }
    }
}

/// Render title bar with the app name and current section
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = format!(" {} — {} ", APP_NAME, state.section.title());

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}
