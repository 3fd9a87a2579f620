//! List picker popup for selecting a filter value.
//!
//! One component serves all three single-value filter dimensions
//! (category, taste tag, item type); the parent decides which dimension
//! the selection applies to. The last list entry clears the dimension.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Which filter dimension a picker instance feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerDimension {
    /// Category selection (clear entry maps to the `all` sentinel).
    Category,
    /// Taste tag selection.
    Taste,
    /// Item type selection.
    Type,
}

impl PickerDimension {
    /// Popup title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Category => " Select Category ",
            Self::Taste => " Select Taste ",
            Self::Type => " Select Type ",
        }
    }
}

/// State for the filter value picker dialog.
#[derive(Debug, Clone)]
pub struct TagPicker {
    dimension: PickerDimension,
    /// Value slugs with display labels, in list order.
    options: Vec<(String, String)>,
    /// Index of the highlighted row (`options.len()` is the clear entry).
    selected: usize,
    list_state: ListState,
}

impl TagPicker {
    /// Creates a picker over `options` (slug, display label) pairs.
    ///
    /// When `current` names an option it starts highlighted, otherwise the
    /// first row does.
    #[must_use]
    pub fn new(
        dimension: PickerDimension,
        options: Vec<(String, String)>,
        current: Option<&str>,
    ) -> Self {
        let selected = current
            .and_then(|value| options.iter().position(|(slug, _)| slug == value))
            .unwrap_or(0);

        let mut list_state = ListState::default();
        list_state.select(Some(selected));

        Self {
            dimension,
            options,
            selected,
            list_state,
        }
    }

    /// The dimension this picker feeds.
    #[must_use]
    pub const fn dimension(&self) -> PickerDimension {
        self.dimension
    }

    fn previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            // Wrap to the clear entry at the bottom
            self.selected = self.options.len();
        }
        self.list_state.select(Some(self.selected));
    }

    fn next(&mut self) {
        if self.selected < self.options.len() {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
        self.list_state.select(Some(self.selected));
    }

    /// The highlighted slug, or `None` on the clear entry.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .get(self.selected)
            .map(|(slug, _)| slug.as_str())
    }
}

impl Component for TagPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Enter => match self.selected_value() {
                Some(value) => Some(ComponentEvent::ValueSelected(value.to_string())),
                None => Some(ComponentEvent::SelectionCleared),
            },
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(50, 60, area);

        // Clear the background area first
        f.render_widget(Clear, popup_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, popup_area);

        let mut items: Vec<ListItem> = self
            .options
            .iter()
            .map(|(slug, label)| {
                let line = Line::from(vec![
                    Span::raw("  "),
                    Span::raw(label.clone()),
                    Span::raw(" ("),
                    Span::styled(slug.clone(), Style::default().fg(theme.text_muted)),
                    Span::raw(")"),
                ]);
                ListItem::new(line)
            })
            .collect();

        // Clear entry at the end
        let clear_label = match self.dimension {
            PickerDimension::Category => "[ All ]",
            PickerDimension::Taste | PickerDimension::Type => "[ Clear ]",
        };
        items.push(ListItem::new(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                clear_label,
                Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])));

        let list = List::new(items)
            .block(
                Block::default()
                    .title(self.dimension.title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, popup_area, &mut list_state);

        let instructions_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height.saturating_sub(2),
            width: popup_area.width.saturating_sub(4),
            height: 1,
        };
        let instructions = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Navigate  "),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Select  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]));
        f.render_widget(instructions, instructions_area);
    }
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn picker() -> TagPicker {
        TagPicker::new(
            PickerDimension::Taste,
            vec![
                ("cyber".to_string(), "Cyberpunk".to_string()),
                ("gothic".to_string(), "Gothic".to_string()),
            ],
            None,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_emits_selected_value() {
        let mut p = picker();
        let event = p.handle_input(key(KeyCode::Enter));
        assert_eq!(event, Some(ComponentEvent::ValueSelected("cyber".to_string())));
    }

    #[test]
    fn test_clear_entry_emits_selection_cleared() {
        let mut p = picker();
        p.handle_input(key(KeyCode::Down));
        p.handle_input(key(KeyCode::Down));
        assert_eq!(p.selected_value(), None);

        let event = p.handle_input(key(KeyCode::Enter));
        assert_eq!(event, Some(ComponentEvent::SelectionCleared));
    }

    #[test]
    fn test_navigation_wraps_through_clear_entry() {
        let mut p = picker();
        p.handle_input(key(KeyCode::Up));
        // Wrapped to the clear entry below the two options
        assert_eq!(p.selected_value(), None);
        p.handle_input(key(KeyCode::Down));
        assert_eq!(p.selected_value(), Some("cyber"));
    }

    #[test]
    fn test_current_value_starts_highlighted() {
        let p = TagPicker::new(
            PickerDimension::Type,
            vec![
                ("avatar".to_string(), "Avatar".to_string()),
                ("costume".to_string(), "Costume".to_string()),
            ],
            Some("costume"),
        );
        assert_eq!(p.selected_value(), Some("costume"));
    }

    #[test]
    fn test_escape_cancels() {
        let mut p = picker();
        assert_eq!(p.handle_input(key(KeyCode::Esc)), Some(ComponentEvent::Cancelled));
    }
}
