//! Status bar widget for messages, catalog counts, and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::HelpRegistry;
use super::{AppState, Popup, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Recommended widget height including borders.
    pub const HEIGHT: u16 = 4;

    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: error, status message, or the count display
        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(state.status_message.clone()));
        } else {
            lines.push(Self::count_line(state, theme));
        }

        // Help line at the bottom
        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Count plus optional last-updated display, derived from the visible
    /// set and document metadata; each part no-ops when absent.
    fn count_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{} items", state.visible.len()),
            Style::default().fg(theme.text_secondary),
        )];

        if state.visible.len() != state.catalogs.section_len(state.section) {
            spans.push(Span::styled(
                format!(" (of {})", state.catalogs.section_len(state.section)),
                Style::default().fg(theme.text_muted),
            ));
        }

        if let Some(updated) = state.catalogs.last_updated(state.section) {
            spans.push(Span::styled(
                format!("  Last Updated: {}", updated.format("%Y/%m/%d")),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let registry = HelpRegistry::load();
        let context = Self::current_context(state);

        let hints = registry.status_bar_hints(context, 5);
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        if hints.is_empty() {
            spans.push(Span::raw("Press ? for help"));
            return Line::from(spans);
        }

        for (i, (key, hint)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(hint));
        }

        if context == super::help_registry::contexts::MAIN {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                "?",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }

    /// Get the current help context name based on application state
    fn current_context(state: &AppState) -> &'static str {
        use super::help_registry::contexts;

        if state.search_mode {
            return contexts::SEARCH;
        }
        match &state.active_popup {
            Some(Popup::CategoryPicker(_) | Popup::TastePicker(_) | Popup::TypePicker(_)) => {
                contexts::PICKER
            }
            Some(Popup::Detail(_)) => contexts::DETAIL,
            Some(Popup::Help(_)) => contexts::HELP,
            None => contexts::MAIN,
        }
    }
}
