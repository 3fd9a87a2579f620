//! Scrollable help overlay listing every context's keybindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::help_registry::{contexts, HelpRegistry};
use super::tag_picker::centered_rect;
use super::Theme;

/// Help overlay component.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    registry: HelpRegistry,
    scroll: u16,
}

impl HelpOverlay {
    /// Creates the overlay from the embedded help definitions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: HelpRegistry::load(),
            scroll: 0,
        }
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(ComponentEvent::Closed),
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(70, 80, area);

        f.render_widget(Clear, popup_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        for context_name in [
            contexts::MAIN,
            contexts::SEARCH,
            contexts::PICKER,
            contexts::DETAIL,
            contexts::HELP,
        ] {
            let Some(context) = self.registry.context(context_name) else {
                continue;
            };
            lines.push(Line::from(Span::styled(
                context.name.clone(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for binding in self.registry.bindings(context_name) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<16}", binding.key_label()),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(binding.action.clone(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        let widget = Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(widget, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_question_mark_closes() {
        let mut overlay = HelpOverlay::new();
        let event = overlay.handle_input(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
        assert_eq!(event, Some(ComponentEvent::Closed));
    }

    #[test]
    fn test_scroll_does_not_underflow() {
        let mut overlay = HelpOverlay::new();
        overlay.handle_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(overlay.scroll, 0);
    }
}
