//! Detail overlay for the selected card.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::cards::CardView;

use super::component::{Component, ComponentEvent};
use super::tag_picker::centered_rect;
use super::Theme;

/// Detail popup showing every field of one card.
#[derive(Debug, Clone)]
pub struct DetailView {
    card: CardView,
}

impl DetailView {
    /// Creates the detail view for `card`.
    #[must_use]
    pub const fn new(card: CardView) -> Self {
        Self { card }
    }

    /// The outbound link of the shown entry, if it has one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.card.link.as_deref()
    }
}

impl Component for DetailView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(ComponentEvent::Closed),
            KeyCode::Char('c') => self.card.link.is_some().then_some(ComponentEvent::LinkCopied),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = centered_rect(70, 60, area);

        f.render_widget(Clear, popup_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, popup_area);

        let card = &self.card;
        let mut lines: Vec<Line> = Vec::new();

        if let Some(badge) = &card.badge {
            lines.push(Line::from(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(theme.primary),
            )));
        }
        if let Some(subtitle) = &card.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(theme.text_secondary),
            )));
        }
        if let Some(meta) = &card.meta {
            lines.push(Line::from(Span::styled(
                meta.clone(),
                Style::default().fg(theme.text),
            )));
        }
        if !card.tags.is_empty() {
            lines.push(Line::from(Span::styled(
                card.tags
                    .iter()
                    .map(|t| format!("#{}", t.trim_start_matches('#')))
                    .collect::<Vec<_>>()
                    .join(" "),
                Style::default().fg(theme.accent),
            )));
        }
        if let Some(body) = &card.body {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                body.clone(),
                Style::default().fg(theme.text),
            )));
        }
        match &card.thumbnail {
            Some(url) => lines.push(Line::from(Span::styled(
                format!("Image: {url}"),
                Style::default().fg(theme.text_muted),
            ))),
            None => lines.push(Line::from(Span::styled(
                "(no image)",
                Style::default().fg(theme.text_muted),
            ))),
        }
        if let Some(link) = &card.link {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Link: ", Style::default().fg(theme.primary)),
                Span::styled(link.clone(), Style::default().fg(theme.text)),
            ]));
            lines.push(Line::from(Span::styled(
                "c: Copy link  Esc: Close",
                Style::default().fg(theme.text_muted),
            )));
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Esc: Close",
                Style::default().fg(theme.text_muted),
            )));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(format!(" {} ", card.title))
                    .borders(Borders::ALL)
                    .border_style(
                        Style::default()
                            .fg(theme.primary)
                            .add_modifier(Modifier::BOLD),
                    ),
            );

        f.render_widget(widget, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_escape_closes() {
        let mut view = DetailView::new(CardView::default());
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(ComponentEvent::Closed));
    }

    #[test]
    fn test_copy_requires_a_link() {
        let mut without_link = DetailView::new(CardView::default());
        assert_eq!(without_link.handle_input(key(KeyCode::Char('c'))), None);

        let mut with_link = DetailView::new(CardView {
            link: Some("https://booth.pm/ja/items/1".to_string()),
            ..CardView::default()
        });
        assert_eq!(
            with_link.handle_input(key(KeyCode::Char('c'))),
            Some(ComponentEvent::LinkCopied)
        );
    }
}
