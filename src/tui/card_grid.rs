//! Card grid widget.
//!
//! Renders the visible card set as a fixed-cell grid, fully replacing the
//! area contents every frame. The grid scrolls by whole rows to keep the
//! selected card in view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::cards::CardView;

use super::Theme;

/// Cell width of one card, borders included.
const CARD_WIDTH: u16 = 38;

/// Cell height of one card, borders included.
const CARD_HEIGHT: u16 = 8;

/// Card grid widget.
pub struct CardGrid;

impl CardGrid {
    /// Number of card columns that fit in `width`.
    #[must_use]
    pub fn columns(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    /// Render the grid, highlighting `selected` (an index into `cards`).
    ///
    /// An empty `cards` slice renders `empty_message` centered instead —
    /// the defined empty state, shared by "no matches" and "failed to
    /// load".
    pub fn render(
        f: &mut Frame,
        area: Rect,
        cards: &[CardView],
        selected: usize,
        empty_message: &str,
        theme: &Theme,
    ) {
        if cards.is_empty() {
            Self::render_empty(f, area, empty_message, theme);
            return;
        }

        let columns = Self::columns(area.width);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // Scroll by whole rows so the selected card stays on screen
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

        for (slot, (index, card)) in cards
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(visible_rows * columns)
            .enumerate()
        {
            let row = slot / columns;
            let col = slot % columns;
            let cell = Rect {
                x: area.x + (col as u16) * CARD_WIDTH,
                y: area.y + (row as u16) * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width.saturating_sub((col as u16) * CARD_WIDTH)),
                height: CARD_HEIGHT.min(area.height.saturating_sub((row as u16) * CARD_HEIGHT)),
            };
            if cell.width < 10 || cell.height < 3 {
                continue;
            }
            Self::render_card(f, cell, card, index == selected, theme);
        }
    }

    fn render_card(f: &mut Frame, area: Rect, card: &CardView, selected: bool, theme: &Theme) {
        let border_style = if selected {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };

        let mut lines: Vec<Line> = Vec::new();

        // Badge and meta on one line, mirroring the card corner badge
        let mut top_spans: Vec<Span> = Vec::new();
        if let Some(badge) = &card.badge {
            top_spans.push(Span::styled(
                format!("[{badge}]"),
                Style::default().fg(theme.primary),
            ));
            top_spans.push(Span::raw(" "));
        }
        if let Some(meta) = &card.meta {
            top_spans.push(Span::styled(
                meta.clone(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        if !top_spans.is_empty() {
            lines.push(Line::from(top_spans));
        }

        lines.push(Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )));

        if let Some(subtitle) = &card.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().fg(theme.text_muted),
            )));
        }

        if !card.tags.is_empty() {
            let tag_line = card
                .tags
                .iter()
                .map(|t| format!("#{}", t.trim_start_matches('#')))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(Span::styled(
                tag_line,
                Style::default().fg(theme.accent),
            )));
        }

        if let Some(body) = &card.body {
            lines.push(Line::from(Span::styled(
                body.clone(),
                Style::default().fg(theme.text_secondary),
            )));
        } else if card.thumbnail.is_none() {
            // Same per-field degradation as the portal's broken-image case
            lines.push(Line::from(Span::styled(
                "(no image)",
                Style::default().fg(theme.text_muted),
            )));
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        f.render_widget(widget, area);
    }

    fn render_empty(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Try changing the filters",
                Style::default().fg(theme.text_muted),
            )),
        ];

        let widget = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().bg(theme.background));
        f.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_never_zero() {
        assert_eq!(CardGrid::columns(0), 1);
        assert_eq!(CardGrid::columns(10), 1);
    }

    #[test]
    fn test_columns_scale_with_width() {
        assert_eq!(CardGrid::columns(CARD_WIDTH * 3), 3);
        assert_eq!(CardGrid::columns(CARD_WIDTH * 3 + 5), 3);
    }
}
