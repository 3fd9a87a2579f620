//! Filter bar widget: section tabs plus the active filter controls.
//!
//! The active control in each dimension group is highlighted and its
//! siblings rendered inactive, mirroring the portal's filter buttons.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::{FilterState, Section, ALL_CATEGORIES};
use crate::models::{category_label, taste_label, type_label};

use super::Theme;

/// Filter bar widget.
pub struct FilterBar;

impl FilterBar {
    /// Recommended widget height including borders.
    pub const HEIGHT: u16 = 4;

    /// Render the section tabs and the current filter state.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        section: Section,
        state: &FilterState,
        search_mode: bool,
        theme: &Theme,
    ) {
        let mut tab_spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, s) in Section::ALL.into_iter().enumerate() {
            if i > 0 {
                tab_spans.push(Span::styled(" │ ", Style::default().fg(theme.text_muted)));
            }
            let style = if s == section {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.inactive)
            };
            tab_spans.push(Span::styled(s.title(), style));
        }

        let mut filter_spans: Vec<Span> = vec![Span::raw(" ")];
        Self::push_group(
            &mut filter_spans,
            "Category",
            if state.category.eq_ignore_ascii_case(ALL_CATEGORIES) {
                None
            } else {
                Some(category_label(&state.category).to_string())
            },
            theme,
        );
        Self::push_group(
            &mut filter_spans,
            "Taste",
            state.tag.as_deref().map(|t| taste_label(t).to_string()),
            theme,
        );
        Self::push_group(
            &mut filter_spans,
            "Type",
            state.kind.as_deref().map(|k| type_label(k).to_string()),
            theme,
        );
        Self::push_group(
            &mut filter_spans,
            "Sort",
            state.sort.map(|s| s.label().to_string()),
            theme,
        );

        // Search renders as an input field while typing
        filter_spans.push(Span::styled("Search: ", Style::default().fg(theme.primary)));
        if search_mode {
            filter_spans.push(Span::styled(
                format!("{}▏", state.query),
                Style::default().fg(theme.accent),
            ));
        } else if state.query.is_empty() {
            filter_spans.push(Span::styled("-", Style::default().fg(theme.inactive)));
        } else {
            filter_spans.push(Span::styled(
                state.query.clone(),
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let widget = Paragraph::new(vec![Line::from(tab_spans), Line::from(filter_spans)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(widget, area);
    }

    fn push_group(spans: &mut Vec<Span<'_>>, name: &'static str, value: Option<String>, theme: &Theme) {
        spans.push(Span::styled(
            format!("{name}: "),
            Style::default().fg(theme.primary),
        ));
        match value {
            Some(value) => spans.push(Span::styled(
                value,
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            )),
            None => spans.push(Span::styled("-", Style::default().fg(theme.inactive))),
        }
        spans.push(Span::raw("  "));
    }
}
