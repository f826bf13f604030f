//! Filter bar: search box, status filter and date range.

use super::constants::SEARCH_PLACEHOLDER;
use super::styles::TableStyles;
use crate::model::FilterState;
use crate::state::SearchMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter bar widget.
///
/// While search is being edited the box shows a block cursor; otherwise it
/// shows the current text, or the placeholder when empty.
pub struct FilterBar<'a> {
    filters: &'a FilterState,
    search: &'a SearchMode,
    styles: &'a TableStyles,
}

impl<'a> FilterBar<'a> {
    /// Bar for `filters` and the search mode.
    pub fn new(
        filters: &'a FilterState,
        search: &'a SearchMode,
        styles: &'a TableStyles,
    ) -> Self {
        Self {
            filters,
            search,
            styles,
        }
    }

    fn search_spans(&self) -> Vec<Span<'static>> {
        match self.search {
            SearchMode::Typing(input) => {
                let before: String = input.text().chars().take(input.cursor()).collect();
                let mut after = input.text().chars().skip(input.cursor());
                let under = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
                let rest: String = after.collect();

                vec![
                    Span::raw(before),
                    Span::styled(under, Style::default().add_modifier(Modifier::REVERSED)),
                    Span::raw(rest),
                ]
            }
            SearchMode::Inactive if self.filters.search_text.is_empty() => {
                vec![Span::styled(SEARCH_PLACEHOLDER, self.styles.muted)]
            }
            SearchMode::Inactive => vec![Span::raw(self.filters.search_text.clone())],
        }
    }
}

/// Label for the status filter selector.
pub fn status_filter_label(filters: &FilterState) -> &'static str {
    match filters.status {
        Some(status) => status.label(),
        None => "Any Status",
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if matches!(self.search, SearchMode::Typing(_)) {
            " Search (Enter to finish) "
        } else {
            " Filters "
        };
        let block = Block::default().title(title).borders(Borders::ALL);

        let mut spans = vec![Span::styled("Name: ", self.styles.accent)];
        spans.extend(self.search_spans());
        spans.push(Span::styled("   Status: ", self.styles.accent));
        spans.push(Span::raw(status_filter_label(self.filters)));
        spans.push(Span::styled("   Date: ", self.styles.accent));
        spans.push(Span::raw(self.filters.date_range.label()));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
