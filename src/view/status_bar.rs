//! Bottom status bar: pager, fetch state and key hints.

use super::styles::TableStyles;
use crate::state::ViewState;
use ratatui::text::{Line, Span};

/// Build the status bar line.
///
/// A fetch failure replaces the key hints until the next successful load.
pub fn status_line(state: &ViewState, styles: &TableStyles) -> Line<'static> {
    let pagination = state.pagination();

    let previous = if pagination.has_previous() {
        Span::raw("◀ Previous")
    } else {
        Span::styled("◀ Previous", styles.muted)
    };
    let next = if pagination.has_next() {
        Span::raw("Next ▶")
    } else {
        Span::styled("Next ▶", styles.muted)
    };

    let mut spans = vec![
        previous,
        Span::raw(format!(
            "  Page {} of {}  ",
            state.page_index().number(),
            pagination.last().number()
        )),
        next,
        Span::raw(format!(
            "  Showing {} of {}",
            state.rows().len(),
            state.filtered_len()
        )),
    ];

    if state.is_loading() {
        spans.push(Span::styled(
            format!("  Fetching page {}...", state.page_index().number()),
            styles.accent,
        ));
    }

    match state.last_error() {
        Some(error) => spans.push(Span::styled(format!("  {}", error), styles.error)),
        None => spans.push(Span::styled("  ? help  q quit", styles.muted)),
    }

    Line::from(spans)
}
