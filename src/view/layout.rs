//! Screen layout rendering.
//!
//! Stats panel on top, then the filter bar, the record table and a one-line
//! status bar. The help overlay is drawn over everything when visible.

use super::constants::{FILTER_BAR_HEIGHT, STATS_PANEL_HEIGHT, STATUS_BAR_HEIGHT};
use super::filter_bar::FilterBar;
use super::help::render_help_overlay;
use super::stats::StatsPanel;
use super::status_bar::status_line;
use super::styles::TableStyles;
use super::table::RecordTable;
use crate::state::ViewState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Stats panel.
    pub stats: Rect,
    /// Filter bar.
    pub filters: Rect,
    /// Record table.
    pub table: Rect,
    /// Status bar.
    pub status: Rect,
}

/// What the shell needs to know about a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// The reveal sentinel line landed inside the table area.
    pub sentinel_visible: bool,
}

/// Split `area` into the screen regions.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STATS_PANEL_HEIGHT),
            Constraint::Length(FILTER_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        stats: chunks[0],
        filters: chunks[1],
        table: chunks[2],
        status: chunks[3],
    }
}

/// Render the whole browser and report sentinel visibility.
pub fn render_layout(frame: &mut Frame, state: &ViewState, styles: &TableStyles) -> FrameReport {
    let areas = calculate_areas(frame.area());

    let stats = state.stats();
    frame.render_widget(StatsPanel::new(&stats, state.total(), styles), areas.stats);

    frame.render_widget(
        FilterBar::new(&state.filters, &state.search, styles),
        areas.filters,
    );

    let rows = state.rows();
    let mut table = RecordTable::new(&rows, &state.sort, state.cursor(), state.has_more(), styles)
        .title(format!(" Records, page {} ", state.page_index().number()));
    if state.records().is_empty() && state.is_loading() {
        table = table.empty_message("Fetching records...");
    }
    let window = table.window(areas.table);
    frame.render_widget(table, areas.table);

    frame.render_widget(Paragraph::new(status_line(state, styles)), areas.status);

    if state.help_visible {
        render_help_overlay(frame);
    }

    // The overlay covers the table, so the sentinel cannot be seen.
    FrameReport {
        sentinel_visible: window.sentinel_visible && !state.help_visible,
    }
}
