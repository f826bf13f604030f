//! Statistics panel widget for the loaded page.

use super::styles::TableStyles;
use crate::model::{Status, StatusStats};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Statistics panel widget.
///
/// Displays the share of INACTIVE and BLOCKED records on the loaded page
/// and the page's record count against the reported total.
pub struct StatsPanel<'a> {
    stats: &'a StatusStats,
    total: Option<usize>,
    styles: &'a TableStyles,
}

impl<'a> StatsPanel<'a> {
    /// Panel for `stats` against the reported `total`.
    pub fn new(
        stats: &'a StatusStats,
        total: Option<usize>,
        styles: &'a TableStyles,
    ) -> Self {
        Self {
            stats,
            total,
            styles,
        }
    }
}

/// One-line summary, e.g. `Inactive Users: 30%   Blocked Users: 20%   Page: 10 of 100`.
pub fn summary_spans<'s>(
    stats: &StatusStats,
    total: Option<usize>,
    styles: &TableStyles,
) -> Vec<Span<'s>> {
    let total = match total {
        Some(total) => total.to_string(),
        None => "?".to_string(),
    };

    vec![
        Span::raw("Inactive Users: "),
        Span::styled(
            format!("{}%", stats.inactive_percentage),
            styles.style_for_status(Status::Inactive),
        ),
        Span::raw("   Blocked Users: "),
        Span::styled(
            format!("{}%", stats.blocked_percentage),
            styles.style_for_status(Status::Blocked),
        ),
        Span::styled(
            format!("   Page: {} of {}", stats.total, total),
            styles.muted,
        ),
    ]
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Statistics ").borders(Borders::ALL);
        Paragraph::new(Line::from(summary_spans(self.stats, self.total, self.styles)))
            .block(block)
            .render(area, buf);
    }
}
