//! Record table widget with the reveal sentinel.
//!
//! The table shows a window of the visible rows that keeps the cursor in
//! view. When filtered rows are still hidden, a sentinel line follows the
//! last row; whether it fits inside the table area is reported back to the
//! reducer as the visibility signal.

use super::constants::SENTINEL_TEXT;
use super::styles::TableStyles;
use crate::model::{Record, SortDirection, SortField, SortSpec};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Column widths, in display order.
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(22),
    Constraint::Length(10),
    Constraint::Percentage(30),
    Constraint::Length(12),
    Constraint::Percentage(20),
];

/// Lines taken by the table border and header row.
const TABLE_CHROME: u16 = 3;

// ===== TableWindow =====

/// Which rows fit in the table area and whether the sentinel does too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWindow {
    /// First visible row.
    pub start: usize,
    /// One past the last visible row.
    pub end: usize,
    /// The sentinel line fits below the rows.
    pub sentinel_visible: bool,
}

impl TableWindow {
    /// Fit `row_count` rows (plus a sentinel when `has_more`) into
    /// `capacity` lines, scrolled so `cursor` is shown.
    pub fn compute(row_count: usize, cursor: usize, capacity: usize, has_more: bool) -> Self {
        if capacity == 0 {
            return Self {
                start: 0,
                end: 0,
                sentinel_visible: false,
            };
        }

        let start = if cursor >= capacity {
            cursor + 1 - capacity
        } else {
            0
        }
        .min(row_count);
        let end = (start + capacity).min(row_count);
        let sentinel_visible = has_more && end == row_count && end - start < capacity;

        Self {
            start,
            end,
            sentinel_visible,
        }
    }
}

/// Number of body lines a table of `height` can show.
pub fn body_capacity(height: u16) -> usize {
    usize::from(height.saturating_sub(TABLE_CHROME))
}

/// Header label with sort marker. Multi-key sorts also show the key's rank.
pub fn header_label(field: SortField, sort: &SortSpec) -> String {
    let position = sort.keys().iter().position(|key| key.field == field);
    match position {
        None => field.header().to_string(),
        Some(index) => {
            let arrow = match sort.keys()[index].direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            if sort.keys().len() > 1 {
                format!("{} {}{}", field.header(), arrow, index + 1)
            } else {
                format!("{} {}", field.header(), arrow)
            }
        }
    }
}

// ===== RecordTable =====

/// Table of visible records with a sentinel line while rows remain hidden.
pub struct RecordTable<'a> {
    rows: &'a [&'a Record],
    sort: &'a SortSpec,
    cursor: usize,
    has_more: bool,
    styles: &'a TableStyles,
    title: String,
    empty_message: &'static str,
}

impl<'a> RecordTable<'a> {
    /// Table over `rows` with the cursor at `cursor`.
    pub fn new(
        rows: &'a [&'a Record],
        sort: &'a SortSpec,
        cursor: usize,
        has_more: bool,
        styles: &'a TableStyles,
    ) -> Self {
        Self {
            rows,
            sort,
            cursor,
            has_more,
            styles,
            title: " Records ".to_string(),
            empty_message: "No matching records",
        }
    }

    /// Text shown when there are no rows at all.
    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    /// Border title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Window this table will use in `area`.
    pub fn window(&self, area: Rect) -> TableWindow {
        TableWindow::compute(
            self.rows.len(),
            self.cursor,
            body_capacity(area.height),
            self.has_more,
        )
    }

    fn record_row(&self, index: usize, record: &Record) -> Row<'static> {
        let status = record.about.status;
        let row = Row::new(vec![
            Cell::from(record.about.name.clone()),
            Cell::from(status.label()).style(self.styles.style_for_status(status)),
            Cell::from(record.about.email.clone()),
            Cell::from(record.details.date.format("%Y-%m-%d").to_string()),
            Cell::from(record.details.invited_by.clone()),
        ]);

        if index == self.cursor {
            row.style(self.styles.selected)
        } else if index % 2 == 1 {
            row.style(self.styles.stripe)
        } else {
            row
        }
    }
}

impl Widget for RecordTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let window = self.window(area);
        let block = Block::default().title(self.title.clone()).borders(Borders::ALL);

        let header = Row::new(
            SortField::ALL
                .iter()
                .map(|field| Cell::from(header_label(*field, self.sort)))
                .collect::<Vec<_>>(),
        )
        .style(self.styles.header);

        let mut body: Vec<Row> = self.rows[window.start..window.end]
            .iter()
            .enumerate()
            .map(|(offset, record)| self.record_row(window.start + offset, record))
            .collect();

        if window.sentinel_visible {
            body.push(Row::new(vec![Cell::from(SENTINEL_TEXT)]).style(self.styles.sentinel));
        }

        if self.rows.is_empty() && !self.has_more {
            let inner = block.inner(area);
            block.render(area, buf);
            let mut header_area = inner;
            header_area.height = header_area.height.min(1);
            Widget::render(
                Table::new(Vec::<Row>::new(), COLUMN_WIDTHS).header(header),
                header_area,
                buf,
            );
            if inner.height > 1 {
                let message_area = Rect {
                    y: inner.y + 1,
                    height: inner.height - 1,
                    ..inner
                };
                Paragraph::new(Line::from(Span::styled(self.empty_message, self.styles.muted)))
                    .render(message_area, buf);
            }
            return;
        }

        Widget::render(
            Table::new(body, COLUMN_WIDTHS).header(header).block(block),
            area,
            buf,
        );
    }
}
