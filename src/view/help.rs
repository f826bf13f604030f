//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by
//! category. Toggled by '?', dismissed by 'Esc'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::{MUTED_TEXT, SECTION_HEADER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Rows",
        &[("j/↓", "Next row"), ("k/↑", "Previous row")],
    ),
    (
        "Pages",
        &[("h/←/[", "Previous page"), ("l/→/]", "Next page")],
    ),
    (
        "Filters",
        &[
            ("//Ctrl+f", "Edit name search"),
            ("Enter/Esc", "Finish editing search"),
            ("s", "Cycle status filter"),
            ("d", "Cycle date range"),
            ("x", "Clear filters"),
        ],
    ),
    (
        "Sorting",
        &[
            ("1-5", "Sort by column (asc, desc, off)"),
            ("Alt+1-5", "Add column to multi-sort"),
        ],
    ),
    (
        "Selected Record",
        &[
            ("a", "Set ACTIVE"),
            ("i", "Set INACTIVE"),
            ("b", "Set BLOCKED"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Width of the key column in help lines.
const KEY_COLUMN: usize = 12;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect with the given percentage of `area`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let popup_height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (index, (category, shortcuts)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, SECTION_HEADER)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = KEY_COLUMN), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}
