//! Record table styling configuration.
//!
//! Status colors follow the action buttons of the browser: ACTIVE green,
//! INACTIVE red, BLOCKED gray.

use crate::model::Status;
use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints and placeholders.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Section headers in the help overlay.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

// ===== TableStyles =====

/// Styles used across the browser widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column headers.
    pub header: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// Alternate rows.
    pub stripe: Style,
    /// The loading sentinel line.
    pub sentinel: Style,
    /// Fetch errors.
    pub error: Style,
    /// Secondary text.
    pub muted: Style,
    /// Highlighted values.
    pub accent: Style,
    active: Style,
    inactive: Style,
    blocked: Style,
}

impl TableStyles {
    /// If colors are disabled, only modifiers (bold, reversed) are used.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let header = Style::default().add_modifier(Modifier::BOLD);
        let selected = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                header: header.fg(Color::White),
                selected,
                stripe: Style::default().bg(Color::Black),
                sentinel: MUTED_TEXT,
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                muted: MUTED_TEXT,
                accent: Style::default().fg(Color::Cyan),
                active: Style::default().fg(Color::Green),
                inactive: Style::default().fg(Color::Red),
                blocked: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                header,
                selected,
                stripe: Style::default(),
                sentinel: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                accent: Style::default(),
                active: Style::default(),
                inactive: Style::default(),
                blocked: Style::default(),
            }
        }
    }

    /// Style for a status cell.
    pub fn style_for_status(&self, status: Status) -> Style {
        match status {
            Status::Active => self.active,
            Status::Inactive => self.inactive,
            Status::Blocked => self.blocked,
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
