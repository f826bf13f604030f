//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values and fixed labels.

use std::time::Duration;

/// Height of the statistics panel in lines (border + one content line).
pub const STATS_PANEL_HEIGHT: u16 = 3;

/// Height of the filter bar in lines (border + one content line).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// How often the event loop wakes without input to drain fetches and advance
/// reveal timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Text of the reveal sentinel line rendered under the last revealed row.
pub const SENTINEL_TEXT: &str = "Loading...";

/// Placeholder shown in an empty, inactive search box.
pub const SEARCH_PLACEHOLDER: &str = "Search name...";
