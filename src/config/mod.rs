//! Configuration module.
//!
//! Holds the browser constants, the config-file loader and key bindings.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use std::time::Duration;

/// Records per page served by the data provider.
pub const PAGE_SIZE: usize = 10;

/// Rows revealed when a page is first shown.
pub const INITIAL_REVEAL: usize = 5;

/// Rows added by each reveal.
pub const REVEAL_STEP: usize = 5;

/// Delay between the sentinel becoming visible and the reveal.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// Number of pages the pager allows (last index is `PAGE_LIMIT - 1`).
///
/// Fixed, not derived from the `total` a page reports.
pub const PAGE_LIMIT: usize = 10;

/// Settings consumed by the view-state controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Records per page.
    pub page_size: usize,
    /// Rows shown before the first reveal.
    pub initial_reveal: usize,
    /// Rows added by each reveal.
    pub reveal_step: usize,
    /// Delay between sentinel visibility and the reveal.
    pub reveal_delay: Duration,
    /// Number of pages the pager allows. At least 1.
    pub page_limit: usize,
}

impl BrowserConfig {
    /// Highest 0-based page index the pager may reach.
    pub fn last_page_index(&self) -> usize {
        self.page_limit.saturating_sub(1)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            initial_reveal: INITIAL_REVEAL,
            reveal_step: REVEAL_STEP,
            reveal_delay: REVEAL_DELAY,
            page_limit: PAGE_LIMIT,
        }
    }
}
