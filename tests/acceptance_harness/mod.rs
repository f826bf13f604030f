//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a high-level API for simulating user
//! interactions. Time is driven explicitly through `render_at` / `tick_at`
//! so reveal timing is deterministic.

#![allow(dead_code)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use recview::config::{BrowserConfig, KeyBindings};
use recview::model::{AppError, FilterState, PageIndex};
use recview::source::{FileSource, PageFetcher, PageSource};
use recview::state::ViewState;
use recview::view::{TableStyles, TuiApp};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Calendar date every harness starts on.
pub const TODAY: (i32, u32, u32) = (2025, 3, 10);

/// How long to wait for a background fetch before failing.
pub const FETCH_WAIT: Duration = Duration::from_secs(5);

pub fn today() -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d).expect("valid harness date")
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a records fixture with default settings at 80x24.
    pub fn from_fixture(path: &str) -> Result<Self, AppError> {
        let config = BrowserConfig::default();
        let source = FileSource::open(path, config.page_size)?;
        Self::from_source(Arc::new(source), config, FilterState::default(), 80, 24)
    }

    /// Build a harness around any page source. Nothing is fetched yet.
    pub fn from_source(
        source: Arc<dyn PageSource>,
        config: BrowserConfig,
        filters: FilterState,
        width: u16,
        height: u16,
    ) -> Result<Self, AppError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let state = ViewState::new(config, PageIndex::FIRST, filters, today());
        let app = TuiApp::with_terminal(
            terminal,
            state,
            PageFetcher::new(source),
            KeyBindings::default(),
            TableStyles::default(),
        );

        Ok(Self {
            app,
            running: true,
        })
    }

    /// Issue the initial fetch without waiting for it.
    pub fn mount(&mut self) {
        self.app.start();
    }

    /// Issue the initial fetch and wait for it to land.
    pub fn mount_and_load(&mut self) {
        self.mount();
        assert!(self.wait_for_fetch(), "initial page did not load");
    }

    /// Block until one fetch completes and is dispatched.
    pub fn wait_for_fetch(&mut self) -> bool {
        self.app.await_fetch(FETCH_WAIT)
    }

    pub fn send_key(&mut self, code: KeyCode) {
        self.send_key_with_mods(code, KeyModifiers::NONE);
    }

    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.app.handle_key(KeyEvent::new(code, modifiers)) {
            self.running = false;
        }
    }

    /// Send a key and wait for the page fetch it triggered, if any.
    pub fn send_key_and_settle(&mut self, code: KeyCode) {
        self.send_key(code);
        if self.app.state().is_loading() {
            assert!(self.wait_for_fetch(), "fetch after {:?} did not complete", code);
        }
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    pub fn render_at(&mut self, now: Instant) {
        self.app.draw_at(now).expect("TestBackend draw cannot fail");
    }

    pub fn tick_at(&mut self, now: Instant) {
        self.app.tick_at(now, today());
    }

    /// Render a frame and return the screen contents.
    pub fn render_to_string(&mut self) -> String {
        self.render_at(Instant::now());
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    pub fn state(&self) -> &ViewState {
        self.app.state()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ids of the rows currently shown, in display order.
    pub fn row_ids(&self) -> Vec<String> {
        self.state().rows().iter().map(|r| r.id.to_string()).collect()
    }
}
