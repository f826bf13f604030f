//! TUI rendering and terminal management (impure shell)
//!
//! `TuiApp` owns the single `ViewState`. Keys, completed fetches and timer
//! ticks become `Action`s for the reducer; the effects it returns are run
//! here. Nothing else touches the state.

pub mod constants;
pub mod filter_bar;
pub mod help;
pub mod layout;
pub mod stats;
pub mod status_bar;
pub mod styles;
pub mod table;

pub use filter_bar::FilterBar;
pub use help::render_help_overlay;
pub use layout::{render_layout, FrameReport};
pub use stats::StatsPanel;
pub use styles::{ColorConfig, TableStyles};
pub use table::{RecordTable, TableWindow};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::source::PageFetcher;
use crate::state::{reduce, Action, Effect, ViewState};
use chrono::NaiveDate;
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: ViewState,
    fetcher: PageFetcher,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        state: ViewState,
        fetcher: PageFetcher,
        styles: TableStyles,
    ) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            state,
            fetcher,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Wakes every `TICK_INTERVAL`
    /// without input to fold in finished fetches and due reveals.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.start();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
            }

            self.poll_fetches();
            self.tick();
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal. No terminal modes are changed.
    pub fn with_terminal(
        terminal: Terminal<B>,
        state: ViewState,
        fetcher: PageFetcher,
        key_bindings: KeyBindings,
        styles: TableStyles,
    ) -> Self {
        Self {
            terminal,
            state,
            fetcher,
            key_bindings,
            styles,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Issue the initial page fetch.
    pub fn start(&mut self) {
        self.dispatch(Action::Mount);
    }

    /// Run `action` through the reducer and execute its effects.
    pub fn dispatch(&mut self, action: Action) {
        let transition = reduce(self.state.clone(), action);
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::Fetch(ticket) => self.fetcher.request(ticket),
            }
        }
    }

    /// Fold in every fetch that has completed. Returns how many arrived.
    pub fn poll_fetches(&mut self) -> usize {
        let outcomes = self.fetcher.drain();
        let count = outcomes.len();
        for outcome in outcomes {
            self.dispatch(Action::FetchResolved(outcome));
        }
        count
    }

    /// Block up to `timeout` for one fetch to complete and fold it in.
    pub fn await_fetch(&mut self, timeout: Duration) -> bool {
        match self.fetcher.recv_timeout(timeout) {
            Some(outcome) => {
                self.dispatch(Action::FetchResolved(outcome));
                true
            }
            None => false,
        }
    }

    /// Advance time to the wall clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now(), chrono::Local::now().date_naive());
    }

    /// Advance time to `now` and `today`.
    pub fn tick_at(&mut self, now: Instant, today: NaiveDate) {
        self.dispatch(Action::Tick { now, today });
    }

    /// Render the current frame and report sentinel visibility.
    pub fn draw(&mut self) -> Result<(), AppError> {
        self.draw_at(Instant::now())
    }

    /// Render the current frame, treating `now` as the time it was shown.
    pub fn draw_at(&mut self, now: Instant) -> Result<(), AppError> {
        let state = &self.state;
        let styles = &self.styles;
        let mut report = None;

        self.terminal.draw(|frame| {
            report = Some(render_layout(frame, state, styles));
        })?;

        if let Some(report) = report {
            self.dispatch(Action::SentinelVisibility {
                visible: report.sentinel_visible,
                now,
            });
        }
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even while editing search.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.shutdown();
            return true;
        }

        if self.state.help_visible && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.dispatch(Action::ToggleHelp);
            return false;
        }

        if self.state.is_searching() {
            if let Some(action) = search_key_action(key) {
                self.dispatch(action);
            }
            return false;
        }

        // Shift is implied by the character itself ('?' vs '/').
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        let lookup = KeyEvent::new(key.code, modifiers);

        let Some(key_action) = self.key_bindings.get(lookup) else {
            debug!(?key, "Unbound key");
            return false;
        };

        let action = match key_action {
            KeyAction::Quit => {
                self.shutdown();
                return true;
            }
            KeyAction::CursorDown => Action::CursorDown,
            KeyAction::CursorUp => Action::CursorUp,
            KeyAction::PrevPage => Action::PreviousPage,
            KeyAction::NextPage => Action::NextPage,
            KeyAction::StartSearch => Action::SearchStart,
            KeyAction::CycleStatusFilter => Action::CycleStatusFilter,
            KeyAction::CycleDateRange => Action::CycleDateRange,
            KeyAction::ClearFilters => Action::ClearFilters,
            KeyAction::SortBy(field) => Action::ToggleSort(field),
            KeyAction::AddSortBy(field) => Action::ToggleSortMulti(field),
            KeyAction::SetStatus(status) => Action::SetSelectedStatus(status),
            KeyAction::Help => Action::ToggleHelp,
        };
        self.dispatch(action);
        false
    }

    /// Cancel pending reveals and stop observing visibility.
    pub fn shutdown(&mut self) {
        self.dispatch(Action::Teardown);
    }
}

/// Map a key to a search-editing action while search has focus.
fn search_key_action(key: KeyEvent) -> Option<Action> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if control => Some(Action::SearchClear),
        KeyCode::Char(_) if control || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(ch) => Some(Action::SearchChar(ch)),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Delete => Some(Action::SearchDelete),
        KeyCode::Left => Some(Action::SearchCursorLeft),
        KeyCode::Right => Some(Action::SearchCursorRight),
        KeyCode::Home => Some(Action::SearchHome),
        KeyCode::End => Some(Action::SearchEnd),
        KeyCode::Enter | KeyCode::Esc => Some(Action::SearchFinish),
        _ => None,
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
/// Logging must be initialized by the caller.
pub fn run_with_state(
    state: ViewState,
    fetcher: PageFetcher,
    styles: TableStyles,
) -> Result<(), AppError> {
    let mut app = TuiApp::new(state, fetcher, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
