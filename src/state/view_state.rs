//! Browser view state and its reducer.
//!
//! ViewState is a plain value. Every change goes through [`reduce`], which
//! returns the next state plus the effects the shell must run (page fetches).
//! Visible rows and statistics are derived on demand and never stored.

use crate::config::BrowserConfig;
use crate::model::{
    DateRange, FetchError, FetchOutcome, FetchTicket, FilterState, Page, PageIndex, Record,
    RecordId, SortField, SortSpec, Status, StatusStats,
};
use crate::state::pagination::{FetchGuard, Pagination};
use crate::state::projection;
use crate::state::record_set::{Mutation, RecordSet};
use crate::state::reveal::RevealState;
use crate::state::search_input::{self, SearchInput};
use chrono::NaiveDate;
use std::time::Instant;
use tracing::{debug, info, warn};

// ===== SearchMode =====

/// Whether keystrokes currently edit the search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Keys are commands.
    #[default]
    Inactive,
    /// Keys edit the search text.
    Typing(SearchInput),
}

// ===== Action / Effect =====

/// Everything that can happen to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Initial load. Issues the first fetch once.
    Mount,
    /// Go back one page.
    PreviousPage,
    /// Go forward one page.
    NextPage,
    /// Move the row cursor up.
    CursorUp,
    /// Move the row cursor down.
    CursorDown,

    /// Enter search editing with the current text.
    SearchStart,
    /// Insert a char at the search cursor.
    SearchChar(char),
    /// Delete the char before the search cursor.
    SearchBackspace,
    /// Delete the char under the search cursor.
    SearchDelete,
    /// Move the search cursor left.
    SearchCursorLeft,
    /// Move the search cursor right.
    SearchCursorRight,
    /// Move the search cursor to the start.
    SearchHome,
    /// Move the search cursor to the end.
    SearchEnd,
    /// Clear the search text and leave editing.
    SearchClear,
    /// Leave search editing, keeping the text.
    SearchFinish,
    /// Replace the search text.
    SetSearchText(String),

    /// Step the status filter to its next value.
    CycleStatusFilter,
    /// Filter by one status, or none.
    SetStatusFilter(Option<Status>),
    /// Step the date range to its next preset.
    CycleDateRange,
    /// Filter by a look-back window.
    SetDateRange(DateRange),
    /// Drop every filter.
    ClearFilters,

    /// Plain column toggle: this column becomes the only sort key.
    ToggleSort(SortField),
    /// Multi-column toggle: other sort keys are kept.
    ToggleSortMulti(SortField),

    /// Change a record's status by id. Unknown ids are ignored.
    SetStatus {
        /// Record to change.
        id: RecordId,
        /// New status.
        status: Status,
    },
    /// Change the status of the record under the row cursor.
    SetSelectedStatus(Status),

    /// A page fetch completed.
    FetchResolved(FetchOutcome),
    /// Time passed. Drives due reveals and refreshes the calendar date.
    Tick {
        /// Current instant.
        now: Instant,
        /// Current calendar date.
        today: NaiveDate,
    },
    /// The sentinel line was (or was not) visible in the last frame.
    SentinelVisibility {
        /// Whether the sentinel was on screen.
        visible: bool,
        /// When the frame was shown.
        now: Instant,
    },

    /// Show or hide the help overlay.
    ToggleHelp,
    /// Cancel pending reveals and stop listening to visibility and fetches.
    Teardown,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a page under this ticket.
    Fetch(FetchTicket),
}

/// Result of [`reduce`].
#[derive(Debug, Clone)]
pub struct Transition {
    /// State after the action.
    pub state: ViewState,
    /// Effects to run, in order.
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: ViewState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

// ===== ViewState =====

/// Complete state of the record browser.
#[derive(Debug, Clone)]
pub struct ViewState {
    config: BrowserConfig,

    pagination: Pagination,
    fetch: FetchGuard,

    /// Records of the last successfully loaded page.
    records: RecordSet,
    /// Record count across all pages as reported by the last loaded page.
    total: Option<usize>,
    /// Ticket generation of the loaded page; 0 before the first load.
    loaded_generation: u64,

    /// Active filters.
    pub filters: FilterState,
    /// Column sort keys.
    pub sort: SortSpec,
    reveal: RevealState,
    /// Search editing mode.
    pub search: SearchMode,

    /// Row cursor into the visible rows.
    cursor: usize,
    /// Calendar date the date-range filter counts back from.
    today: NaiveDate,

    /// Last fetch failure, shown until the next successful load.
    last_error: Option<FetchError>,
    /// Help overlay shown.
    pub help_visible: bool,
    torn_down: bool,
}

impl ViewState {
    /// Unmounted state at `start`. Nothing is fetched until `Action::Mount`.
    pub fn new(
        config: BrowserConfig,
        start: PageIndex,
        filters: FilterState,
        today: NaiveDate,
    ) -> Self {
        Self {
            pagination: Pagination::new(start, PageIndex::new(config.last_page_index())),
            fetch: FetchGuard::default(),
            records: RecordSet::empty(),
            total: None,
            loaded_generation: 0,
            filters,
            sort: SortSpec::default(),
            reveal: RevealState::new(config.initial_reveal),
            search: SearchMode::Inactive,
            cursor: 0,
            today,
            last_error: None,
            help_visible: false,
            torn_down: false,
            config,
        }
    }

    /// Settings this state was built with.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Current page.
    pub fn page_index(&self) -> PageIndex {
        self.pagination.index()
    }

    /// Pager position and bounds.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Records of the loaded page.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Reported record count, once a page has loaded.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// Reveal progress and timer.
    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// Rows currently revealed.
    pub fn revealed_count(&self) -> usize {
        self.reveal.revealed_count()
    }

    /// Date the date filter counts back from.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Row cursor into the visible rows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Last fetch failure, if not yet replaced by a load.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// True while the latest fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    /// True after `Action::Teardown`.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// True while keys edit the search text.
    pub fn is_searching(&self) -> bool {
        matches!(self.search, SearchMode::Typing(_))
    }

    /// Visible rows: filtered, truncated to the revealed count, then sorted.
    pub fn rows(&self) -> Vec<&Record> {
        projection::project(
            self.records.records(),
            &self.filters,
            &self.sort,
            self.reveal.revealed_count(),
            self.today,
        )
    }

    /// Records passing the filters, before the reveal limit.
    pub fn filtered_len(&self) -> usize {
        projection::filtered_len(self.records.records(), &self.filters, self.today)
    }

    /// True while filtered rows remain hidden; the sentinel is shown then.
    pub fn has_more(&self) -> bool {
        self.reveal.has_more(self.filtered_len())
    }

    /// Status statistics over the whole loaded page.
    pub fn stats(&self) -> StatusStats {
        projection::status_stats(self.records.records())
    }

    /// Record under the row cursor.
    pub fn selected_record(&self) -> Option<&Record> {
        self.rows().get(self.cursor).copied()
    }

    fn clamp_cursor(mut self) -> Self {
        let visible = self.rows().len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));
        self
    }

    fn issue_fetch(mut self) -> Transition {
        let (fetch, ticket) = self.fetch.issue(self.pagination.index());
        self.fetch = fetch;
        Transition {
            state: self,
            effects: vec![Effect::Fetch(ticket)],
        }
    }

    fn change_page(mut self, pagination: Option<Pagination>) -> Transition {
        match pagination {
            Some(pagination) => {
                debug!(page = pagination.index().number(), "Page index changed");
                self.pagination = pagination;
                self.reveal = self.reveal.cancel();
                self.issue_fetch()
            }
            None => Transition::quiet(self),
        }
    }

    fn edit_search(mut self, edit: fn(SearchInput) -> SearchInput) -> Self {
        if let SearchMode::Typing(input) = std::mem::take(&mut self.search) {
            let input = edit(input);
            self.filters.search_text = input.text().to_string();
            self.search = SearchMode::Typing(input);
        }
        self.clamp_cursor()
    }

    fn set_status(mut self, id: &RecordId, status: Status) -> Self {
        match self.records.set_status(id, status) {
            Mutation::Applied(records) => {
                info!(id = %id, status = %status, "Record status changed");
                self.records = records;
            }
            Mutation::NotFound => {
                debug!(id = %id, "Status change for record not on the loaded page ignored");
            }
        }
        self.clamp_cursor()
    }

    fn resolve_fetch(mut self, outcome: FetchOutcome) -> Self {
        let ticket = outcome.ticket;

        if self.torn_down || !self.fetch.accepts(&ticket) {
            debug!(
                page = ticket.page.number(),
                generation = ticket.generation,
                "Discarding stale fetch result"
            );
            return self;
        }
        self.fetch = self.fetch.settle();

        let page_size = self.config.page_size;
        let page = outcome
            .result
            .and_then(|response| Page::from_response(ticket.page, response, page_size));

        match page {
            Ok(page) => {
                info!(
                    page = page.index().number(),
                    records = page.records().len(),
                    total = page.total(),
                    "Page loaded"
                );
                self.total = Some(page.total());
                self.records = RecordSet::new(page.into_records());
                self.loaded_generation = ticket.generation;
                self.reveal = self.reveal.reset(self.config.initial_reveal);
                self.last_error = None;
                self.cursor = 0;
            }
            Err(error) => {
                warn!(page = error.page(), error = %error, "Page fetch failed");
                self.last_error = Some(error);
            }
        }

        self.clamp_cursor()
    }
}

// ===== reduce =====

/// Apply `action` to `state`.
pub fn reduce(state: ViewState, action: Action) -> Transition {
    let mut state = state;

    match action {
        Action::Mount => {
            if state.fetch.latest().is_some() || state.torn_down {
                return Transition::quiet(state);
            }
            state.issue_fetch()
        }

        Action::PreviousPage => {
            let previous = state.pagination.previous();
            state.change_page(previous)
        }
        Action::NextPage => {
            let next = state.pagination.next();
            state.change_page(next)
        }

        Action::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
            Transition::quiet(state)
        }
        Action::CursorDown => {
            state.cursor += 1;
            Transition::quiet(state.clamp_cursor())
        }

        Action::SearchStart => {
            if !state.is_searching() {
                let input = SearchInput::new(state.filters.search_text.clone());
                state.search = SearchMode::Typing(input);
            }
            Transition::quiet(state)
        }
        Action::SearchChar(ch) => {
            if let SearchMode::Typing(input) = std::mem::take(&mut state.search) {
                let input = search_input::handle_char_input(input, ch);
                state.filters.search_text = input.text().to_string();
                state.search = SearchMode::Typing(input);
            }
            Transition::quiet(state.clamp_cursor())
        }
        Action::SearchBackspace => {
            Transition::quiet(state.edit_search(search_input::handle_backspace))
        }
        Action::SearchDelete => Transition::quiet(state.edit_search(search_input::handle_delete)),
        Action::SearchCursorLeft => {
            Transition::quiet(state.edit_search(search_input::handle_cursor_left))
        }
        Action::SearchCursorRight => {
            Transition::quiet(state.edit_search(search_input::handle_cursor_right))
        }
        Action::SearchHome => Transition::quiet(state.edit_search(search_input::handle_home)),
        Action::SearchEnd => Transition::quiet(state.edit_search(search_input::handle_end)),
        Action::SearchClear => Transition::quiet(state.edit_search(search_input::handle_clear)),
        Action::SearchFinish => {
            state.search = SearchMode::Inactive;
            Transition::quiet(state)
        }
        Action::SetSearchText(text) => {
            if state.is_searching() {
                state.search = SearchMode::Typing(SearchInput::new(text.clone()));
            }
            state.filters.search_text = text;
            Transition::quiet(state.clamp_cursor())
        }

        Action::CycleStatusFilter => {
            state.filters.cycle_status();
            Transition::quiet(state.clamp_cursor())
        }
        Action::SetStatusFilter(status) => {
            state.filters.status = status;
            Transition::quiet(state.clamp_cursor())
        }
        Action::CycleDateRange => {
            state.filters.cycle_date_range();
            Transition::quiet(state.clamp_cursor())
        }
        Action::SetDateRange(range) => {
            state.filters.date_range = range;
            Transition::quiet(state.clamp_cursor())
        }
        Action::ClearFilters => {
            state.filters.clear();
            if state.is_searching() {
                state.search = SearchMode::Typing(SearchInput::default());
            }
            Transition::quiet(state.clamp_cursor())
        }

        Action::ToggleSort(field) => {
            state.sort.toggle(field);
            Transition::quiet(state)
        }
        Action::ToggleSortMulti(field) => {
            state.sort.toggle_multi(field);
            Transition::quiet(state)
        }

        Action::SetStatus { id, status } => Transition::quiet(state.set_status(&id, status)),
        Action::SetSelectedStatus(status) => {
            let selected = state.selected_record().map(|record| record.id.clone());
            match selected {
                Some(id) => Transition::quiet(state.set_status(&id, status)),
                None => Transition::quiet(state),
            }
        }

        Action::FetchResolved(outcome) => Transition::quiet(state.resolve_fetch(outcome)),

        Action::Tick { now, today } => {
            state.today = today;
            state.reveal =
                state
                    .reveal
                    .on_tick(now, state.config.reveal_step, state.loaded_generation);
            Transition::quiet(state.clamp_cursor())
        }

        Action::SentinelVisibility { visible, now } => {
            let filtered_len = state.filtered_len();
            state.reveal = state.reveal.on_visibility(
                visible,
                filtered_len,
                now,
                state.config.reveal_delay,
                state.loaded_generation,
            );
            Transition::quiet(state)
        }

        Action::ToggleHelp => {
            state.help_visible = !state.help_visible;
            Transition::quiet(state)
        }

        Action::Teardown => {
            state.reveal = state.reveal.unsubscribe();
            state.torn_down = true;
            Transition::quiet(state)
        }
    }
}

#[cfg(test)]
#[path = "view_state_tests.rs"]
mod tests;
