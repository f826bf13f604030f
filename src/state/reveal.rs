//! Progressive reveal of already-fetched rows.
//!
//! RevealPhase is a sum type:
//! - Idle: no reveal scheduled
//! - Pending: the sentinel was seen and a reveal is due at `due`
//!
//! Time never comes from the clock here. Callers pass `now`, so every
//! transition is deterministic.

use std::time::{Duration, Instant};

/// Whether a reveal is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing scheduled.
    Idle,
    /// A reveal fires at `due`.
    Pending {
        /// When the reveal fires.
        due: Instant,
        /// Generation of the page that was loaded when the reveal was scheduled.
        page_generation: u64,
    },
}

/// Revealed row count plus the pending-reveal timer and visibility subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    revealed_count: usize,
    phase: RevealPhase,
    subscribed: bool,
}

impl RevealState {
    /// Fresh state: `initial` rows revealed, idle, subscribed to visibility.
    pub fn new(initial: usize) -> Self {
        Self {
            revealed_count: initial,
            phase: RevealPhase::Idle,
            subscribed: true,
        }
    }

    /// Rows currently revealed.
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Current timer phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// True while a reveal is scheduled.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, RevealPhase::Pending { .. })
    }

    /// False after teardown.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// True while some filtered rows are still hidden.
    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.revealed_count < filtered_len
    }

    /// Handle a visibility report for the sentinel.
    ///
    /// Schedules a reveal `delay` after `now` when the sentinel is visible,
    /// rows remain hidden, and nothing is already pending. Reports while
    /// pending or after unsubscribing are ignored.
    pub fn on_visibility(
        self,
        visible: bool,
        filtered_len: usize,
        now: Instant,
        delay: Duration,
        page_generation: u64,
    ) -> Self {
        if !self.subscribed || !visible || self.is_pending() || !self.has_more(filtered_len) {
            return self;
        }

        Self {
            phase: RevealPhase::Pending {
                due: now.checked_add(delay).unwrap_or(now),
                page_generation,
            },
            ..self
        }
    }

    /// Advance time. A due reveal adds `step` rows when it still belongs to
    /// the loaded page, and is dropped otherwise.
    pub fn on_tick(self, now: Instant, step: usize, page_generation: u64) -> Self {
        match self.phase {
            RevealPhase::Pending {
                due,
                page_generation: scheduled_for,
            } if due <= now => {
                let revealed_count = if scheduled_for == page_generation {
                    self.revealed_count.saturating_add(step)
                } else {
                    self.revealed_count
                };
                Self {
                    revealed_count,
                    phase: RevealPhase::Idle,
                    ..self
                }
            }
            _ => self,
        }
    }

    /// Drop any pending reveal, keeping the count.
    pub fn cancel(self) -> Self {
        Self {
            phase: RevealPhase::Idle,
            ..self
        }
    }

    /// Back to `initial` rows for a newly loaded page. The subscription is kept.
    pub fn reset(self, initial: usize) -> Self {
        Self {
            revealed_count: initial,
            phase: RevealPhase::Idle,
            ..self
        }
    }

    /// Release the visibility subscription and cancel any pending reveal.
    pub fn unsubscribe(self) -> Self {
        Self {
            phase: RevealPhase::Idle,
            subscribed: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    fn pending_from(state: RevealState, now: Instant) -> RevealState {
        state.on_visibility(true, 10, now, DELAY, 1)
    }

    #[test]
    fn visible_sentinel_schedules_reveal_after_delay() {
        let now = Instant::now();
        let state = pending_from(RevealState::new(5), now);

        assert_eq!(
            state.phase(),
            RevealPhase::Pending {
                due: now + DELAY,
                page_generation: 1
            }
        );
        assert_eq!(state.revealed_count(), 5);
    }

    #[test]
    fn reveal_fires_only_once_due() {
        let now = Instant::now();
        let state = pending_from(RevealState::new(5), now);

        let early = state.on_tick(now + Duration::from_millis(1499), 5, 1);
        assert_eq!(early.revealed_count(), 5);
        assert!(early.is_pending());

        let due = early.on_tick(now + DELAY, 5, 1);
        assert_eq!(due.revealed_count(), 10);
        assert_eq!(due.phase(), RevealPhase::Idle);
    }

    #[test]
    fn trigger_while_pending_is_ignored() {
        let now = Instant::now();
        let first = pending_from(RevealState::new(5), now);
        let second = first.on_visibility(true, 10, now + Duration::from_millis(700), DELAY, 1);

        assert_eq!(first, second, "debounced trigger must not reschedule");
    }

    #[test]
    fn hidden_sentinel_does_not_schedule() {
        let state = RevealState::new(5).on_visibility(false, 10, Instant::now(), DELAY, 1);
        assert_eq!(state.phase(), RevealPhase::Idle);
    }

    #[test]
    fn nothing_left_to_reveal_does_not_schedule() {
        let state = RevealState::new(5).on_visibility(true, 5, Instant::now(), DELAY, 1);
        assert_eq!(state.phase(), RevealPhase::Idle);
        assert!(!state.has_more(5));
    }

    #[test]
    fn stale_page_reveal_is_dropped() {
        let now = Instant::now();
        let state = pending_from(RevealState::new(5), now).on_tick(now + DELAY, 5, 2);

        assert_eq!(state.revealed_count(), 5);
        assert_eq!(state.phase(), RevealPhase::Idle);
    }

    #[test]
    fn cancel_keeps_count_and_goes_idle() {
        let now = Instant::now();
        let state = pending_from(RevealState::new(10), now).cancel();

        assert_eq!(state.revealed_count(), 10);
        assert_eq!(state.on_tick(now + DELAY * 2, 5, 1).revealed_count(), 10);
    }

    #[test]
    fn reset_restores_initial_count() {
        let now = Instant::now();
        let grown = pending_from(RevealState::new(5), now).on_tick(now + DELAY, 5, 1);
        assert_eq!(grown.revealed_count(), 10);

        let reset = grown.reset(5);
        assert_eq!(reset.revealed_count(), 5);
        assert!(reset.is_subscribed());
    }

    #[test]
    fn unsubscribed_state_ignores_visibility() {
        let now = Instant::now();
        let state = pending_from(RevealState::new(5), now).unsubscribe();

        assert!(!state.is_subscribed());
        assert_eq!(state.phase(), RevealPhase::Idle);

        let after = state.on_visibility(true, 10, now, DELAY, 1);
        assert_eq!(after.phase(), RevealPhase::Idle);
    }

    #[test]
    fn count_is_monotonic_across_reveals() {
        let mut now = Instant::now();
        let mut state = RevealState::new(5);
        let mut last = state.revealed_count();

        for _ in 0..4 {
            state = state.on_visibility(true, 100, now, DELAY, 1);
            now += DELAY;
            state = state.on_tick(now, 5, 1);
            assert!(state.revealed_count() >= last);
            last = state.revealed_count();
        }

        assert_eq!(last, 25);
    }
}
