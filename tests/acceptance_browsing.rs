//! Acceptance tests: browsing, filtering and editing records through keys.
//!
//! Fixture: 100 records, ids 1..=100, status cycling ACTIVE / INACTIVE /
//! BLOCKED, dated 2025-03-01 plus (id - 1) days. Harness "today" is 2025-03-10.

mod acceptance_harness;

use acceptance_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use recview::model::{DateRange, PageIndex, RecordId, Status};
use std::time::{Duration, Instant};

const RECORDS_FIXTURE: &str = "tests/fixtures/records.json";

fn loaded() -> AcceptanceTestHarness {
    let mut harness =
        AcceptanceTestHarness::from_fixture(RECORDS_FIXTURE).expect("Should load fixture");
    harness.mount_and_load();
    harness
}

// ===== Initial load =====

#[test]
fn first_page_shows_initial_rows_and_stats() {
    let mut harness = loaded();

    assert_eq!(harness.row_ids(), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(harness.state().total(), Some(100));

    let output = harness.render_to_string();
    assert!(output.contains("Demo Demo 1"), "output:\n{}", output);
    assert!(output.contains("Inactive Users: 30%"), "output:\n{}", output);
    assert!(output.contains("Blocked Users: 30%"), "output:\n{}", output);
    assert!(output.contains("Page 1 of 10"), "output:\n{}", output);
}

#[test]
fn missing_fixture_reports_file_not_found() {
    let result = AcceptanceTestHarness::from_fixture("tests/fixtures/does_not_exist.json");
    assert!(result.is_err());
}

#[test]
fn malformed_fixture_is_rejected() {
    let result = AcceptanceTestHarness::from_fixture("tests/fixtures/malformed.json");
    assert!(result.is_err());
}

// ===== Pagination =====

#[test]
fn next_page_loads_following_records() {
    let mut harness = loaded();

    harness.send_key_and_settle(KeyCode::Char('l'));

    assert_eq!(harness.state().page_index(), PageIndex::new(1));
    assert_eq!(harness.row_ids(), vec!["11", "12", "13", "14", "15"]);
}

#[test]
fn pager_stops_at_page_ten() {
    let mut harness = loaded();

    for _ in 0..15 {
        harness.send_key_and_settle(KeyCode::Right);
    }

    assert_eq!(harness.state().page_index(), PageIndex::new(9));
    assert_eq!(harness.row_ids(), vec!["91", "92", "93", "94", "95"]);

    harness.send_key(KeyCode::Right);
    assert!(!harness.state().is_loading(), "No fetch past the last page");
}

#[test]
fn previous_page_returns_to_earlier_records() {
    let mut harness = loaded();

    harness.send_key_and_settle(KeyCode::Char(']'));
    harness.send_key_and_settle(KeyCode::Char('['));

    assert_eq!(harness.state().page_index(), PageIndex::FIRST);
    assert_eq!(harness.row_ids(), vec!["1", "2", "3", "4", "5"]);
}

// ===== Progressive reveal =====

#[test]
fn sentinel_reveals_more_rows_after_delay() {
    let mut harness = loaded();
    let start = Instant::now();

    harness.render_at(start);
    assert!(harness.state().reveal().is_pending());

    harness.tick_at(start + Duration::from_millis(1500));
    assert_eq!(harness.state().revealed_count(), 10);

    let output = harness.render_to_string();
    assert!(output.contains("Demo Demo 10"), "output:\n{}", output);
    assert!(!output.contains("Loading..."), "all rows shown:\n{}", output);
}

#[test]
fn page_change_cancels_pending_reveal() {
    let mut harness = loaded();
    let start = Instant::now();

    harness.render_at(start);
    harness.send_key_and_settle(KeyCode::Char('l'));
    harness.tick_at(start + Duration::from_secs(2));

    assert_eq!(harness.state().revealed_count(), 5);
    assert_eq!(harness.row_ids(), vec!["11", "12", "13", "14", "15"]);
}

// ===== Filters =====

#[test]
fn search_narrows_rows_case_insensitively() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('/'));
    harness.type_text("DEMO 1");
    harness.send_key(KeyCode::Enter);

    // "Demo Demo 1" and "Demo Demo 10"
    assert_eq!(harness.state().filtered_len(), 2);
    assert_eq!(harness.row_ids(), vec!["1", "10"]);
}

#[test]
fn status_filter_cycles_through_statuses() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('s'));
    assert_eq!(harness.state().filters.status, Some(Status::Active));
    assert_eq!(harness.row_ids(), vec!["1", "4", "7", "10"]);

    harness.send_key(KeyCode::Char('s'));
    assert_eq!(harness.state().filters.status, Some(Status::Inactive));
    assert_eq!(harness.row_ids(), vec!["2", "5", "8"]);
}

#[test]
fn seven_day_window_includes_boundary_date() {
    let mut harness = loaded();

    // All -> 1 -> 2 -> 7 days
    for _ in 0..3 {
        harness.send_key(KeyCode::Char('d'));
    }
    assert_eq!(harness.state().filters.date_range, DateRange::days(7));

    // Cutoff is 2025-03-03, which is record 3.
    assert_eq!(harness.state().filtered_len(), 8);
    assert_eq!(harness.row_ids(), vec!["3", "4", "5", "6", "7"]);
}

#[test]
fn clear_filters_restores_all_rows() {
    let mut harness = loaded();
    harness.send_key(KeyCode::Char('s'));
    harness.send_key(KeyCode::Char('d'));
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("zzz");
    harness.send_key(KeyCode::Esc);
    assert_eq!(harness.state().filtered_len(), 0);

    harness.send_key(KeyCode::Char('x'));

    assert!(harness.state().filters.is_default());
    assert_eq!(harness.row_ids(), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn empty_filter_result_shows_message() {
    let mut harness = loaded();
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("nobody");
    harness.send_key(KeyCode::Enter);

    let output = harness.render_to_string();
    assert!(output.contains("No matching records"), "output:\n{}", output);
    assert!(!output.contains("Loading..."), "output:\n{}", output);
}

// ===== Sorting =====

#[test]
fn date_column_toggles_ascending_then_descending() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('4'));
    assert_eq!(harness.row_ids(), vec!["1", "2", "3", "4", "5"]);

    harness.send_key(KeyCode::Char('4'));
    assert_eq!(harness.row_ids(), vec!["5", "4", "3", "2", "1"]);

    harness.send_key(KeyCode::Char('4'));
    assert!(harness.state().sort.is_empty());
}

#[test]
fn sort_orders_only_revealed_rows() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('4'));
    harness.send_key(KeyCode::Char('4'));

    // Newest loaded record (10) is hidden until revealed.
    assert!(!harness.row_ids().contains(&"10".to_string()));
}

#[test]
fn alt_digit_adds_secondary_sort_key() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('2'));
    harness.send_key_with_mods(KeyCode::Char('4'), KeyModifiers::ALT);
    harness.send_key_with_mods(KeyCode::Char('4'), KeyModifiers::ALT);

    assert_eq!(harness.state().sort.keys().len(), 2);
    // ACTIVE: 4, 1; BLOCKED: 3; INACTIVE: 5, 2
    assert_eq!(harness.row_ids(), vec!["4", "1", "3", "5", "2"]);
}

// ===== Status actions =====

#[test]
fn status_key_updates_selected_record_and_stats() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Char('a'));

    let record = harness.state().records().get(&RecordId::new("2").unwrap());
    assert_eq!(record.map(|r| r.status()), Some(Status::Active));
    assert_eq!(harness.state().stats().inactive, 2);

    let output = harness.render_to_string();
    assert!(output.contains("Inactive Users: 20%"), "output:\n{}", output);
}

#[test]
fn status_change_is_lost_on_page_reload() {
    let mut harness = loaded();
    harness.send_key(KeyCode::Char('b'));

    harness.send_key_and_settle(KeyCode::Char('l'));
    harness.send_key_and_settle(KeyCode::Char('h'));

    let record = harness.state().records().get(&RecordId::new("1").unwrap());
    assert_eq!(record.map(|r| r.status()), Some(Status::Active));
}

// ===== Shell =====

#[test]
fn help_overlay_opens_and_closes() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('?'));
    let output = harness.render_to_string();
    assert!(output.contains("Keyboard Shortcuts"), "output:\n{}", output);

    harness.send_key(KeyCode::Esc);
    assert!(!harness.state().help_visible);
}

#[test]
fn q_quits() {
    let mut harness = loaded();

    harness.send_key(KeyCode::Char('q'));

    assert!(!harness.is_running());
    assert!(harness.state().is_torn_down());
}
