//! Tests for search text editing.

use super::*;

#[test]
fn new_places_cursor_at_end() {
    let input = SearchInput::new("demo");
    assert_eq!(input.cursor(), 4);
    assert_eq!(input.text(), "demo");
}

#[test]
fn char_input_appends_at_end() {
    let input = handle_char_input(SearchInput::default(), 'd');
    let input = handle_char_input(input, 'e');

    assert_eq!(input.text(), "de");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn char_input_inserts_at_cursor() {
    let input = handle_cursor_left(SearchInput::new("dmo"));
    let input = handle_cursor_left(input);
    let input = handle_char_input(input, 'e');

    assert_eq!(input.text(), "demo");
    assert_eq!(input.cursor(), 2);
}

#[test]
fn backspace_removes_char_before_cursor() {
    let input = handle_backspace(SearchInput::new("demo"));
    assert_eq!(input.text(), "dem");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn backspace_at_start_is_noop() {
    let input = handle_home(SearchInput::new("demo"));
    let after = handle_backspace(input.clone());
    assert_eq!(after, input);
}

#[test]
fn delete_removes_char_under_cursor() {
    let input = handle_delete(handle_home(SearchInput::new("xdemo")));
    assert_eq!(input.text(), "demo");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn delete_at_end_is_noop() {
    let input = SearchInput::new("demo");
    assert_eq!(handle_delete(input.clone()), input);
}

#[test]
fn cursor_movement_saturates() {
    let input = handle_cursor_right(SearchInput::new("ab"));
    assert_eq!(input.cursor(), 2);

    let input = handle_cursor_left(handle_cursor_left(handle_cursor_left(input)));
    assert_eq!(input.cursor(), 0);
}

#[test]
fn multibyte_text_edits_by_character() {
    let input = SearchInput::new("Zoë");
    assert_eq!(input.cursor(), 3);

    let input = handle_backspace(input);
    assert_eq!(input.text(), "Zo");

    let input = handle_char_input(handle_home(input), 'ß');
    assert_eq!(input.text(), "ßZo");
    assert_eq!(input.cursor(), 1);
}

#[test]
fn clear_empties_text() {
    let input = handle_clear(SearchInput::new("demo"));
    assert_eq!(input.text(), "");
    assert_eq!(input.cursor(), 0);
}

#[test]
fn end_moves_past_last_char() {
    let input = handle_end(handle_home(SearchInput::new("demo")));
    assert_eq!(input.cursor(), 4);
}
