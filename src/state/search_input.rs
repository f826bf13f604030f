//! Search text editing (pure state transitions).
//!
//! The cursor counts characters, not bytes, so multi-byte input edits
//! cleanly. All functions take the input by value and return the new one.

/// Text being edited plus a character cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInput {
    text: String,
    cursor: usize,
}

impl SearchInput {
    /// Start editing `text` with the cursor at its end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of character position `chars`.
    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Insert `ch` at the cursor and advance past it.
pub fn handle_char_input(input: SearchInput, ch: char) -> SearchInput {
    let mut input = input;
    let at = input.byte_offset(input.cursor);
    input.text.insert(at, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(input: SearchInput) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let mut input = input;
    let at = input.byte_offset(input.cursor - 1);
    input.text.remove(at);
    input.cursor -= 1;
    input
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(input: SearchInput) -> SearchInput {
    if input.cursor >= input.char_len() {
        return input;
    }
    let mut input = input;
    let at = input.byte_offset(input.cursor);
    input.text.remove(at);
    input
}

/// Saturates at 0.
pub fn handle_cursor_left(input: SearchInput) -> SearchInput {
    SearchInput {
        cursor: input.cursor.saturating_sub(1),
        ..input
    }
}

/// Saturates at the text length.
pub fn handle_cursor_right(input: SearchInput) -> SearchInput {
    let max = input.char_len();
    SearchInput {
        cursor: (input.cursor + 1).min(max),
        ..input
    }
}

/// Move the cursor to the start.
pub fn handle_home(input: SearchInput) -> SearchInput {
    SearchInput { cursor: 0, ..input }
}

/// Move the cursor past the last char.
pub fn handle_end(input: SearchInput) -> SearchInput {
    let cursor = input.char_len();
    SearchInput { cursor, ..input }
}

/// Erase everything.
pub fn handle_clear(_input: SearchInput) -> SearchInput {
    SearchInput::default()
}

#[cfg(test)]
#[path = "search_input_tests.rs"]
mod tests;
