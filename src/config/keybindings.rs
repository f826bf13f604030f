//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::{SortField, Status};
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Row cursor
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::CursorDown);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::CursorUp);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::CursorUp);

        // Pagination
        bind(KeyCode::Char('h'), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Char('l'), KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextPage);

        // Filters
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::CycleStatusFilter);
        bind(KeyCode::Char('d'), KeyModifiers::NONE, KeyAction::CycleDateRange);
        bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::ClearFilters);

        // Sorting: 1-5 select a column, Alt adds it to a multi-column sort
        for (digit, field) in ['1', '2', '3', '4', '5'].into_iter().zip(SortField::ALL) {
            bind(KeyCode::Char(digit), KeyModifiers::NONE, KeyAction::SortBy(field));
            bind(KeyCode::Char(digit), KeyModifiers::ALT, KeyAction::AddSortBy(field));
        }

        // Record actions
        bind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyAction::SetStatus(Status::Active),
        );
        bind(
            KeyCode::Char('i'),
            KeyModifiers::NONE,
            KeyAction::SetStatus(Status::Inactive),
        );
        bind(
            KeyCode::Char('b'),
            KeyModifiers::NONE,
            KeyAction::SetStatus(Status::Blocked),
        );

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);

        Self { bindings }
    }
}
