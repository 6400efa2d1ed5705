//! Views hosted by the shell
//!
//! Each view is plain state plus a key handler. Views never outlive the
//! screen or tab that constructed them.

pub mod home;
pub mod settings;
pub mod welcome;

pub use home::{HomeAction, HomeView};
pub use settings::{SettingsItem, SettingsView};
pub use welcome::{WelcomeItem, WelcomeView};

use crossterm::event::{KeyCode, KeyEvent};

/// Result of feeding a key to a `TextInput`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Editing,
    Commit(String),
    Cancel,
}

/// Single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub const MAX_LEN: usize = 32;

    pub fn new(initial: &str) -> Self {
        Self {
            value: initial.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        match key.code {
            KeyCode::Enter => InputOutcome::Commit(self.value.trim().to_string()),
            KeyCode::Esc => InputOutcome::Cancel,
            KeyCode::Backspace => {
                self.value.pop();
                InputOutcome::Editing
            }
            KeyCode::Char(c) if !c.is_control() && self.value.chars().count() < Self::MAX_LEN => {
                self.value.push(c);
                InputOutcome::Editing
            }
            _ => InputOutcome::Editing,
        }
    }
}

/// Move a list cursor one step, clamped to `len`
pub(crate) fn step_cursor(cursor: usize, len: usize, key: &KeyEvent) -> usize {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => (cursor + 1).min(len.saturating_sub(1)),
        KeyCode::Char('k') | KeyCode::Up => cursor.saturating_sub(1),
        KeyCode::Char('g') => 0,
        KeyCode::Char('G') => len.saturating_sub(1),
        _ => cursor,
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }
}
