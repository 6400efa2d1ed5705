//! Welcome (onboarding) view
//!
//! Shown instead of everything else when the launcher is started with
//! `--welcome`. Lets the player pick a name and account type before the
//! first launch.

use super::{step_cursor, InputOutcome, TextInput};
use crate::account::PublicStates;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeItem {
    AccountName,
    AccountType,
    Continue,
}

impl WelcomeItem {
    pub fn all() -> &'static [WelcomeItem] {
        &[
            WelcomeItem::AccountName,
            WelcomeItem::AccountType,
            WelcomeItem::Continue,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            WelcomeItem::AccountName => "settings.accountName",
            WelcomeItem::AccountType => "settings.accountType",
            WelcomeItem::Continue => "welcome.continue",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WelcomeView {
    pub cursor: usize,
    pub editing: Option<TextInput>,
    pub finished: bool,
}

impl WelcomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> WelcomeItem {
        WelcomeItem::all()
            .get(self.cursor)
            .copied()
            .unwrap_or(WelcomeItem::AccountName)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent, states: &mut PublicStates) {
        if let Some(input) = &mut self.editing {
            match input.handle_key(key) {
                InputOutcome::Editing => {}
                InputOutcome::Cancel => self.editing = None,
                InputOutcome::Commit(name) => {
                    self.editing = None;
                    if !name.is_empty() {
                        states.set_account_name(name);
                    }
                }
            }
            return;
        }

        if self.finished {
            return;
        }

        if key.code != KeyCode::Enter {
            self.cursor = step_cursor(self.cursor, WelcomeItem::all().len(), &key);
            return;
        }

        match self.selected() {
            WelcomeItem::AccountName => {
                self.editing = Some(TextInput::new(states.account_name()));
            }
            WelcomeItem::AccountType => {
                let next = states.account_type().next();
                states.set_account_type(next);
            }
            WelcomeItem::Continue => {
                tracing::info!(account = states.account_name(), "onboarding finished");
                self.finished = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountState;
    use crate::storage::{keys, LocalStorage, Storage};
    use crate::types::AccountType;
    use crate::views::test_keys::{ch, key};

    #[test]
    fn test_onboarding_flow() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();

        {
            let mut states = PublicStates::new(&mut account, &mut storage);
            let mut view = WelcomeView::new();

            view.handle_key(key(KeyCode::Enter), &mut states);
            view.handle_key(ch('!'), &mut states);
            view.handle_key(key(KeyCode::Enter), &mut states);

            view.handle_key(ch('j'), &mut states);
            view.handle_key(key(KeyCode::Enter), &mut states);
            view.handle_key(key(KeyCode::Enter), &mut states);

            view.handle_key(ch('j'), &mut states);
            view.handle_key(key(KeyCode::Enter), &mut states);
            assert!(view.finished);

            // Input after finishing is ignored
            view.handle_key(ch('k'), &mut states);
            assert_eq!(view.cursor, 2);
        }

        assert_eq!(account.name, "Guest!");
        assert_eq!(account.account_type, AccountType::Mojang);
        assert_eq!(storage.get(keys::ACCOUNT_TYPE).as_deref(), Some("2"));
    }
}
