//! Settings view: account identity, language and theme color
//!
//! Account changes apply immediately through `PublicStates`. Language and
//! theme color are written to storage and picked up on the next reload, since
//! the root reads them once at startup.

use super::{step_cursor, InputOutcome, TextInput};
use crate::account::PublicStates;
use crate::i18n::{Messages, BUILTIN_LOCALES};
use crate::snackbar::{SnackVariant, Snackbars};
use crate::storage::{keys, Storage};
use crate::ui::theme::{palette_name, NamedPalette, Palette, BLUE, CUSTOM_PALETTE, PALETTES};
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    AccountName,
    AccountType,
    Language,
    ThemeColor,
}

impl SettingsItem {
    pub fn all() -> &'static [SettingsItem] {
        &[
            SettingsItem::AccountName,
            SettingsItem::AccountType,
            SettingsItem::Language,
            SettingsItem::ThemeColor,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SettingsItem::AccountName => "settings.accountName",
            SettingsItem::AccountType => "settings.accountType",
            SettingsItem::Language => "settings.language",
            SettingsItem::ThemeColor => "settings.themeColor",
        }
    }
}

/// Settings tab state. Only lives while the settings tab is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsView {
    pub cursor: usize,
    pub editing: Option<TextInput>,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> SettingsItem {
        SettingsItem::all()
            .get(self.cursor)
            .copied()
            .unwrap_or(SettingsItem::AccountName)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        states: &mut PublicStates,
        messages: &Messages,
        snackbars: &mut Snackbars,
    ) {
        if let Some(input) = &mut self.editing {
            match input.handle_key(key) {
                InputOutcome::Editing => {}
                InputOutcome::Cancel => self.editing = None,
                InputOutcome::Commit(name) => {
                    self.editing = None;
                    if name.is_empty() {
                        snackbars.enqueue(messages.get("settings.nameEmpty"), SnackVariant::Warning);
                    } else if name != states.account_name() {
                        states.set_account_name(name);
                        snackbars.enqueue(messages.get("settings.saved"), SnackVariant::Success);
                    }
                }
            }
            return;
        }

        if key.code != KeyCode::Enter {
            self.cursor = step_cursor(self.cursor, SettingsItem::all().len(), &key);
            return;
        }

        match self.selected() {
            SettingsItem::AccountName => {
                self.editing = Some(TextInput::new(states.account_name()));
            }
            SettingsItem::AccountType => {
                let next = states.account_type().next();
                states.set_account_type(next);
                snackbars.enqueue(messages.get("settings.saved"), SnackVariant::Success);
            }
            SettingsItem::Language => {
                let next = next_locale(states.storage(), messages.locale());
                store_for_reload(states.storage(), keys::LOCALE, next, messages, snackbars);
            }
            SettingsItem::ThemeColor => {
                let json = next_palette(states.storage()).to_json();
                store_for_reload(states.storage(), keys::COLOR, &json, messages, snackbars);
            }
        }
    }
}

/// Locale that will be used after the next reload
pub fn pending_locale(storage: &dyn Storage, active: &str) -> String {
    storage.get(keys::LOCALE).unwrap_or_else(|| active.to_string())
}

/// Palette name that will be used after the next reload
pub fn pending_palette(storage: &dyn Storage) -> String {
    match storage.get(keys::COLOR) {
        None => BLUE.name.to_string(),
        Some(raw) => serde_json::from_str::<Palette>(&raw)
            .ok()
            .and_then(|p| palette_name(&p))
            .unwrap_or(CUSTOM_PALETTE)
            .to_string(),
    }
}

fn next_locale(storage: &dyn Storage, active: &str) -> &'static str {
    let current = pending_locale(storage, active);
    let next = BUILTIN_LOCALES
        .iter()
        .position(|l| *l == current)
        .map(|i| (i + 1) % BUILTIN_LOCALES.len())
        .unwrap_or(0);
    BUILTIN_LOCALES[next]
}

fn next_palette(storage: &dyn Storage) -> NamedPalette {
    let current = pending_palette(storage);
    let next = PALETTES
        .iter()
        .position(|p| p.name == current)
        .map(|i| (i + 1) % PALETTES.len())
        .unwrap_or(0);
    PALETTES[next]
}

fn store_for_reload(
    storage: &mut dyn Storage,
    key: &str,
    value: &str,
    messages: &Messages,
    snackbars: &mut Snackbars,
) {
    match storage.set(key, value) {
        Ok(()) => {
            tracing::info!(key, value, "stored, applies after reload");
            snackbars.enqueue(messages.get("settings.reloadHint"), SnackVariant::Info);
        }
        Err(e) => {
            tracing::warn!(key, error = %format!("{:#}", e), "failed to store setting");
            snackbars.enqueue(e.to_string(), SnackVariant::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountState;
    use crate::i18n::builtin_catalog;
    use crate::storage::LocalStorage;
    use crate::types::AccountType;
    use crate::views::test_keys::{ch, key};

    fn messages() -> Messages {
        Messages::new("en-US", builtin_catalog("en-US"))
    }

    #[test]
    fn test_edit_account_name() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let mut snackbars = Snackbars::default();
        let messages = messages();

        {
            let mut states = PublicStates::new(&mut account, &mut storage);
            let mut view = SettingsView::new();
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
            assert!(view.is_editing());

            for _ in 0.."Guest".len() {
                view.handle_key(key(KeyCode::Backspace), &mut states, &messages, &mut snackbars);
            }
            for c in "Alex".chars() {
                view.handle_key(ch(c), &mut states, &messages, &mut snackbars);
            }
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
            assert!(!view.is_editing());
        }

        assert_eq!(account.name, "Alex");
        assert_eq!(storage.get(keys::ACCOUNT_NAME).as_deref(), Some("Alex"));
        assert_eq!(snackbars.len(), 1);
    }

    #[test]
    fn test_cancel_edit_keeps_name() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let mut snackbars = Snackbars::default();
        let messages = messages();

        let mut states = PublicStates::new(&mut account, &mut storage);
        let mut view = SettingsView::new();
        view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
        view.handle_key(ch('x'), &mut states, &messages, &mut snackbars);
        view.handle_key(key(KeyCode::Esc), &mut states, &messages, &mut snackbars);

        assert!(!view.is_editing());
        assert_eq!(states.account_name(), "Guest");
    }

    #[test]
    fn test_empty_name_warns() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let mut snackbars = Snackbars::default();
        let messages = messages();

        {
            let mut states = PublicStates::new(&mut account, &mut storage);
            let mut view = SettingsView::new();
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
            for _ in 0.."Guest".len() {
                view.handle_key(key(KeyCode::Backspace), &mut states, &messages, &mut snackbars);
            }
            view.handle_key(ch(' '), &mut states, &messages, &mut snackbars);
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
        }

        assert_eq!(account.name, "Guest");
        let snack = snackbars.visible().next().unwrap();
        assert_eq!(snack.variant, SnackVariant::Warning);
        assert_eq!(snack.message, "Account name cannot be empty");
    }

    #[test]
    fn test_cycle_account_type() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let mut snackbars = Snackbars::default();
        let messages = messages();

        {
            let mut states = PublicStates::new(&mut account, &mut storage);
            let mut view = SettingsView::new();
            view.handle_key(ch('j'), &mut states, &messages, &mut snackbars);
            assert_eq!(view.selected(), SettingsItem::AccountType);
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
        }

        assert_eq!(account.account_type, AccountType::Microsoft);
        assert_eq!(storage.get(keys::ACCOUNT_TYPE).as_deref(), Some("1"));
    }

    #[test]
    fn test_language_and_color_are_stored() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let mut snackbars = Snackbars::default();
        let messages = messages();

        {
            let mut states = PublicStates::new(&mut account, &mut storage);
            let mut view = SettingsView::new();
            view.cursor = 2;
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
            view.cursor = 3;
            view.handle_key(key(KeyCode::Enter), &mut states, &messages, &mut snackbars);
        }

        assert_eq!(storage.get(keys::LOCALE).as_deref(), Some("zh-CN"));
        assert_eq!(pending_palette(&storage), "indigo");
        assert_eq!(snackbars.len(), 2);
    }

    #[test]
    fn test_pending_palette_custom() {
        let mut storage = LocalStorage::in_memory();
        assert_eq!(pending_palette(&storage), "blue");
        storage.set(keys::COLOR, r##"{"500": "#010203"}"##).unwrap();
        assert_eq!(pending_palette(&storage), "custom");
        assert_eq!(next_palette(&storage).name, "blue");
    }
}
