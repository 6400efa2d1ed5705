//! Home view: greeting and quick actions

use super::step_cursor;
use crate::account::PublicStates;
use crate::i18n::Messages;
use crate::snackbar::{SnackVariant, Snackbars};
use crate::types::BodyTab;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Play,
    AccountSettings,
}

impl HomeAction {
    pub fn all() -> &'static [HomeAction] {
        &[HomeAction::Play, HomeAction::AccountSettings]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            HomeAction::Play => "home.play",
            HomeAction::AccountSettings => "home.accountSettings",
        }
    }
}

/// Home tab state. Only lives while the home tab is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    pub cursor: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> HomeAction {
        HomeAction::all()
            .get(self.cursor)
            .copied()
            .unwrap_or(HomeAction::Play)
    }

    /// Handle a key; returns the tab the body should switch to, if any
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        states: &PublicStates,
        messages: &Messages,
        snackbars: &mut Snackbars,
    ) -> Option<BodyTab> {
        if key.code != KeyCode::Enter {
            self.cursor = step_cursor(self.cursor, HomeAction::all().len(), &key);
            return None;
        }

        match self.selected() {
            HomeAction::Play => {
                let text = messages.format("home.launching", &[("name", states.account_name())]);
                tracing::info!(account = states.account_name(), "play requested");
                snackbars.enqueue(text, SnackVariant::Info);
                None
            }
            HomeAction::AccountSettings => Some(BodyTab::Settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountState;
    use crate::i18n::builtin_catalog;
    use crate::storage::LocalStorage;
    use crate::views::test_keys::{ch, key};

    #[test]
    fn test_play_posts_snackbar() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let states = PublicStates::new(&mut account, &mut storage);
        let messages = Messages::new("en-US", builtin_catalog("en-US"));
        let mut snackbars = Snackbars::default();

        let mut home = HomeView::new();
        let switch = home.handle_key(key(KeyCode::Enter), &states, &messages, &mut snackbars);

        assert_eq!(switch, None);
        let posted: Vec<&str> = snackbars.visible().map(|s| s.message.as_str()).collect();
        assert_eq!(posted, vec!["Launching as Guest..."]);
    }

    #[test]
    fn test_account_settings_switches_tab() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();
        let states = PublicStates::new(&mut account, &mut storage);
        let messages = Messages::default();
        let mut snackbars = Snackbars::default();

        let mut home = HomeView::new();
        assert_eq!(home.handle_key(ch('j'), &states, &messages, &mut snackbars), None);
        assert_eq!(home.selected(), HomeAction::AccountSettings);
        assert_eq!(
            home.handle_key(key(KeyCode::Enter), &states, &messages, &mut snackbars),
            Some(BodyTab::Settings)
        );
        assert!(snackbars.is_empty());
    }
}
