//! Tabbed body of the launcher
//!
//! Owns the active tab and the one view that belongs to it. Views of
//! inactive tabs do not exist: switching tabs drops the current view and
//! builds the next one from scratch. The active tab index is kept in session
//! storage so a reload lands on the same tab.

use crate::account::PublicStates;
use crate::i18n::Messages;
use crate::snackbar::Snackbars;
use crate::storage::{keys, Storage};
use crate::types::BodyTab;
use crate::views::{HomeView, SettingsView};
use crossterm::event::{KeyCode, KeyEvent};

/// The content of the active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Home(HomeView),
    Settings(SettingsView),
    /// Tabs without content (server, tool, mods)
    Empty,
}

impl ActiveView {
    pub fn for_tab(tab: BodyTab) -> Self {
        match tab {
            BodyTab::Home => ActiveView::Home(HomeView::new()),
            BodyTab::Settings => ActiveView::Settings(SettingsView::new()),
            BodyTab::Server | BodyTab::Tool | BodyTab::Mods => ActiveView::Empty,
        }
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// `None` when no digits lead the string.
fn parse_int_prefix(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Saturate absurdly long inputs instead of failing
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Tab to start on given the stored session value.
///
/// Missing, unparseable and zero values land on home, as do indices outside
/// the tab strip.
pub fn initial_tab(stored: Option<&str>) -> BodyTab {
    stored
        .and_then(parse_int_prefix)
        .filter(|idx| *idx > 0)
        .and_then(|idx| BodyTab::from_index(idx as usize))
        .unwrap_or(BodyTab::Home)
}

pub struct Body {
    active_tab: BodyTab,
    view: ActiveView,
    pub snackbars: Snackbars,
}

impl Body {
    /// Build the body, restoring the tab from session storage
    pub fn mount(session: &mut dyn Storage) -> Self {
        let stored = session.get(keys::TAB);
        let active_tab = initial_tab(stored.as_deref());
        tracing::debug!(stored = ?stored, tab = ?active_tab, "body mounted");

        let body = Self {
            active_tab,
            view: ActiveView::for_tab(active_tab),
            snackbars: Snackbars::default(),
        };
        body.persist(session);
        body
    }

    pub fn active_tab(&self) -> BodyTab {
        self.active_tab
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    /// Whether the active view is capturing text input
    pub fn is_editing(&self) -> bool {
        matches!(&self.view, ActiveView::Settings(s) if s.is_editing())
    }

    /// Switch tabs. Re-selecting the active tab keeps its view.
    pub fn select(&mut self, tab: BodyTab, session: &mut dyn Storage) {
        if tab == self.active_tab {
            return;
        }

        tracing::debug!(from = ?self.active_tab, to = ?tab, "tab changed");
        self.active_tab = tab;
        self.view = ActiveView::for_tab(tab);
        self.persist(session);
    }

    fn persist(&self, session: &mut dyn Storage) {
        if let Err(e) = session.set(keys::TAB, &self.active_tab.index().to_string()) {
            tracing::warn!(error = %format!("{:#}", e), "failed to store active tab");
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        states: &mut PublicStates,
        messages: &Messages,
        session: &mut dyn Storage,
    ) {
        if !self.is_editing() {
            let requested = match key.code {
                KeyCode::Char(c @ '1'..='5') => {
                    BodyTab::from_index(c as usize - '1' as usize)
                }
                KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(self.active_tab.previous()),
                KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(self.active_tab.next()),
                _ => None,
            };

            if let Some(tab) = requested {
                self.select(tab, session);
                return;
            }
        }

        let switch = match &mut self.view {
            ActiveView::Home(home) => home.handle_key(key, states, messages, &mut self.snackbars),
            ActiveView::Settings(settings) => {
                settings.handle_key(key, states, messages, &mut self.snackbars);
                None
            }
            ActiveView::Empty => None,
        };

        if let Some(tab) = switch {
            self.select(tab, session);
        }
    }
}
