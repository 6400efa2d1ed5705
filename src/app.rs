//! Application state and event handling
//!
//! `App` is the root of the shell:
//! - reads theme, account and locale from durable storage once per mount
//! - hands views a `PublicStates` handle to the account identity
//! - picks exactly one screen (welcome, opening or the tabbed body)
//! - routes keyboard input to that screen

use crate::account::{AccountRepository, AccountState, PublicStates};
use crate::body::Body;
use crate::config::Config;
use crate::i18n::{resolve_catalog, Catalog, Messages};
use crate::storage::{keys, LocalStorage, SessionStorage, Storage};
use crate::types::ScreenMode;
use crate::ui::Theme;
use crate::views::WelcomeView;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Inputs the root is started with
#[derive(Debug, Clone, Default)]
pub struct AppProps {
    pub welcome: bool,
    pub opening: bool,
    /// Message catalog supplied from outside; overrides catalog lookup
    pub strings: Option<Catalog>,
}

/// Document-level attributes of the shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lang: Option<String>,
}

/// The one screen being shown below the title bar
pub enum Screen {
    Welcome(WelcomeView),
    Opening,
    Body(Body),
}

impl Screen {
    pub fn mode(&self) -> ScreenMode {
        match self {
            Screen::Welcome(_) => ScreenMode::Welcome,
            Screen::Opening => ScreenMode::Opening,
            Screen::Body(_) => ScreenMode::Normal,
        }
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub props: AppProps,
    pub config: Config,
    pub theme: Theme,
    pub messages: Messages,
    pub account: AccountState,
    pub document: Document,
    pub screen: Screen,

    /// Spinner frame counter, advanced on every tick
    pub frame: usize,

    local: LocalStorage,
    session: SessionStorage,
}

impl App {
    /// Create and mount the root
    pub fn new(
        props: AppProps,
        config: Config,
        local: LocalStorage,
        mut session: SessionStorage,
    ) -> Result<Self> {
        let theme = Theme::from_storage(&local)
            .context("Failed to load theme color")?;

        let account = AccountRepository::load(&local);

        let stored_locale = local.get(keys::LOCALE).filter(|l| !l.trim().is_empty());
        let locale = stored_locale
            .clone()
            .unwrap_or_else(|| config.default_locale.clone());

        let catalog = match &props.strings {
            Some(strings) => strings.clone(),
            None => resolve_catalog(&locale, config.messages_dir.as_deref())
                .with_context(|| format!("Failed to load messages for {}", locale))?,
        };
        let messages = Messages::new(locale, catalog);
        tracing::debug!(locale = messages.locale(), count = messages.len(), "message catalog");

        let screen = match ScreenMode::from_flags(props.welcome, props.opening) {
            ScreenMode::Welcome => Screen::Welcome(WelcomeView::new()),
            ScreenMode::Opening => Screen::Opening,
            ScreenMode::Normal => Screen::Body(Body::mount(&mut session)),
        };

        let mut app = Self {
            should_quit: false,
            props,
            config,
            theme,
            messages,
            account,
            document: Document::default(),
            screen,
            frame: 0,
            local,
            session,
        };
        app.mount(stored_locale);

        tracing::info!(
            mode = ?app.screen_mode(),
            account_type = app.account.account_type.as_str(),
            "shell mounted"
        );
        Ok(app)
    }

    /// One-time effects after construction
    fn mount(&mut self, stored_locale: Option<String>) {
        if let Some(locale) = stored_locale {
            self.document.lang = Some(locale);
        }
        AccountRepository::save(&mut self.local, &self.account);
    }

    pub fn screen_mode(&self) -> ScreenMode {
        self.screen.mode()
    }

    pub fn local_storage(&self) -> &LocalStorage {
        &self.local
    }

    /// Whether the current screen is capturing text input
    pub fn is_editing(&self) -> bool {
        match &self.screen {
            Screen::Welcome(view) => view.is_editing(),
            Screen::Opening => false,
            Screen::Body(body) => body.is_editing(),
        }
    }

    /// Rebuild the whole root from storage. Session storage carries over.
    pub fn reload(&mut self) -> Result<()> {
        tracing::info!("reloading shell");
        let local = std::mem::take(&mut self.local);
        let session = std::mem::take(&mut self.session);
        *self = App::new(self.props.clone(), self.config.clone(), local, session)?;
        Ok(())
    }

    /// Advance timers: spinner frame and snackbar expiry
    pub fn on_tick(&mut self, now: Instant) {
        self.frame = self.frame.wrapping_add(1);
        if let Screen::Body(body) = &mut self.screen {
            body.snackbars.tick(now);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global keys
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::F(5) => return self.reload(),
            KeyCode::Char('r') if ctrl => return self.reload(),
            KeyCode::Char('q') if !self.is_editing() => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        match &mut self.screen {
            Screen::Welcome(view) => {
                let mut states = PublicStates::new(&mut self.account, &mut self.local);
                view.handle_key(key, &mut states);
            }
            Screen::Opening => {}
            Screen::Body(body) => {
                let mut states = PublicStates::new(&mut self.account, &mut self.local);
                body.handle_key(key, &mut states, &self.messages, &mut self.session);
            }
        }

        Ok(())
    }
}
