//! Core data types for blocklaunch
//!
//! Small closed enumerations shared by the root, the body and the views.

/// Kind of account the player is signed in with.
///
/// Stored in durable storage by ordinal, so the order of variants is part of
/// the storage format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    #[default]
    None,
    Microsoft,
    Mojang,
    Offline,
    Injector,
}

impl AccountType {
    pub fn all() -> &'static [AccountType] {
        &[
            AccountType::None,
            AccountType::Microsoft,
            AccountType::Mojang,
            AccountType::Offline,
            AccountType::Injector,
        ]
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            AccountType::None => 0,
            AccountType::Microsoft => 1,
            AccountType::Mojang => 2,
            AccountType::Offline => 3,
            AccountType::Injector => 4,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::all().get(ordinal as usize).copied()
    }

    /// Parse a stored value. Accepts the ordinal (what we write) and the
    /// lowercase variant name (hand-edited storage files).
    pub fn parse_stored(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(ordinal) = value.parse::<u8>() {
            return Self::from_ordinal(ordinal);
        }
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::None => "none",
            AccountType::Microsoft => "microsoft",
            AccountType::Mojang => "mojang",
            AccountType::Offline => "offline",
            AccountType::Injector => "injector",
        }
    }

    /// Message key of the localized label
    pub fn label_key(&self) -> &'static str {
        match self {
            AccountType::None => "accountType.none",
            AccountType::Microsoft => "accountType.microsoft",
            AccountType::Mojang => "accountType.mojang",
            AccountType::Offline => "accountType.offline",
            AccountType::Injector => "accountType.injector",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AccountType::None => AccountType::Microsoft,
            AccountType::Microsoft => AccountType::Mojang,
            AccountType::Mojang => AccountType::Offline,
            AccountType::Offline => AccountType::Injector,
            AccountType::Injector => AccountType::None,
        }
    }
}

/// Top-level screen chosen by the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    Welcome,
    Opening,
    Normal,
}

impl ScreenMode {
    /// Resolve the two independent launch flags. Welcome wins over opening.
    pub fn from_flags(welcome: bool, opening: bool) -> Self {
        if welcome {
            ScreenMode::Welcome
        } else if opening {
            ScreenMode::Opening
        } else {
            ScreenMode::Normal
        }
    }
}

/// Body tabs, in tab-strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyTab {
    #[default]
    Home,
    Server,
    Tool,
    Mods,
    Settings,
}

impl BodyTab {
    pub fn all() -> &'static [BodyTab] {
        &[
            BodyTab::Home,
            BodyTab::Server,
            BodyTab::Tool,
            BodyTab::Mods,
            BodyTab::Settings,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            BodyTab::Home => 0,
            BodyTab::Server => 1,
            BodyTab::Tool => 2,
            BodyTab::Mods => 3,
            BodyTab::Settings => 4,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::all().get(idx).copied()
    }

    /// Message key of the tab header
    pub fn title_key(&self) -> &'static str {
        match self {
            BodyTab::Home => "home.title",
            BodyTab::Server => "server.title",
            BodyTab::Tool => "tool.title",
            BodyTab::Mods => "mods.title",
            BodyTab::Settings => "settings.title",
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::all().len()).unwrap_or_default()
    }

    pub fn previous(&self) -> Self {
        let len = Self::all().len();
        Self::from_index((self.index() + len - 1) % len).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_ordinals() {
        for (i, t) in AccountType::all().iter().enumerate() {
            assert_eq!(t.ordinal() as usize, i);
            assert_eq!(AccountType::from_ordinal(i as u8), Some(*t));
        }
        assert_eq!(AccountType::from_ordinal(5), None);
    }

    #[test]
    fn test_account_type_parse_stored() {
        assert_eq!(AccountType::parse_stored("3"), Some(AccountType::Offline));
        assert_eq!(AccountType::parse_stored(" 1 "), Some(AccountType::Microsoft));
        assert_eq!(AccountType::parse_stored("Injector"), Some(AccountType::Injector));
        assert_eq!(AccountType::parse_stored("9"), None);
        assert_eq!(AccountType::parse_stored("steve"), None);
        assert_eq!(AccountType::parse_stored(""), None);
    }

    #[test]
    fn test_screen_mode_precedence() {
        assert_eq!(ScreenMode::from_flags(true, true), ScreenMode::Welcome);
        assert_eq!(ScreenMode::from_flags(true, false), ScreenMode::Welcome);
        assert_eq!(ScreenMode::from_flags(false, true), ScreenMode::Opening);
        assert_eq!(ScreenMode::from_flags(false, false), ScreenMode::Normal);
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(BodyTab::Home.next(), BodyTab::Server);
        assert_eq!(BodyTab::Settings.next(), BodyTab::Home);
        assert_eq!(BodyTab::Home.previous(), BodyTab::Settings);
        assert_eq!(BodyTab::from_index(4), Some(BodyTab::Settings));
        assert_eq!(BodyTab::from_index(5), None);
    }
}
