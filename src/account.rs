//! Account identity shared across the shell
//!
//! `AccountRepository` loads and saves the identity; `PublicStates` is the
//! handle views receive to read or change it. Every setter writes through to
//! durable storage.

use crate::storage::{keys, Storage};
use crate::types::AccountType;

pub const DEFAULT_ACCOUNT_NAME: &str = "Guest";

/// The signed-in identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub name: String,
    pub account_type: AccountType,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            name: DEFAULT_ACCOUNT_NAME.to_string(),
            account_type: AccountType::None,
        }
    }
}

/// Load/save of `AccountState` over durable storage
pub struct AccountRepository;

impl AccountRepository {
    /// Read the stored identity. Missing or unreadable values fall back to the defaults.
    pub fn load(storage: &dyn Storage) -> AccountState {
        let account_type = storage
            .get(keys::ACCOUNT_TYPE)
            .and_then(|v| AccountType::parse_stored(&v))
            .unwrap_or_default();

        let name = storage
            .get(keys::ACCOUNT_NAME)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCOUNT_NAME.to_string());

        AccountState { name, account_type }
    }

    /// Write both keys. Failures are logged and otherwise ignored.
    pub fn save(storage: &mut dyn Storage, state: &AccountState) {
        let result = storage
            .set(keys::ACCOUNT_TYPE, &state.account_type.ordinal().to_string())
            .and_then(|_| storage.set(keys::ACCOUNT_NAME, &state.name));

        if let Err(e) = result {
            tracing::warn!(error = %format!("{:#}", e), "failed to save account");
        }
    }
}

/// Read/write handle on the account identity
pub struct PublicStates<'a> {
    account: &'a mut AccountState,
    storage: &'a mut dyn Storage,
}

impl<'a> PublicStates<'a> {
    pub fn new(account: &'a mut AccountState, storage: &'a mut dyn Storage) -> Self {
        Self { account, storage }
    }

    pub fn account_name(&self) -> &str {
        &self.account.name
    }

    pub fn account_type(&self) -> AccountType {
        self.account.account_type
    }

    pub fn set_account_name(&mut self, name: impl Into<String>) {
        self.account.name = name.into();
        tracing::info!(name = %self.account.name, "account name changed");
        AccountRepository::save(&mut *self.storage, self.account);
    }

    pub fn set_account_type(&mut self, account_type: AccountType) {
        self.account.account_type = account_type;
        tracing::info!(account_type = account_type.as_str(), "account type changed");
        AccountRepository::save(&mut *self.storage, self.account);
    }

    /// Direct access to durable storage for views that own other keys
    pub fn storage(&mut self) -> &mut dyn Storage {
        &mut *self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;

    #[test]
    fn test_load_defaults() {
        let storage = LocalStorage::in_memory();
        let state = AccountRepository::load(&storage);
        assert_eq!(state, AccountState::default());
        assert_eq!(state.name, "Guest");
        assert_eq!(state.account_type, AccountType::None);
    }

    #[test]
    fn test_load_each_stored_type() {
        for t in AccountType::all() {
            let mut storage = LocalStorage::in_memory();
            storage.set(keys::ACCOUNT_TYPE, &t.ordinal().to_string()).unwrap();
            assert_eq!(AccountRepository::load(&storage).account_type, *t);
        }
    }

    #[test]
    fn test_load_invalid_type_falls_back() {
        let mut storage = LocalStorage::in_memory();
        storage.set(keys::ACCOUNT_TYPE, "seven").unwrap();
        storage.set(keys::ACCOUNT_NAME, "   ").unwrap();

        let state = AccountRepository::load(&storage);
        assert_eq!(state.account_type, AccountType::None);
        assert_eq!(state.name, "Guest");
    }

    #[test]
    fn test_setters_write_through() {
        let mut storage = LocalStorage::in_memory();
        let mut account = AccountState::default();

        let mut states = PublicStates::new(&mut account, &mut storage);
        states.set_account_name("Steve");
        assert_eq!(states.account_name(), "Steve");
        states.set_account_type(AccountType::Mojang);
        assert_eq!(states.account_type(), AccountType::Mojang);

        assert_eq!(storage.get(keys::ACCOUNT_NAME).as_deref(), Some("Steve"));
        assert_eq!(storage.get(keys::ACCOUNT_TYPE).as_deref(), Some("2"));
        assert_eq!(account.name, "Steve");
    }
}
