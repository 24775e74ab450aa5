//! Account store contract and in-memory implementation

use std::sync::RwLock;

use crate::models::{AccountSummary, ServiceType};

/// Read access to the configured accounts.
///
/// The store's change notification carries no payload; consumers re-fetch
/// through these methods and diff on their own.
pub trait AccountStore: Send + Sync {
    /// All accounts in display order
    fn ordered_accounts(&self) -> Vec<AccountSummary>;

    /// The account currently shown, if any
    fn active_account(&self) -> Option<AccountSummary>;

    /// The sub-service currently shown for the active account
    fn active_service_type(&self) -> ServiceType;
}

struct State {
    accounts: Vec<AccountSummary>,
    active_account_id: Option<String>,
    active_service_type: ServiceType,
}

/// In-memory implementation of [`AccountStore`]
///
/// Used for tests and as a stub until the real account storage is wired in.
pub struct InMemoryAccountStore {
    inner: RwLock<State>,
}

impl InMemoryAccountStore {
    /// Create an empty store showing the primary mail view
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(State {
                accounts: Vec::new(),
                active_account_id: None,
                active_service_type: ServiceType::Mail,
            }),
        }
    }

    /// Replace the account list.
    ///
    /// The active account is kept when it survives the replacement and
    /// falls back to the first account otherwise.
    pub fn set_accounts(&self, accounts: Vec<AccountSummary>) {
        let mut state = self.inner.write().unwrap();
        let keep_active = state
            .active_account_id
            .as_deref()
            .is_some_and(|id| accounts.iter().any(|a| a.id == id));
        if !keep_active {
            state.active_account_id = accounts.first().map(|a| a.id.clone());
            state.active_service_type = ServiceType::Mail;
        }
        state.accounts = accounts;
    }

    /// Switch the active account; unknown ids are ignored.
    ///
    /// Switching accounts always lands on the primary mail view.
    pub fn set_active_account(&self, id: &str) {
        let mut state = self.inner.write().unwrap();
        if state.accounts.iter().any(|a| a.id == id) {
            state.active_account_id = Some(id.to_string());
            state.active_service_type = ServiceType::Mail;
        }
    }

    /// Switch the sub-service shown for the active account
    pub fn set_active_service_type(&self, service_type: ServiceType) {
        self.inner.write().unwrap().active_service_type = service_type;
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn ordered_accounts(&self) -> Vec<AccountSummary> {
        self.inner.read().unwrap().accounts.clone()
    }

    fn active_account(&self) -> Option<AccountSummary> {
        let state = self.inner.read().unwrap();
        let id = state.active_account_id.as_deref()?;
        state.accounts.iter().find(|a| a.id == id).cloned()
    }

    fn active_service_type(&self) -> ServiceType {
        self.inner.read().unwrap().active_service_type
    }
}
