//! Session-keyed account storage
//!
//! A presentation layer needs exactly one live account per user session.
//! Instead of a process-wide global replaced by "create/reset" calls, the
//! `SessionStore` maps session ids to accounts and is injected into the
//! presentation layer explicitly, which also keeps the ledger unit-testable
//! without process restarts.
//!
//! # Thread Safety
//!
//! Accounts are stored in a `DashMap`, whose internal sharding serializes
//! access per entry: two sessions can operate concurrently, while all
//! operations on one session's account are exclusive. There is no
//! cross-account shared state.

use crate::core::Account;
use crate::pricing::PriceOracle;
use crate::types::LedgerError;
use dashmap::DashMap;
use rust_decimal::Decimal;

/// Maps session ids to live accounts
///
/// Creating a session that already exists replaces its account (the UI
/// "reset account" lifecycle: the old account is simply discarded).
#[derive(Default)]
pub struct SessionStore {
    /// Live accounts keyed by session id
    accounts: DashMap<String, Account>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        SessionStore {
            accounts: DashMap::new(),
        }
    }

    /// Create (or reset) the account for a session
    ///
    /// Any existing account under the same session id is discarded.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Key identifying the session
    /// * `oracle` - Pricing capability for the new account
    /// * `opening_deposit` - Non-negative starting funds
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` when the opening deposit is negative; the
    /// existing account, if any, is left untouched in that case.
    pub fn create(
        &self,
        session_id: &str,
        oracle: Box<dyn PriceOracle>,
        opening_deposit: Decimal,
    ) -> Result<(), LedgerError> {
        let account = Account::new(oracle, opening_deposit)?;
        self.accounts.insert(session_id.to_string(), account);
        Ok(())
    }

    /// Discard a session's account
    ///
    /// Returns `true` if an account existed for the session.
    pub fn remove(&self, session_id: &str) -> bool {
        self.accounts.remove(session_id).is_some()
    }

    /// Whether a session currently has a live account
    pub fn contains(&self, session_id: &str) -> bool {
        self.accounts.contains_key(session_id)
    }

    /// Number of live accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store has no live accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Run a closure against a session's account with exclusive access
    ///
    /// The entry stays locked for the duration of the closure, so no other
    /// caller can observe a partially-updated account.
    ///
    /// # Arguments
    ///
    /// * `session_id` - Key identifying the session
    /// * `f` - Closure receiving the account mutably
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` when the session has no live account, or
    /// whatever error the closure itself returns.
    pub fn with_account<F, T>(&self, session_id: &str, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Account) -> Result<T, LedgerError>,
    {
        let mut entry = self
            .accounts
            .get_mut(session_id)
            .ok_or_else(|| LedgerError::session_not_found(session_id))?;
        f(entry.value_mut())
    }
}
