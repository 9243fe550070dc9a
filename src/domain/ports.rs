use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;

/// Read/write access to account records, keyed by account number.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Returns `Ok(None)` when no account has this number.
    async fn get(&self, account_number: &str) -> Result<Option<Account>>;
    /// Inserts or replaces the account under its number.
    async fn put(&self, account: Account) -> Result<()>;
    async fn all(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
