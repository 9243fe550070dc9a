#![allow(dead_code)]

use async_trait::async_trait;
use payauth::domain::account::{Account, AccountStatus, AllowedPaymentSchemes, Balance};
use payauth::domain::payment::{MakePaymentRequest, PaymentScheme};
use payauth::domain::ports::AccountStore;
use payauth::error::{PaymentError, Result};
use payauth::infrastructure::in_memory::InMemoryAccountStore;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// Wraps an in-memory store and counts calls, so tests can assert on `put`.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: InMemoryAccountStore,
    gets: Arc<AtomicUsize>,
    puts: Arc<AtomicUsize>,
}

impl RecordingStore {
    pub async fn with_account(account: Account) -> Self {
        let store = Self::default();
        store.inner.put(account).await.unwrap();
        store
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, account_number: &str) -> Option<Account> {
        self.inner.get(account_number).await.unwrap()
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(account_number).await
    }

    async fn put(&self, account: Account) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(account).await
    }

    async fn all(&self) -> Result<Vec<Account>> {
        self.inner.all().await
    }
}

/// Wraps an in-memory store whose `get` or `put` can be made to fail.
#[derive(Clone, Default)]
pub struct FailingStore {
    inner: InMemoryAccountStore,
    fail_get: bool,
    fail_put: bool,
}

impl FailingStore {
    pub async fn with_account(account: Account) -> Self {
        let store = Self::default();
        store.inner.put(account).await.unwrap();
        store
    }

    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn failing_put(mut self) -> Self {
        self.fail_put = true;
        self
    }

    pub async fn stored(&self, account_number: &str) -> Option<Account> {
        self.inner.get(account_number).await.unwrap()
    }
}

fn unavailable() -> PaymentError {
    PaymentError::InternalError(Box::new(std::io::Error::other("store unavailable")))
}

#[async_trait]
impl AccountStore for FailingStore {
    async fn get(&self, account_number: &str) -> Result<Option<Account>> {
        if self.fail_get {
            return Err(unavailable());
        }
        self.inner.get(account_number).await
    }

    async fn put(&self, account: Account) -> Result<()> {
        if self.fail_put {
            return Err(unavailable());
        }
        self.inner.put(account).await
    }

    async fn all(&self) -> Result<Vec<Account>> {
        self.inner.all().await
    }
}

pub fn account(number: &str, status: AccountStatus, balance: Decimal, schemes: AllowedPaymentSchemes) -> Account {
    let mut account = Account::new(number);
    account.status = status;
    account.balance = Balance::new(balance);
    account.allowed_payment_schemes = schemes;
    account
}

pub fn request(debtor: &str, amount: Decimal, scheme: PaymentScheme) -> MakePaymentRequest {
    MakePaymentRequest {
        debtor_account_number: debtor.to_string(),
        creditor_account_number: Some("CREDITOR".to_string()),
        amount,
        payment_scheme: scheme,
    }
}

pub fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}
