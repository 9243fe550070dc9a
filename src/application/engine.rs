use crate::domain::account::Account;
use crate::domain::account_validator::{is_account_valid, is_enough_balance};
use crate::domain::payment::{MakePaymentRequest, PaymentResult, RejectionReason};
use crate::domain::payment_validator::is_payment_allowed;
use crate::domain::ports::AccountStoreBox;
use crate::error::Result;
use tracing::{debug, info};

/// Authorizes and applies single-debit payments.
///
/// `PaymentEngine` owns one account store, chosen once at startup. Each call to
/// [`make_payment`](Self::make_payment) reads the debtor account, runs the
/// rules in a fixed order and, only if all pass, debits and writes it back.
///
/// Calls are not isolated from each other: two concurrent payments against the
/// same account both read the same balance and the later `put` wins.
pub struct PaymentEngine {
    account_store: AccountStoreBox,
}

impl PaymentEngine {
    pub fn new(account_store: AccountStoreBox) -> Self {
        Self { account_store }
    }

    /// Runs one payment request to completion.
    ///
    /// Business rule failures come back as `Ok(PaymentResult::Rejected(_))`.
    /// `Err` is reserved for store failures; a failed `put` after approval is
    /// returned as is, with nothing rolled back.
    pub async fn make_payment(&self, request: &MakePaymentRequest) -> Result<PaymentResult> {
        let account = self
            .account_store
            .get(&request.debtor_account_number)
            .await?;
        debug!(
            debtor = %request.debtor_account_number,
            found = account.is_some(),
            "looked up debtor account"
        );

        let Some(mut account) = account else {
            return Ok(reject(request, RejectionReason::AccountNotFound));
        };
        if !is_account_valid(Some(&account)) {
            return Ok(reject(request, RejectionReason::AccountDisabled));
        }
        if !is_enough_balance(account.balance.value(), request.amount) {
            return Ok(reject(request, RejectionReason::InsufficientBalance));
        }
        if !is_payment_allowed(&account, request.payment_scheme) {
            return Ok(reject(request, RejectionReason::PaymentSchemeNotAllowed));
        }

        account.debit(request.amount);
        let balance = account.balance;
        self.account_store.put(account).await?;
        info!(
            debtor = %request.debtor_account_number,
            creditor = request.creditor_account_number.as_deref().unwrap_or("-"),
            amount = %request.amount,
            %balance,
            "payment approved"
        );
        Ok(PaymentResult::Approved)
    }

    /// Returns every account currently held by the store.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.account_store.all().await
    }
}

fn reject(request: &MakePaymentRequest, reason: RejectionReason) -> PaymentResult {
    info!(
        debtor = %request.debtor_account_number,
        amount = %request.amount,
        %reason,
        "payment rejected"
    );
    PaymentResult::Rejected(reason)
}
