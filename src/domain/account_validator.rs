//! Pure checks on the debtor account itself.

use super::account::{Account, AccountStatus};
use rust_decimal::Decimal;

/// An account is valid when it exists and is `Live`.
pub fn is_account_valid(account: Option<&Account>) -> bool {
    account.is_some_and(|account| account.status == AccountStatus::Live)
}

/// True iff `balance` is strictly greater than `amount`.
///
/// Debiting the exact balance is refused. Zero and negative amounts are not
/// special-cased.
pub fn is_enough_balance(balance: Decimal, amount: Decimal) -> bool {
    balance > amount
}
