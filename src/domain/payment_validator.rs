use super::account::Account;
use super::payment::PaymentScheme;

/// True iff the account's allowed set contains `scheme`.
pub fn is_payment_allowed(account: &Account, scheme: PaymentScheme) -> bool {
    account.allowed_payment_schemes.contains(scheme.flag())
}
