use bitflags::bitflags;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Sub, SubAssign};

/// Signed monetary value held by an account.
///
/// Wraps `rust_decimal::Decimal`. There is no floor: a balance only goes
/// negative through an approved debit, and guarding that is the validator's job.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Sub<Decimal> for Balance {
    type Output = Self;
    fn sub(self, rhs: Decimal) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<Decimal> for Balance {
    fn sub_assign(&mut self, rhs: Decimal) {
        self.0 -= rhs;
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Live,
    Disabled,
}

bitflags! {
    /// Set of payment schemes an account may be debited through.
    ///
    /// Serialized with the bitflags text format, e.g. `FASTER_PAYMENTS | CHAPS`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct AllowedPaymentSchemes: u8 {
        const FASTER_PAYMENTS = 1 << 0;
        const BACS = 1 << 1;
        const CHAPS = 1 << 2;
    }
}

/// An account record as held by an [`AccountStore`](super::ports::AccountStore).
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Unique key of the account.
    pub account_number: String,
    pub status: AccountStatus,
    pub balance: Balance,
    pub allowed_payment_schemes: AllowedPaymentSchemes,
}

impl Account {
    /// Creates a live account with a zero balance and no allowed schemes.
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            status: AccountStatus::Live,
            balance: Balance::ZERO,
            allowed_payment_schemes: AllowedPaymentSchemes::empty(),
        }
    }

    /// Takes `amount` off the balance. Performs no checks; a negative
    /// amount raises the balance.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }
}
