use super::account::AllowedPaymentSchemes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scheme a single payment is made through.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    FasterPayments,
    Bacs,
    Chaps,
}

impl PaymentScheme {
    /// The flag an account must carry to allow this scheme.
    pub fn flag(self) -> AllowedPaymentSchemes {
        match self {
            PaymentScheme::FasterPayments => AllowedPaymentSchemes::FASTER_PAYMENTS,
            PaymentScheme::Bacs => AllowedPaymentSchemes::BACS,
            PaymentScheme::Chaps => AllowedPaymentSchemes::CHAPS,
        }
    }
}

/// A request to debit `amount` from the debtor's account.
///
/// The creditor is informational only; nothing is credited. The amount is
/// taken as given: its sign is not checked here.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MakePaymentRequest {
    #[serde(rename = "debtor")]
    pub debtor_account_number: String,
    #[serde(rename = "creditor", default)]
    pub creditor_account_number: Option<String>,
    pub amount: Decimal,
    #[serde(rename = "scheme")]
    pub payment_scheme: PaymentScheme,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    AccountNotFound,
    AccountDisabled,
    InsufficientBalance,
    PaymentSchemeNotAllowed,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectionReason::AccountNotFound => "account not found",
            RejectionReason::AccountDisabled => "account disabled",
            RejectionReason::InsufficientBalance => "insufficient balance",
            RejectionReason::PaymentSchemeNotAllowed => "payment scheme not allowed",
        };
        f.write_str(reason)
    }
}

/// Outcome of a single [`make_payment`](crate::application::engine::PaymentEngine::make_payment) call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentResult {
    Approved,
    Rejected(RejectionReason),
}

impl PaymentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentResult::Approved)
    }

    pub fn rejection_reason(&self) -> Option<RejectionReason> {
        match self {
            PaymentResult::Approved => None,
            PaymentResult::Rejected(reason) => Some(*reason),
        }
    }
}
