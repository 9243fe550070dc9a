use crate::domain::payment::{MakePaymentRequest, PaymentResult, PaymentScheme, RejectionReason};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ResultRecord<'a> {
    debtor: &'a str,
    amount: Decimal,
    scheme: PaymentScheme,
    success: bool,
    reason: Option<RejectionReason>,
}

/// Writes one CSV row per processed payment request.
///
/// Columns: `debtor,amount,scheme,success,reason`; `reason` is empty for
/// approved payments.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, request: &MakePaymentRequest, result: PaymentResult) -> Result<()> {
        self.writer.serialize(ResultRecord {
            debtor: &request.debtor_account_number,
            amount: request.amount,
            scheme: request.payment_scheme,
            success: result.is_success(),
            reason: result.rejection_reason(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
