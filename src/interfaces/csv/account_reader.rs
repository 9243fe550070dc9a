use crate::domain::account::Account;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads account records used to seed a store.
///
/// Header: `account_number, status, balance, allowed_payment_schemes`.
/// Schemes use the flag text format (`FASTER_PAYMENTS | CHAPS`); an empty
/// column means no scheme is allowed.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
