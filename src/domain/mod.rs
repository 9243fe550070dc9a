//! Domain types, the account store port and the pure payment rules.

pub mod account;
pub mod account_validator;
pub mod payment;
pub mod payment_validator;
pub mod ports;
