//! Application layer containing the payment authorization orchestration.
//!
//! This module defines the `PaymentEngine`, the single entry point for making
//! a payment. It runs requests one at a time against whichever account store
//! it was built with.

pub mod engine;
