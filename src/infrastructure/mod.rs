//! Concrete account stores and the factory that picks one.

pub mod factory;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
