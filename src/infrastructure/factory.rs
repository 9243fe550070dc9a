use crate::config::{DataStoreType, StoreConfig};
use crate::domain::ports::AccountStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryAccountStore;
use tracing::info;

/// Builds the account store named by `config`.
///
/// This is the one place the store type is branched on.
///
/// `Backup` is only a RocksDB store when the crate is built with the
/// `storage-rocksdb` feature. In the default build it yields a second,
/// independent `InMemoryAccountStore` (and logs a warning), so both
/// settings run against the same in-memory implementation and nothing
/// outlives the process.
pub fn build_account_store(config: &StoreConfig) -> Result<AccountStoreBox> {
    match config.data_store_type {
        DataStoreType::Primary => {
            info!("using primary in-memory account store");
            Ok(Box::new(InMemoryAccountStore::new()))
        }
        DataStoreType::Backup => build_backup_store(config),
    }
}

#[cfg(feature = "storage-rocksdb")]
fn build_backup_store(config: &StoreConfig) -> Result<AccountStoreBox> {
    use crate::error::PaymentError;
    use crate::infrastructure::rocksdb::RocksDBStore;

    let path = config.db_path.as_ref().ok_or_else(|| {
        PaymentError::ConfigError("the backup store requires a database path".to_string())
    })?;
    info!(path = %path.display(), "using backup RocksDB account store");
    Ok(Box::new(RocksDBStore::open(path)?))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn build_backup_store(_config: &StoreConfig) -> Result<AccountStoreBox> {
    tracing::warn!(
        "backup store requested, but 'storage-rocksdb' feature is not enabled; falling back to in-memory storage"
    );
    Ok(Box::new(InMemoryAccountStore::new()))
}
