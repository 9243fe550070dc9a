//! Store selection settings.

use std::path::PathBuf;

/// The only setting value that selects the backup store.
pub const BACKUP_STORE_SETTING: &str = "Backup";

/// Which of the two account stores the engine runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataStoreType {
    #[default]
    Primary,
    Backup,
}

impl DataStoreType {
    /// Maps the raw setting onto a store type.
    ///
    /// Matching is exact. Anything other than `"Backup"`, including an empty
    /// value, selects the primary store.
    pub fn from_setting(setting: &str) -> Self {
        if setting == BACKUP_STORE_SETTING {
            DataStoreType::Backup
        } else {
            DataStoreType::Primary
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub data_store_type: DataStoreType,
    /// Database directory for the backup store.
    pub db_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new(data_store_setting: Option<&str>, db_path: Option<PathBuf>) -> Self {
        Self {
            data_store_type: DataStoreType::from_setting(data_store_setting.unwrap_or_default()),
            db_path,
        }
    }
}
