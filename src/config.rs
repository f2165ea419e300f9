use std::path::PathBuf;

use crate::domain::ContactStore;
use crate::errors::AppError;
use crate::storage::{self, StorageMediums};
use dotenv::dotenv;

pub const DEFAULT_STORAGE_CHOICE: &str = "file";
pub const DEFAULT_DATA_DIR: &str = "./.instance";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Resolved runtime settings. Values come from command line flags, which
/// fall back to the environment (and `.env`), then to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageMediums,
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_parts(
        storage_choice: &str,
        data_dir: &str,
        log_level: &str,
    ) -> Result<Self, AppError> {
        let storage = StorageMediums::from(storage_choice)?;

        let log_level = log_level.trim();
        if log_level.is_empty() {
            return Err(AppError::Config("log level must not be empty".to_string()));
        }

        Ok(Self {
            storage,
            data_dir: PathBuf::from(data_dir.trim()),
            log_level: log_level.to_string(),
        })
    }

    pub fn open_store(&self) -> Result<ContactStore, AppError> {
        let backend = storage::parse_storage_type(self.storage, &self.data_dir)?;
        Ok(ContactStore::initialize(backend))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageMediums::File,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Loads `.env` into the process environment without overriding variables
/// that are already set.
pub fn load_env() {
    dotenv().ok();
}
