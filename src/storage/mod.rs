pub mod file;
pub mod memory;

use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use file::FileStorage;
pub use memory::MemStorage;

/// Synchronous key-value slot store holding text values.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    File,
}

impl StorageMediums {
    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_mem() { "mem" } else { "file" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "mem" => Ok(StorageMediums::Mem),
            "file" => Ok(StorageMediums::File),
            other => Err(AppError::Config(format!(
                "'{}' is not a recognized storage medium (mem, file)",
                other
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    data_dir: &Path,
) -> Result<Box<dyn KeyValueStorage>, AppError> {
    match medium {
        StorageMediums::Mem => Ok(Box::new(MemStorage::new())),
        StorageMediums::File => Ok(Box::new(FileStorage::new(data_dir)?)),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
