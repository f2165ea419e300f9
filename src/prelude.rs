pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    contact::{self, Contact},
    manager::ContactStore,
    snapshot::{self, STORAGE_KEY},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, FileStorage, KeyValueStorage, MemStorage, StorageMediums};
pub use crate::view::{Presenter, StatusLine, render_contacts};
pub use uuid::{self, Uuid};
