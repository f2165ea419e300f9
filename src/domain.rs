pub mod contact;
pub mod manager;
pub mod snapshot;

use crate::errors::AppError;
use crate::storage::KeyValueStorage;
use crate::validation;
use uuid::Uuid;

pub use contact::Contact;
pub use manager::ContactStore;
