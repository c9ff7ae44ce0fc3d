//! Save games.
//!
//! - `record`: `SaveRecord`, the fields a save captures from a session
//! - `store`: `SaveStore`, SQLite tables for players, saves and courses
//! - `error`: `StorageError`

pub mod error;
pub mod record;
pub mod store;

pub use error::StorageError;
pub use record::SaveRecord;
pub use store::SaveStore;
