//! Persistence layer: SQLite storage gateway and repositories.
//!
//! [`Storage`] owns the `sqlx::SqlitePool` and the schema. The
//! repositories issue parameterized statements against it and decode rows
//! into the typed records of [`crate::domain`].

pub mod event_repository;
pub mod response_repository;
pub mod storage;

pub use event_repository::EventRepository;
pub use response_repository::ResponseRepository;
pub use storage::{Storage, StorageSettings};

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod testing {
    use super::{Storage, StorageSettings};

    /// In-memory store with the schema already applied.
    pub(crate) async fn schema_ready_storage() -> Storage {
        let Ok(storage) = Storage::connect(&StorageSettings::in_memory()).await else {
            panic!("in-memory storage failed to open");
        };
        if storage.ensure_schema().await.is_err() {
            panic!("schema creation failed");
        }
        storage
    }
}
