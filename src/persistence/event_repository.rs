//! Event repository: list, create, lookup, and delete over `events`.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnection;

use crate::domain::{Event, EventId, NewEvent};
use crate::error::BoardError;

/// Data access for the `events` table.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns every event ordered by the `datetime` text, ties broken by
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn list_all(&self) -> Result<Vec<Event>, BoardError> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, datetime FROM events ORDER BY datetime ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Persists a new event under a freshly generated id.
    ///
    /// Nothing is written unless `title` and `datetime` are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] for empty required fields, or
    /// [`BoardError::StorageUnavailable`] on database failure.
    pub async fn create(&self, new_event: &NewEvent) -> Result<EventId, BoardError> {
        new_event.validate()?;

        let id = EventId::generate();
        sqlx::query("INSERT INTO events (id, title, description, datetime) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&new_event.title)
            .bind(&new_event.description)
            .bind(&new_event.datetime)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    /// Looks up a single event. A miss is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn get_by_id(&self, id: &EventId) -> Result<Option<Event>, BoardError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, description, datetime FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Deletes the event row on `conn`, typically a transaction that has
    /// already removed the event's responses. Returns the rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn delete(&self, conn: &mut SqliteConnection, id: &EventId) -> Result<u64, BoardError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
