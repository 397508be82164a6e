//! Response repository: availability submissions scoped by event.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnection;

use crate::domain::{Availability, EventId, NewAvailability};
use crate::error::BoardError;

/// Data access for the `responses` table.
#[derive(Debug, Clone)]
pub struct ResponseRepository {
    pool: SqlitePool,
}

impl ResponseRepository {
    /// Creates a repository over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the event's submissions in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Availability>, BoardError> {
        let rows = sqlx::query_as::<_, Availability>(
            "SELECT id, event_id, name, available_start, available_end, description \
             FROM responses WHERE event_id = ? ORDER BY id ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Inserts a submission and returns its row id.
    ///
    /// Contents are stored verbatim and the event is not looked up; the
    /// caller checks that the event exists first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn create(
        &self,
        event_id: &EventId,
        submission: &NewAvailability,
    ) -> Result<i64, BoardError> {
        let result = sqlx::query(
            "INSERT INTO responses (event_id, name, available_start, available_end, description) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(event_id)
        .bind(&submission.name)
        .bind(&submission.start)
        .bind(&submission.end)
        .bind(&submission.description)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes every submission of the event on `conn`. Returns the rows
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StorageUnavailable`] on database failure.
    pub async fn delete_for_event(
        &self,
        conn: &mut SqliteConnection,
        event_id: &EventId,
    ) -> Result<u64, BoardError> {
        let result = sqlx::query("DELETE FROM responses WHERE event_id = ?")
            .bind(event_id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected())
    }
}
