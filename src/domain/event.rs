//! Event records and creation input.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EventId;
use crate::error::BoardError;

/// Message shown when a create-event submission lacks required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and date/time are required.";

/// A stored row from the `events` table.
///
/// Decoded by column name. `datetime` is caller-supplied text and is
/// never parsed; ordering and grouping work on the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Event {
    /// Event identifier (UUID v4 text).
    pub id: EventId,
    /// Required, non-empty title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Text-encoded date/time as submitted by the organizer.
    pub datetime: String,
}

impl Event {
    /// Returns the calendar day portion of `datetime`: everything before
    /// the first `T` or space, or the whole string if neither is present.
    #[must_use]
    pub fn day(&self) -> &str {
        self.datetime
            .split(['T', ' '])
            .next()
            .unwrap_or(self.datetime.as_str())
    }
}

/// Input for creating an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Event date/time text.
    pub datetime: String,
}

impl NewEvent {
    /// Checks that `title` and `datetime` are both non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when either field is empty.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.title.is_empty() || self.datetime.is_empty() {
            return Err(BoardError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}
