//! Type-safe event identifier.
//!
//! [`EventId`] is a newtype around the textual id stored in
//! `events.id`. Fresh ids are UUID v4 strings, but ids arriving from
//! request paths are arbitrary text: an id that was never generated
//! simply fails to match a row.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an event.
///
/// Generated once at creation time and immutable thereafter. Used as the
/// primary key of `events`, the foreign key of `responses`, and the path
/// segment of every shareable link.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random `EventId` (UUID v4 string).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for EventId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}
