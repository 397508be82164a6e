//! Availability submissions (rows of the `responses` table).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EventId;

/// One collaborator's availability window and note for an event.
///
/// Start and end are stored exactly as submitted; nothing guarantees
/// `available_start <= available_end`. The text columns are nullable in the
/// schema, so rows written by other clients may leave any of them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Availability {
    /// Store-assigned row id. Ascending ids are submission order.
    pub id: i64,
    /// Event this submission belongs to.
    pub event_id: EventId,
    /// Display name of the collaborator.
    pub name: Option<String>,
    /// Start of the available window.
    pub available_start: Option<String>,
    /// End of the available window.
    pub available_end: Option<String>,
    /// Free-text note.
    pub description: Option<String>,
}

/// Input for recording an availability submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAvailability {
    /// Display name of the collaborator.
    pub name: String,
    /// Start of the available window.
    pub start: String,
    /// End of the available window.
    pub end: String,
    /// Free-text note.
    pub description: String,
}
