//! Form bodies accepted by the create and invite endpoints.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{NewAvailability, NewEvent};

/// Body of `POST /create`.
///
/// Missing `title` or `datetime` deserialize as empty strings so the
/// handler can redisplay the form instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateEventForm {
    /// Event title (required).
    #[serde(default)]
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Event date/time text (required).
    #[serde(default)]
    pub datetime: String,
}

impl From<CreateEventForm> for NewEvent {
    fn from(form: CreateEventForm) -> Self {
        Self {
            title: form.title,
            description: form.description,
            datetime: form.datetime,
        }
    }
}

/// Body of `POST /invite/{event_id}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct InviteForm {
    /// Collaborator display name.
    pub name: String,
    /// Start of the available window.
    pub start: String,
    /// End of the available window.
    pub end: String,
    /// Free-text note.
    #[serde(default)]
    pub description: String,
}

impl From<InviteForm> for NewAvailability {
    fn from(form: InviteForm) -> Self {
        Self {
            name: form.name,
            start: form.start,
            end: form.end,
            description: form.description,
        }
    }
}
