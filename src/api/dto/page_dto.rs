//! Page view models returned by the handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Availability, CalendarDay, Event, EventId, NewEvent};

/// Query string of `GET /`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Confirmation notice carried over from a redirect.
    #[serde(default)]
    pub notice: Option<String>,
}

/// `GET /` — every event in `datetime` order.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListPage {
    /// Notice to display above the list, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Events ordered by `datetime`.
    pub events: Vec<Event>,
}

/// The create-event form, blank or redisplayed after a failed submit.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct CreateEventPage {
    /// Validation message, present only on redisplay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Previously entered title.
    pub title: String,
    /// Previously entered description.
    pub description: String,
    /// Previously entered date/time.
    pub datetime: String,
}

impl CreateEventPage {
    /// Redisplays `input` with a validation message.
    #[must_use]
    pub fn redisplay(message: String, input: NewEvent) -> Self {
        Self {
            message: Some(message),
            title: input.title,
            description: input.description.unwrap_or_default(),
            datetime: input.datetime,
        }
    }
}

/// `POST /create` success — the links to share.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateSuccessPage {
    /// Id of the new event.
    pub event_id: EventId,
    /// Organizer's detail page.
    pub event_url: String,
    /// Link to hand to collaborators.
    pub invite_url: String,
}

/// `GET /event/{event_id}` — the event with all submissions.
#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetailPage {
    /// The event.
    pub event: Event,
    /// Submissions in submission order.
    pub responses: Vec<Availability>,
    /// Link to hand to collaborators.
    pub invite_url: String,
}

/// `GET /invite/{event_id}` — the availability entry form.
#[derive(Debug, Serialize, ToSchema)]
pub struct InviteFormPage {
    /// Event being answered.
    pub event: Event,
}

/// `POST /invite/{event_id}` success.
#[derive(Debug, Serialize, ToSchema)]
pub struct InviteSuccessPage {
    /// Event that was answered.
    pub event: Event,
    /// Confirmation text.
    pub message: String,
}

/// `GET /calendar` — events grouped by day.
#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarPage {
    /// Days in `datetime` order.
    pub days: Vec<CalendarDay>,
}

/// Absolute URL of an event's detail page.
#[must_use]
pub fn event_url(base_url: &str, event_id: &EventId) -> String {
    format!("{base_url}/event/{event_id}")
}

/// Absolute URL of an event's invite form.
#[must_use]
pub fn invite_url(base_url: &str, event_id: &EventId) -> String {
    format!("{base_url}/invite/{event_id}")
}
