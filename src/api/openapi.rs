//! OpenAPI document covering every route.

use utoipa::OpenApi;

use crate::api::dto::{
    CalendarPage, CreateEventForm, CreateEventPage, CreateSuccessPage, EventDetailPage,
    EventListPage, InviteForm, InviteFormPage, InviteSuccessPage,
};
use crate::api::handlers::{events, invite, system};
use crate::domain::{Availability, CalendarDay, Event, EventId};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "availability-board",
        description = "Create an event, share the invite link, and collect collaborators' availability."
    ),
    paths(
        events::list_events,
        events::create_form,
        events::create_event,
        events::event_detail,
        events::calendar,
        events::delete_event,
        invite::invite_form,
        invite::submit_invite,
        system::health_handler,
    ),
    components(schemas(
        Event,
        EventId,
        Availability,
        CalendarDay,
        EventListPage,
        CreateEventForm,
        CreateEventPage,
        CreateSuccessPage,
        EventDetailPage,
        InviteForm,
        InviteFormPage,
        InviteSuccessPage,
        CalendarPage,
        ErrorResponse,
        ErrorBody,
        system::HealthResponse,
    )),
    tags(
        (name = "Events", description = "Organizer pages"),
        (name = "Invite", description = "Collaborator availability form"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;
