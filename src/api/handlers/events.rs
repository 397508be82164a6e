//! Event handlers: list, create, detail, calendar, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use crate::api::dto::{
    CalendarPage, CreateEventForm, CreateEventPage, CreateSuccessPage, EventDetailPage,
    EventListPage, ListQuery, event_url, invite_url,
};
use crate::app_state::AppState;
use crate::domain::{EventId, NewEvent};
use crate::error::{BoardError, ErrorResponse};

/// `GET /` — List all events.
///
/// # Errors
///
/// Returns [`BoardError::StorageUnavailable`] on database failure.
#[utoipa::path(
    get,
    path = "/",
    tag = "Events",
    summary = "List events",
    description = "Returns every event ordered by its date/time text, plus any notice carried over from a redirect.",
    params(ListQuery),
    responses(
        (status = 200, description = "Event list", body = EventListPage),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<EventListPage>, BoardError> {
    let events = state.service.list_events().await?;
    Ok(Json(EventListPage {
        notice: query.notice,
        events,
    }))
}

/// `GET /create` — Blank creation form.
#[utoipa::path(
    get,
    path = "/create",
    tag = "Events",
    summary = "Event creation form",
    responses(
        (status = 200, description = "Blank form", body = CreateEventPage),
    )
)]
pub async fn create_form() -> Json<CreateEventPage> {
    Json(CreateEventPage::default())
}

/// `POST /create` — Create an event.
///
/// Empty `title` or `datetime` redisplays the form with a message and
/// writes nothing.
///
/// # Errors
///
/// Returns [`BoardError::StorageUnavailable`] on database failure.
#[utoipa::path(
    post,
    path = "/create",
    tag = "Events",
    summary = "Create an event",
    description = "Creates an event and returns the links to share with collaborators.",
    request_body(content = CreateEventForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Event created", body = CreateSuccessPage),
        (status = 422, description = "Missing title or date/time; form redisplayed", body = CreateEventPage),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    Form(form): Form<CreateEventForm>,
) -> Result<Response, BoardError> {
    let new_event = NewEvent::from(form);

    match state.service.create_event(&new_event).await {
        Ok(event_id) => {
            let page = CreateSuccessPage {
                event_url: event_url(state.base_url(), &event_id),
                invite_url: invite_url(state.base_url(), &event_id),
                event_id,
            };
            Ok((StatusCode::CREATED, Json(page)).into_response())
        }
        Err(BoardError::Validation(message)) => {
            tracing::debug!(%message, "create form redisplayed");
            let page = CreateEventPage::redisplay(message, new_event);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(page)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// `GET /event/{event_id}` — Event detail with all submissions.
///
/// # Errors
///
/// Returns [`BoardError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/event/{event_id}",
    tag = "Events",
    summary = "Event detail",
    description = "Returns the event and every availability submitted for it, in submission order.",
    params(
        ("event_id" = String, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Event detail", body = EventDetailPage),
        (status = 404, description = "Event not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn event_detail(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<EventDetailPage>, BoardError> {
    let event_id = EventId::from(event_id);
    let detail = state.service.event_detail(&event_id).await?;

    Ok(Json(EventDetailPage {
        invite_url: invite_url(state.base_url(), &event_id),
        event: detail.event,
        responses: detail.responses,
    }))
}

/// `GET /calendar` — All events grouped by day.
///
/// # Errors
///
/// Returns [`BoardError::StorageUnavailable`] on database failure.
#[utoipa::path(
    get,
    path = "/calendar",
    tag = "Events",
    summary = "Calendar view",
    description = "Returns every event grouped by the day portion of its date/time text.",
    responses(
        (status = 200, description = "Calendar", body = CalendarPage),
        (status = 500, description = "Storage unavailable", body = ErrorResponse),
    )
)]
pub async fn calendar(State(state): State<AppState>) -> Result<Json<CalendarPage>, BoardError> {
    let days = state.service.calendar().await?;
    Ok(Json(CalendarPage { days }))
}

/// `POST /delete/{event_id}` — Delete an event and all its submissions.
///
/// # Errors
///
/// Returns [`BoardError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    post,
    path = "/delete/{event_id}",
    tag = "Events",
    summary = "Delete an event",
    description = "Deletes the event and its submissions in one transaction, then redirects to the list with a notice.",
    params(
        ("event_id" = String, Path, description = "Event id"),
    ),
    responses(
        (status = 303, description = "Deleted; redirect to the event list"),
        (status = 404, description = "Event not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Redirect, BoardError> {
    let event = state.service.delete_event(&EventId::from(event_id)).await?;
    let notice = format!("Event \"{}\" has been deleted.", event.title);
    Ok(Redirect::to(&format!(
        "/?notice={}",
        urlencoding::encode(&notice)
    )))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/create", get(create_form).post(create_event))
        .route("/event/{event_id}", get(event_detail))
        .route("/calendar", get(calendar))
        .route("/delete/{event_id}", post(delete_event))
}
