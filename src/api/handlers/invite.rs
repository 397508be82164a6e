//! Invite handlers: the collaborator-facing availability form.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};

use crate::api::dto::{InviteForm, InviteFormPage, InviteSuccessPage};
use crate::app_state::AppState;
use crate::domain::{EventId, NewAvailability};
use crate::error::BoardError;

/// `GET /invite/{event_id}` — Availability entry form.
///
/// # Errors
///
/// Returns [`BoardError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/invite/{event_id}",
    tag = "Invite",
    summary = "Availability form",
    params(
        ("event_id" = String, Path, description = "Event id"),
    ),
    responses(
        (status = 200, description = "Form for the event", body = InviteFormPage),
        (status = 404, description = "Event not found", body = String, content_type = "text/plain"),
    )
)]
pub async fn invite_form(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<InviteFormPage>, BoardError> {
    let event = state.service.find_event(&EventId::from(event_id)).await?;
    Ok(Json(InviteFormPage { event }))
}

/// `POST /invite/{event_id}` — Submit availability.
///
/// # Errors
///
/// Returns [`BoardError::EventNotFound`] if the event does not exist; no
/// submission is stored in that case. The event is looked up before the
/// body is parsed, so an unknown event is a 404 even when the form is
/// incomplete.
#[utoipa::path(
    post,
    path = "/invite/{event_id}",
    tag = "Invite",
    summary = "Submit availability",
    description = "Stores the collaborator's window and note exactly as entered.",
    params(
        ("event_id" = String, Path, description = "Event id"),
    ),
    request_body(content = InviteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Availability recorded", body = InviteSuccessPage),
        (status = 404, description = "Event not found", body = String, content_type = "text/plain"),
        (status = 422, description = "Missing name, start or end"),
    )
)]
pub async fn submit_invite(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    form: Result<Form<InviteForm>, FormRejection>,
) -> Result<Response, BoardError> {
    let event_id = EventId::from(event_id);
    state.service.find_event(&event_id).await?;

    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::debug!(%event_id, %rejection, "invite form rejected");
            return Ok(rejection.into_response());
        }
    };

    let submission = NewAvailability::from(form);
    let event = state
        .service
        .submit_availability(&event_id, &submission)
        .await?;

    Ok(Json(InviteSuccessPage {
        message: format!("Thanks {}, your availability has been recorded.", submission.name),
        event,
    })
    .into_response())
}

/// Invite routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/invite/{event_id}", get(invite_form).post(submit_invite))
}
