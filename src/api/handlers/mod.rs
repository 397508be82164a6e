//! HTTP endpoint handlers organized by page.

pub mod events;
pub mod invite;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the event, invite, and system routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(events::routes())
        .merge(invite::routes())
        .merge(system::routes())
}
