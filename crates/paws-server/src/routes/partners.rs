//! Partner directory and contact form.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use paws_core::entities::Partner;
use paws_core::notification::Notification;
use paws_core::responses::ContactForm;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_partners(State(state): State<AppState>) -> Json<Vec<Partner>> {
    Json(state.board.lock().await.partners().to_vec())
}

/// Answers `200` with the confirmation toast; nothing is stored.
pub async fn contact(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<Notification>, ApiError> {
    let Path(id) = path?;
    let Json(form) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed contact body");
        ApiError::bad_request("Failed to send message")
    })?;

    let notification = state.board.lock().await.contact_partner(id, &form)?;
    Ok(Json(notification))
}
