//! Admin triage endpoints.
//!
//! A mutation that changes state answers `200` with the notification and the
//! updated record. An unknown id under the `ignore` policy answers `204`.
//! Unparseable ids or actions answer `400` with the usual error body.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use paws_admin::Outcome;
use paws_core::entities::{AdoptionRequest, Partnership, Report};
use paws_core::enums::{AdoptionAction, ReportAction};
use paws_core::responses::ActionResponse;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_reports(State(state): State<AppState>) -> Json<Vec<Report>> {
    Json(state.board.lock().await.reports().to_vec())
}

pub async fn list_adoptions(State(state): State<AppState>) -> Json<Vec<AdoptionRequest>> {
    Json(state.board.lock().await.adoptions().to_vec())
}

pub async fn list_partnerships(State(state): State<AppState>) -> Json<Vec<Partnership>> {
    Json(state.board.lock().await.partnerships().to_vec())
}

pub async fn report_action(
    State(state): State<AppState>,
    path: Result<Path<(u32, ReportAction)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((id, action)) = path?;
    let outcome = state.board.lock().await.apply_report(id, action)?;
    Ok(respond(outcome))
}

pub async fn adoption_action(
    State(state): State<AppState>,
    path: Result<Path<(u32, AdoptionAction)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((id, action)) = path?;
    let outcome = state.board.lock().await.apply_adoption(id, action)?;
    Ok(respond(outcome))
}

pub async fn toggle_partnership(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = path?;
    let outcome = state.board.lock().await.toggle_partnership(id)?;
    Ok(respond(outcome))
}

fn respond<T: Serialize>(outcome: Outcome<T>) -> Response {
    match outcome {
        Outcome::Applied {
            record,
            notification,
        } => Json(ActionResponse {
            notification,
            record,
        })
        .into_response(),
        Outcome::Ignored => StatusCode::NO_CONTENT.into_response(),
    }
}
