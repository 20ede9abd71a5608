//! Public endpoints used by the report, adopt and store pages.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use paws_core::entities::{AdoptionRequest, Animal};
use paws_core::responses::{
    AdoptionSubmission, Classification, ClassifyRequest, ProductListing, ReportAccepted,
    ReportSubmission, UploadResponse,
};
use paws_core::seed;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the uploaded image.
const IMAGE_FIELD: &str = "image";

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn submit_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ReportAccepted>), ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed report body");
        ApiError::bad_request("Failed to submit report")
    })?;

    let report = state.board.lock().await.submit_report(&submission)?;
    Ok((
        StatusCode::CREATED,
        Json(ReportAccepted {
            message: "Report submitted successfully".to_string(),
            id: report.id,
        }),
    ))
}

/// Accept an image and return where it can be fetched.
///
/// No bytes are stored; the URL is a placeholder that embeds the file name.
pub async fn upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!(error = %rejection, "upload is not multipart");
        ApiError::bad_request("No image provided")
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or(IMAGE_FIELD).to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;
        tracing::info!(file_name = %file_name, size = bytes.len(), "received image");

        return Ok(Json(UploadResponse {
            url: placeholder_url(&file_name),
        }));
    }

    Err(ApiError::bad_request("No image provided"))
}

/// Placeholder image URL for an uploaded file.
#[must_use]
pub fn placeholder_url(file_name: &str) -> String {
    format!(
        "/placeholder.svg?height=300&width=300&text={}",
        urlencoding::encode(file_name)
    )
}

pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<Classification>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed classify body");
        ApiError::bad_request("Failed to classify image")
    })?;

    let image_url = request
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::bad_request("No image URL provided"))?;

    Ok(Json(state.classifier.classify(image_url)))
}

pub async fn submit_adoption(
    State(state): State<AppState>,
    payload: Result<Json<AdoptionSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<AdoptionRequest>), ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "malformed adoption body");
        ApiError::bad_request("Failed to submit adoption request")
    })?;

    let request = state
        .board
        .lock()
        .await
        .submit_adoption(submission.animal_id, &submission.requester_name)?;
    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn list_animals(State(state): State<AppState>) -> Json<Vec<Animal>> {
    Json(state.board.lock().await.animals().to_vec())
}

/// Catalog with display prices (`"29.99"`) next to exact cents.
pub async fn list_products() -> Json<Vec<ProductListing>> {
    Json(seed::products().into_iter().map(ProductListing::from).collect())
}

fn multipart_error(error: MultipartError) -> ApiError {
    tracing::warn!(%error, "failed to read upload");
    ApiError::Rejected {
        status: error.status(),
        message: "Failed to upload image".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_url_encodes_file_name() {
        assert_eq!(
            placeholder_url("stray dog&cat.png"),
            "/placeholder.svg?height=300&width=300&text=stray%20dog%26cat.png"
        );
    }
}
