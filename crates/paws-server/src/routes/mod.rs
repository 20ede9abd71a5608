use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod admin;
mod partners;
mod public;

pub use public::placeholder_url;

/// Build the full router.
pub fn router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(public::health))
        .route("/api/report", post(public::submit_report))
        .route("/api/upload", post(public::upload).layer(upload_limit))
        .route("/api/classify", post(public::classify))
        .route("/api/adoptions", post(public::submit_adoption))
        .route("/api/animals", get(public::list_animals))
        .route("/api/products", get(public::list_products))
        .route("/api/partners", get(partners::list_partners))
        .route("/api/partners/{id}/contact", post(partners::contact))
        .route("/api/admin/reports", get(admin::list_reports))
        .route("/api/admin/reports/{id}/{action}", post(admin::report_action))
        .route("/api/admin/adoptions", get(admin::list_adoptions))
        .route(
            "/api/admin/adoptions/{id}/{action}",
            post(admin::adoption_action),
        )
        .route("/api/admin/partnerships", get(admin::list_partnerships))
        .route(
            "/api/admin/partnerships/{id}/toggle",
            post(admin::toggle_partnership),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
