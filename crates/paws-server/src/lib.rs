//! # paws-server
//!
//! HTTP boundary for the Paws site.
//!
//! Public endpoints accept animal reports, image uploads and classification
//! requests. Upload and classification are stubs behind narrow seams
//! (`placeholder_url`, [`Classifier`]) so real storage and inference can be
//! slotted in later. Admin endpoints drive the triage state machines on an
//! in-memory [`AdminBoard`](paws_admin::AdminBoard); nothing is persisted.

pub mod classify;
pub mod error;
mod routes;
pub mod state;

pub use classify::{Classifier, RandomClassifier};
pub use error::ApiError;
pub use routes::{placeholder_url, router};
pub use state::AppState;

use paws_config::ServerConfig;

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "paws server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
