use std::sync::Arc;

use paws_admin::AdminBoard;
use paws_config::PawsConfig;
use paws_core::notification::{NotificationSink, TracingSink};
use tokio::sync::Mutex;

use crate::classify::{Classifier, RandomClassifier};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Mutex<AdminBoard>>,
    pub classifier: Arc<dyn Classifier>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(board: AdminBoard, classifier: Arc<dyn Classifier>, max_upload_bytes: usize) -> Self {
        Self {
            board: Arc::new(Mutex::new(board)),
            classifier,
            max_upload_bytes,
        }
    }

    /// Seeded board capped at `server.max_records`, tracing notifications and
    /// the random stub classifier.
    pub fn from_config(config: &PawsConfig) -> Self {
        let sink: Arc<dyn NotificationSink> = Arc::new(TracingSink);
        Self::new(
            AdminBoard::seeded(config.admin.unknown_id, sink)
                .with_record_limit(config.server.max_records),
            Arc::new(RandomClassifier::from_os_rng()),
            config.server.max_upload_bytes,
        )
    }
}
