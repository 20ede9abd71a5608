use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::ReportStatus;

/// An animal sighting reported by the public and triaged by admins.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub id: u32,
    pub species: String,
    pub condition: String,
    pub location: String,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<DateTime<Utc>>,
}

impl Record for Report {
    const ENTITY_TYPE: &'static str = "report";

    fn id(&self) -> u32 {
        self.id
    }
}
