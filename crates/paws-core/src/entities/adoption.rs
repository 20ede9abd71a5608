use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::AdoptionStatus;

/// A request from a member of the public to adopt a listed animal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdoptionRequest {
    pub id: u32,
    pub animal_name: String,
    pub requester_name: String,
    pub status: AdoptionStatus,
}

impl Record for AdoptionRequest {
    const ENTITY_TYPE: &'static str = "adoption_request";

    fn id(&self) -> u32 {
        self.id
    }
}
