use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::PartnershipStatus;

/// A partner organization the foundation works with.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Partnership {
    pub id: u32,
    pub name: String,
    pub status: PartnershipStatus,
}

impl Record for Partnership {
    const ENTITY_TYPE: &'static str = "partnership";

    fn id(&self) -> u32 {
        self.id
    }
}
