use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;

/// An organization in the public partner directory.
///
/// Separate from [`super::Partnership`], which is the admin-side status row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Partner {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image_ref: String,
}

impl Record for Partner {
    const ENTITY_TYPE: &'static str = "partner";

    fn id(&self) -> u32 {
        self.id
    }
}
