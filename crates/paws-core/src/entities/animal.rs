use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;

/// An animal listed for adoption.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Animal {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age_years: u8,
    pub description: String,
    pub image_ref: String,
}

impl Record for Animal {
    const ENTITY_TYPE: &'static str = "animal";

    fn id(&self) -> u32 {
        self.id
    }
}
