use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::money::Cents;

/// A store item.
///
/// `price` is integer cents and serializes as a bare number (`2999` for
/// $29.99). Clients that want a display string use
/// [`crate::responses::ProductListing`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub image_ref: String,
}

impl Record for Product {
    const ENTITY_TYPE: &'static str = "product";

    fn id(&self) -> u32 {
        self.id
    }
}
