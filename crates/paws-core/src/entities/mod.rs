//! Entity structs for all Paws domain objects.
//!
//! Every list the admin panel or store owns is a `Vec` of records keyed by a
//! numeric id. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON output and schema validation.

mod adoption;
mod animal;
mod partner;
mod partnership;
mod product;
mod report;

pub use adoption::AdoptionRequest;
pub use animal::Animal;
pub use partner::Partner;
pub use partnership::Partnership;
pub use product::Product;
pub use report::Report;

use crate::errors::CoreError;

/// A record addressable by a stable numeric id.
pub trait Record {
    /// Entity name used in error messages (`"report"`, `"adoption_request"`, ...).
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> u32;
}

/// Next free id for a list: one past the current maximum, or 1 when empty.
///
/// Fails once the maximum id is `u32::MAX` so an existing id is never reused.
pub fn next_id<T: Record>(records: &[T]) -> Result<u32, CoreError> {
    records
        .iter()
        .map(Record::id)
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
        .ok_or_else(|| CoreError::capacity_exceeded(T::ENTITY_TYPE, u32::MAX))
}

/// Position of the record with `id`, if any.
#[must_use]
pub fn position<T: Record>(records: &[T], id: u32) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}
