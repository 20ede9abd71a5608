//! Partnership toggle reducer.

use paws_core::entities::{Partnership, Record, position};
use paws_core::errors::CoreError;
use paws_core::notification::Notification;

use crate::Reduced;

/// Flip `active` ⇄ `inactive` for the partnership with `id`.
pub fn toggle(partnerships: &[Partnership], id: u32) -> Result<Reduced<Partnership>, CoreError> {
    let index = position(partnerships, id)
        .ok_or_else(|| CoreError::not_found(Partnership::ENTITY_TYPE, id))?;

    let mut records = partnerships.to_vec();
    records[index].status = records[index].status.toggled();

    Ok(Reduced {
        records,
        index,
        notification: Notification::partnership_updated(id),
    })
}
