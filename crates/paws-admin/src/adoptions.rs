//! Adoption request reducer.
//!
//! ```text
//! pending --approve--> approved
//!         --reject-->  rejected
//! ```

use paws_core::entities::{AdoptionRequest, Animal, Record, next_id, position};
use paws_core::enums::{AdoptionAction, AdoptionStatus};
use paws_core::errors::CoreError;
use paws_core::notification::Notification;

use crate::Reduced;

/// Approve or reject the request with `id`. Only `pending` requests can be
/// decided; approved and rejected are terminal.
pub fn apply(
    requests: &[AdoptionRequest],
    id: u32,
    action: AdoptionAction,
) -> Result<Reduced<AdoptionRequest>, CoreError> {
    let index = position(requests, id)
        .ok_or_else(|| CoreError::not_found(AdoptionRequest::ENTITY_TYPE, id))?;
    let current = requests[index].status;
    let next = action.target_status();

    if !current.can_transition_to(next) {
        return Err(CoreError::invalid_transition(
            AdoptionRequest::ENTITY_TYPE,
            id,
            current,
            next,
        ));
    }

    let mut records = requests.to_vec();
    records[index].status = next;

    Ok(Reduced {
        records,
        index,
        notification: Notification::adoption_updated(id, action),
    })
}

/// Append a new `pending` request for `animal`.
pub fn submit(
    requests: &[AdoptionRequest],
    animal: &Animal,
    requester_name: &str,
) -> Result<Reduced<AdoptionRequest>, CoreError> {
    let requester_name = requester_name.trim();
    if requester_name.is_empty() {
        return Err(CoreError::Validation("Requester name is required.".into()));
    }

    let mut records = requests.to_vec();
    records.push(AdoptionRequest {
        id: next_id(requests)?,
        animal_name: animal.name.clone(),
        requester_name: requester_name.to_string(),
        status: AdoptionStatus::Pending,
    });

    Ok(Reduced {
        index: records.len() - 1,
        records,
        notification: Notification::adoption_submitted(&animal.name),
    })
}
