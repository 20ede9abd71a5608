//! Partner directory contact flow.
//!
//! Contacting a partner changes no list; the only effect is the confirmation
//! notification.

use paws_core::entities::{Partner, Record};
use paws_core::errors::CoreError;
use paws_core::notification::Notification;
use paws_core::responses::ContactForm;

/// Validate `form` and build the confirmation for the partner with `partner_id`.
///
/// An unknown partner is always `NotFound`. Fields are checked in form order:
/// name, email, message.
pub fn contact(
    partners: &[Partner],
    partner_id: u32,
    form: &ContactForm,
) -> Result<Notification, CoreError> {
    let partner = partners
        .iter()
        .find(|partner| partner.id == partner_id)
        .ok_or_else(|| CoreError::not_found(Partner::ENTITY_TYPE, partner_id))?;

    if form.name.trim().is_empty() {
        return Err(CoreError::Validation("Name is required.".into()));
    }
    if !is_email(form.email.trim()) {
        return Err(CoreError::Validation("Email must be a valid address.".into()));
    }
    if form.message.trim().is_empty() {
        return Err(CoreError::Validation("Message is required.".into()));
    }

    Ok(Notification::message_sent(&partner.name))
}

// Same bar as a browser `type="email"` input: one `@`, a local part, and a
// dotted domain.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty() && !label.contains('@'))
}
