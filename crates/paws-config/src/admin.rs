//! Admin board configuration.

use paws_core::enums::UnknownIdPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    /// What to do when an action names an id that matches nothing:
    /// `ignore` (no-op) or `reject` (not-found error).
    #[serde(default)]
    pub unknown_id: UnknownIdPolicy,
}
