//! Store configuration.

use serde::{Deserialize, Serialize};

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Symbol prefixed to formatted totals.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}
