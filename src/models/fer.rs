//! The FER entry payload.

use serde::{Deserialize, Serialize};

use crate::constants::PRICE_DIVIDEND;

/// Exchange rate record published as the entry content.
///
/// Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FerEntry {
    pub expiration_height: u32,
    pub target_activation_height: u32,
    pub priority: u32,
    /// Factoshis per entry credit.
    pub target_price: u64,
    pub version: String,
}

impl FerEntry {
    /// Compact JSON bytes; these are what gets signed.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Implied factoid price in dollars, `None` for a zero target price.
    pub fn implied_price(&self) -> Option<f64> {
        (self.target_price != 0).then(|| PRICE_DIVIDEND / self.target_price as f64)
    }
}
