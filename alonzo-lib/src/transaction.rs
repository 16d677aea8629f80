use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// A single transaction on an account
///
/// The API does not guarantee a fixed shape for transactions, so only a
/// small core is typed; every other field of the response is kept, decoded
/// but otherwise untouched, in [`extra`](Self::extra).
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// The unique ID of the transaction
    pub id: String,

    /// A human-readable description of the transaction
    pub description: String,

    /// The amount of the transaction, in minor units of
    /// [`currency`](Self::currency) (pence for GBP, cents for USD, ...).
    /// Negative for debits.
    pub amount: i64,

    /// The ISO 4217 code of the transaction currency
    pub currency: String,

    /// When the transaction was created
    pub created: DateTime<Utc>,

    /// Any additional fields returned by the API
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl fmt::Display for Transaction {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}: {} {}",
            self.created.format("%Y-%m-%d %H:%M"),
            self.description,
            self.currency,
            self.amount as f64 / 100.0
        )
    }
}
