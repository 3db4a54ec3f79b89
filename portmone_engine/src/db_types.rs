use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

//--------------------------------------     OrderRecord       -------------------------------------------------------
/// A payment record that the merchant created before redirecting the customer to Portmone.
///
/// The `bill_number` is the merchant's own order number (`shopOrderNumber` in Portmone parlance), and is the business
/// key that callbacks are reconciled against.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub bill_number: String,
    pub created_at: DateTime<Utc>,
}

impl Display for OrderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order #{} [{}]", self.id, self.bill_number)
    }
}
