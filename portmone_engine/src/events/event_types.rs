use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Emitted once Portmone has reported a successful authorization for an order we know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedAuthorization {
    /// The merchant's order number, as carried in `BILL_NUMBER`
    pub bill_number: String,
    /// The amount Portmone reports as paid, exactly as it appeared on the wire
    pub payed_amount: Decimal,
}

impl VerifiedAuthorization {
    pub fn new<S: Into<String>>(bill_number: S, payed_amount: Decimal) -> Self {
        Self { bill_number: bill_number.into(), payed_amount }
    }
}

/// A subscriber could not process an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Event subscriber failed. {0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new<S: Into<String>>(reason: S) -> Self {
        Self(reason.into())
    }
}
