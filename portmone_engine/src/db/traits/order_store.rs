use thiserror::Error;

use crate::db_types::OrderRecord;

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Order {0} already exists")]
    OrderAlreadyExists(String),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        OrderStoreError::DatabaseError(e.to_string())
    }
}

/// The `OrderStore` trait is the read side of the merchant's payment records, as seen by the callback verifier.
///
/// The verifier only ever asks whether an order with a given bill number exists. What happens to the order once a
/// payment has been verified is the business of the event subscribers.
#[allow(async_fn_in_trait)]
pub trait OrderStore {
    /// Fetches the order with the given bill number. If no such order exists, `None` is returned.
    async fn fetch_order_by_bill_number(&self, bill_number: &str) -> Result<Option<OrderRecord>, OrderStoreError>;
}
