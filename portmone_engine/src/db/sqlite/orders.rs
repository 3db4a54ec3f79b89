use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::OrderRecord;

/// Returns the order with the given bill number, if any.
pub async fn fetch_order_by_bill_number(
    bill_number: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<OrderRecord>, sqlx::Error> {
    trace!("🗃️ Fetching order with bill number {bill_number}");
    let order = sqlx::query_as("SELECT id, bill_number, created_at FROM portmone_payments WHERE bill_number = $1")
        .bind(bill_number)
        .fetch_optional(conn)
        .await?;
    Ok(order)
}

/// Inserts a new order using the given connection. This is not atomic. You can embed this call inside a transaction
/// if you need to ensure atomicity, and pass `&mut *tx` as the connection argument.
pub async fn insert_order(bill_number: &str, conn: &mut SqliteConnection) -> Result<OrderRecord, sqlx::Error> {
    let order = sqlx::query_as(
        "INSERT INTO portmone_payments (bill_number) VALUES ($1) RETURNING id, bill_number, created_at",
    )
    .bind(bill_number)
    .fetch_one(conn)
    .await?;
    Ok(order)
}
