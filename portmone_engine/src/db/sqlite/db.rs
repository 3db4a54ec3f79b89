use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::{new_pool, orders};
use crate::{
    db_types::OrderRecord,
    traits::{OrderStore, OrderStoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, OrderStoreError> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date. This is idempotent and is safe to call on every start-up.
    pub async fn run_migrations(&self) -> Result<(), OrderStoreError> {
        sqlx::migrate!("./src/db/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| OrderStoreError::DatabaseError(e.to_string()))?;
        info!("🗃️ Order store migrations complete");
        Ok(())
    }

    /// Records a new order that Portmone callbacks can be reconciled against.
    pub async fn insert_order(&self, bill_number: &str) -> Result<OrderRecord, OrderStoreError> {
        let mut tx = self.pool.begin().await?;
        if orders::fetch_order_by_bill_number(bill_number, &mut tx).await?.is_some() {
            return Err(OrderStoreError::OrderAlreadyExists(bill_number.to_string()));
        }
        let order = orders::insert_order(bill_number, &mut tx).await?;
        tx.commit().await?;
        debug!("🗃️ Inserted {order}");
        Ok(order)
    }

    pub async fn close(&mut self) -> Result<(), OrderStoreError> {
        self.pool.close().await;
        Ok(())
    }
}

impl OrderStore for SqliteDatabase {
    async fn fetch_order_by_bill_number(&self, bill_number: &str) -> Result<Option<OrderRecord>, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_bill_number(bill_number, &mut conn).await?;
        Ok(order)
    }
}
