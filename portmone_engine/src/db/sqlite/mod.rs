//! # SQLite order store
//!
//! `SqliteDatabase` is the bundled implementation of the [`OrderStore`](crate::OrderStore) port.
//!
//! Low-level queries live in [`orders`] as simple functions that accept a `&mut SqliteConnection`, so that callers can
//! pass either a pooled connection or a transaction.
mod db;
pub mod orders;

use std::str::FromStr;

pub use db::SqliteDatabase;
use log::info;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

use crate::traits::OrderStoreError;

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, OrderStoreError> {
    info!("Using database URL: {url}");
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect_with(options).await?;
    Ok(pool)
}
