use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use chrono::Utc;

use crate::{
    db_types::OrderRecord,
    traits::{OrderStore, OrderStoreError},
};

/// An in-memory [`OrderStore`] that counts how often it is consulted.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<HashMap<String, OrderRecord>>,
    lookups: Arc<AtomicUsize>,
    failing: bool,
}

impl MemoryOrderStore {
    pub fn with_orders(bill_numbers: &[&str]) -> Self {
        let orders = bill_numbers
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let order = OrderRecord { id: i as i64 + 1, bill_number: b.to_string(), created_at: Utc::now() };
                (b.to_string(), order)
            })
            .collect();
        Self { orders: Arc::new(orders), ..Default::default() }
    }

    /// A store whose every lookup fails with a database error.
    pub fn failing() -> Self {
        Self { failing: true, ..Default::default() }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl OrderStore for MemoryOrderStore {
    async fn fetch_order_by_bill_number(&self, bill_number: &str) -> Result<Option<OrderRecord>, OrderStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(OrderStoreError::DatabaseError("the order store is unavailable".into()));
        }
        Ok(self.orders.get(bill_number).cloned())
    }
}
