use mockall::mock;
use portmone_engine::{db_types::OrderRecord, OrderStore, OrderStoreError};

mock! {
    pub OrderLookup {}
    impl OrderStore for OrderLookup {
        async fn fetch_order_by_bill_number(&self, bill_number: &str) -> Result<Option<OrderRecord>, OrderStoreError>;
    }
}
