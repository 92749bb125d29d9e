pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{InsertedRecord, NewSystemRecord, SystemRecord};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence contract the HTTP handlers depend on.
///
/// Each call is a single statement; implementations own their own connection
/// handling and must be safe to share across concurrent requests.
#[async_trait]
pub trait SystemStore: Send + Sync {
    /// Insert one record, returning the store-assigned `id` and `received_at`.
    async fn insert(&self, record: &NewSystemRecord) -> Result<InsertedRecord, StoreError>;

    /// All records, most recently received first.
    async fn list_all(&self) -> Result<Vec<SystemRecord>, StoreError>;

    /// Confirm the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
