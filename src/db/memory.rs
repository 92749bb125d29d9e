use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::db::SystemStore;
use crate::error::StoreError;
use crate::models::{InsertedRecord, NewSystemRecord, SystemRecord};

/// In-process store with the same ordering rules as `system_data`.
///
/// Used by the integration tests; `set_available(false)` makes every call
/// fail the way an unreachable database would.
pub struct MemoryStore {
    records: Mutex<Vec<SystemRecord>>,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory store switched off".to_string()))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemStore for MemoryStore {
    async fn insert(&self, record: &NewSystemRecord) -> Result<InsertedRecord, StoreError> {
        self.check_available()?;
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;

        let id = records.last().map(|r| r.id + 1).unwrap_or(1);
        let received_at = Utc::now();
        records.push(SystemRecord {
            id,
            computer_name: record.computer_name.clone(),
            information_description: record.description.clone(),
            information_data: record.information_data.clone(),
            received_at,
        });

        Ok(InsertedRecord { id, received_at })
    }

    async fn list_all(&self) -> Result<Vec<SystemRecord>, StoreError> {
        self.check_available()?;
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?
            .clone();

        records.sort_by(|a, b| {
            b.received_at
                .cmp(&a.received_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
