use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::SystemStore;
use crate::error::StoreError;
use crate::models::{InsertedRecord, NewSystemRecord, SystemRecord};

/// `system_data` is owned outside this service, so `id` and `received_at` are
/// cast on the way out to tolerate `SERIAL` / `TIMESTAMP` columns.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SystemStore for PgStore {
    async fn insert(&self, record: &NewSystemRecord) -> Result<InsertedRecord, StoreError> {
        let inserted = sqlx::query_as::<_, InsertedRecord>(
            "INSERT INTO system_data (computer_name, information_description, information_data)
             VALUES ($1, $2, $3)
             RETURNING id::BIGINT AS id, received_at::TIMESTAMPTZ AS received_at",
        )
        .bind(&record.computer_name)
        .bind(&record.description)
        .bind(&record.information_data)
        .fetch_one(&self.pool)
        .await?;
        Ok(inserted)
    }

    async fn list_all(&self) -> Result<Vec<SystemRecord>, StoreError> {
        let records = sqlx::query_as::<_, SystemRecord>(
            "SELECT id::BIGINT AS id, computer_name, information_description, information_data,
                    received_at::TIMESTAMPTZ AS received_at
             FROM system_data
             ORDER BY received_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        // Acquire and immediately return one pooled connection.
        let conn = self.pool.acquire().await?;
        drop(conn);
        Ok(())
    }
}
