use chrono::{DateTime, Utc};
use serde::Serialize;

/// One stored row of `system_data`.
///
/// `information_data` is opaque to the service: it is whatever JSON object the
/// client submitted, stored and handed back without interpretation.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SystemRecord {
    pub id: i64,
    pub computer_name: String,
    pub information_description: String,
    pub information_data: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

/// A validated submission, ready to insert.
#[derive(Debug, Clone)]
pub struct NewSystemRecord {
    pub computer_name: String,
    pub description: String,
    pub information_data: serde_json::Value,
}

/// Store-assigned fields of a freshly inserted row.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct InsertedRecord {
    pub id: i64,
    pub received_at: DateTime<Utc>,
}
