use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::models::SystemRecord;
use crate::state::SharedState;
use crate::submission;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: &'static str,
    pub id: i64,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemRecordView {
    pub id: i64,
    pub computer_name: String,
    pub description: String,
    pub received_at: DateTime<Utc>,
    pub information_data: serde_json::Value,
}

impl From<SystemRecord> for SystemRecordView {
    fn from(record: SystemRecord) -> Self {
        Self {
            id: record.id,
            computer_name: record.computer_name,
            description: record.information_description,
            received_at: record.received_at,
            information_data: record.information_data,
        }
    }
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let record = submission::parse_submission(content_type, &body).map_err(|msg| {
        tracing::warn!("POST /api/sistema received with invalid data");
        AppError::BadRequest(msg.to_string())
    })?;

    let inserted = state
        .store
        .insert(&record)
        .await
        .map_err(|source| AppError::Store {
            message: "Internal server error while saving data.",
            source,
        })?;

    tracing::info!(
        id = inserted.id,
        computer = %record.computer_name,
        "System data saved. Description: {}",
        record.description
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "System data saved successfully!",
            id: inserted.id,
            received_at: inserted.received_at,
        }),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<SystemRecordView>>, AppError> {
    let records = state
        .store
        .list_all()
        .await
        .map_err(|source| AppError::Store {
            message: "Internal server error while fetching data.",
            source,
        })?;

    let views: Vec<SystemRecordView> = records.into_iter().map(SystemRecordView::from).collect();
    tracing::info!("GET /api/sistema returning {} records", views.len());

    Ok(Json(views))
}
