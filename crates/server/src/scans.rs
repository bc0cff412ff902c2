//! Scan API endpoints

use api_types::{
    Ack, Status,
    scan::{InsertScan, ScansResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::Utc;

use crate::{ServerError, server::ServerState, views::map_scan};

/// Handle requests for every recorded scan
pub async fn list(State(state): State<ServerState>) -> Result<Json<ScansResponse>, ServerError> {
    tracing::info!("Get scans");
    let scans = state
        .engine
        .scans()
        .await?
        .into_iter()
        .map(map_scan)
        .collect();

    Ok(Json(ScansResponse {
        status: Status::Success,
        scans,
    }))
}

/// Handle requests for recording a scan
pub async fn insert(
    State(state): State<ServerState>,
    payload: Result<Json<InsertScan>, JsonRejection>,
) -> Result<Json<Ack>, ServerError> {
    tracing::info!("Insert scan");
    let Json(payload) = payload?;
    let scan = state
        .engine
        .insert_scan(
            engine::ScanDraft {
                net_id: payload.net_id,
                scanner_id: payload.scanner_id,
                event_id: payload.event_id,
                plus_one: payload.plus_one,
            },
            Utc::now(),
        )
        .await?;
    tracing::debug!("scanned {} into {}", scan.net_id, scan.event_id);

    Ok(Json(Ack::default()))
}
