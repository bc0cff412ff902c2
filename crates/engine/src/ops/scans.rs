use chrono::{DateTime, Utc};
use sea_orm::{SqlErr, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, Scan, ScanDraft, require_text, scans};

use super::super::Engine;

impl Engine {
    /// Every scan ever recorded.
    pub async fn scans(&self) -> ResultEngine<Vec<Scan>> {
        scans::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(Scan::try_from)
            .collect()
    }

    /// Records that `net_id` attended `event_id`, stamped with `now`.
    ///
    /// A second scan of the same user at the same event is rejected with
    /// [`EngineError::DuplicateScan`]; the existing row is left untouched.
    pub async fn insert_scan(&self, draft: ScanDraft, now: DateTime<Utc>) -> ResultEngine<Scan> {
        let net_id = require_text(draft.net_id, "netId")?;
        let scanner_id = require_text(draft.scanner_id, "scannerId")?;
        let event_id = require_text(draft.event_id, "eventId")?;
        let event_id = Uuid::parse_str(&event_id).map_err(|_| {
            EngineError::InsufficientData(format!("eventId {event_id} is not a valid id"))
        })?;
        let plus_one = u32::try_from(draft.plus_one.unwrap_or(0))
            .ok()
            .filter(|count| i32::try_from(*count).is_ok())
            .ok_or_else(|| {
                EngineError::InsufficientData("plusOne must be a non-negative count".to_string())
            })?;

        let scan = Scan {
            net_id,
            event_id,
            scanner_id,
            timestamp: now,
            plus_one,
        };

        match scans::Entity::insert(scans::ActiveModel::from(&scan))
            .exec_without_returning(&self.database)
            .await
        {
            Ok(_) => Ok(scan),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(EngineError::DuplicateScan(
                    format!("{} already scanned for {}", scan.net_id, scan.event_id),
                )),
                _ => Err(err.into()),
            },
        }
    }
}
