//! Scans: one attendance record per user and event.
//!
//! The table key is (`net_id`, `event_id`), so the store itself rejects a
//! second scan of the same user at the same event.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    pub net_id: String,
    pub event_id: Uuid,
    pub scanner_id: String,
    pub timestamp: DateTime<Utc>,
    /// Guests the scanned user brought along.
    pub plus_one: u32,
}

impl Scan {
    /// Head count this scan contributes to total attendance.
    pub fn attendance(&self) -> u64 {
        1 + u64::from(self.plus_one)
    }
}

/// Unvalidated input for [`Engine::insert_scan`](crate::Engine::insert_scan).
#[derive(Clone, Debug, Default)]
pub struct ScanDraft {
    pub net_id: Option<String>,
    pub scanner_id: Option<String>,
    pub event_id: Option<String>,
    pub plus_one: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "scans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub net_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: String,
    pub scanner_id: String,
    pub timestamp: DateTimeUtc,
    pub plus_one: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::NetId",
        to = "super::users::Column::NetId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Scan> for ActiveModel {
    fn from(scan: &Scan) -> Self {
        Self {
            net_id: ActiveValue::Set(scan.net_id.clone()),
            event_id: ActiveValue::Set(scan.event_id.to_string()),
            scanner_id: ActiveValue::Set(scan.scanner_id.clone()),
            timestamp: ActiveValue::Set(scan.timestamp),
            plus_one: ActiveValue::Set(i32::try_from(scan.plus_one).unwrap_or(i32::MAX)),
        }
    }
}

impl TryFrom<Model> for Scan {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            event_id: Uuid::parse_str(&model.event_id).map_err(|_| {
                EngineError::InvalidRecord(format!("scan event id {}", model.event_id))
            })?,
            plus_one: u32::try_from(model.plus_one).map_err(|_| {
                EngineError::InvalidRecord(format!("scan plus one {}", model.plus_one))
            })?,
            net_id: model.net_id,
            scanner_id: model.scanner_id,
            timestamp: model.timestamp,
        })
    }
}
