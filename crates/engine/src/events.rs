//! Events and their categories.
//!
//! Every event carries exactly one [`EventKind`]. Kinds are the dimension
//! punches and raffle thresholds are counted over.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Socialize,
    Learn,
    Serve,
    Discover,
    Connect,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Socialize => "socialize",
            Self::Learn => "learn",
            Self::Serve => "serve",
            Self::Discover => "discover",
            Self::Connect => "connect",
        }
    }
}

impl TryFrom<&str> for EventKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "socialize" => Ok(Self::Socialize),
            "learn" => Ok(Self::Learn),
            "serve" => Ok(Self::Serve),
            "discover" => Ok(Self::Discover),
            "connect" => Ok(Self::Connect),
            other => Err(EngineError::InsufficientData(format!(
                "invalid event type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub kind: EventKind,
    pub notes: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub edited_by: String,
    pub edit_date: DateTime<Utc>,
    pub waiver_url: Option<String>,
}

/// Unvalidated input for [`Engine::create_event`](crate::Engine::create_event).
///
/// Every field is optional so that a missing value is reported as
/// [`EngineError::InsufficientData`] instead of failing deserialization.
#[derive(Clone, Debug, Default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub notes: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub created_by: Option<String>,
    pub waiver_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub kind: String,
    pub notes: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub location: String,
    pub created_by: String,
    pub created_date: DateTimeUtc,
    pub edited_by: String,
    pub edit_date: DateTimeUtc,
    pub waiver_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scans::Entity")]
    Scans,
}

impl Related<super::scans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Event> for ActiveModel {
    fn from(event: &Event) -> Self {
        Self {
            id: ActiveValue::Set(event.id.to_string()),
            title: ActiveValue::Set(event.title.clone()),
            kind: ActiveValue::Set(event.kind.as_str().to_string()),
            notes: ActiveValue::Set(event.notes.clone()),
            start_time: ActiveValue::Set(event.start_time),
            end_time: ActiveValue::Set(event.end_time),
            location: ActiveValue::Set(event.location.clone()),
            created_by: ActiveValue::Set(event.created_by.clone()),
            created_date: ActiveValue::Set(event.created_date),
            edited_by: ActiveValue::Set(event.edited_by.clone()),
            edit_date: ActiveValue::Set(event.edit_date),
            waiver_url: ActiveValue::Set(event.waiver_url.clone()),
        }
    }
}

impl TryFrom<Model> for Event {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::InvalidRecord(format!("event id {}", model.id)))?,
            kind: EventKind::try_from(model.kind.as_str())
                .map_err(|_| EngineError::InvalidRecord(format!("event type {}", model.kind)))?,
            title: model.title,
            notes: model.notes,
            start_time: model.start_time,
            end_time: model.end_time,
            location: model.location,
            created_by: model.created_by,
            created_date: model.created_date,
            edited_by: model.edited_by,
            edit_date: model.edit_date,
            waiver_url: model.waiver_url,
        })
    }
}
