use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome marker carried by every response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success,
    Error,
}

/// Error kinds a client can act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// A required field is missing or unusable.
    InsufficientData,
    /// The user was already scanned into this event.
    DuplicateScan,
    /// Login for an unknown `netId`.
    NoUser,
    UnknownError,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub error: ErrorKind,
    pub message: String,
}

/// Body of write endpoints that return nothing else.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Ack {
    pub status: Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Socialize,
    Learn,
    Serve,
    Discover,
    Connect,
}

pub mod scan {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InsertScan {
        pub net_id: Option<String>,
        pub scanner_id: Option<String>,
        pub event_id: Option<String>,
        /// Guests brought along; absent means none.
        pub plus_one: Option<i64>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ScanView {
        pub net_id: String,
        pub event_id: Uuid,
        pub scanner_id: String,
        pub timestamp: DateTime<Utc>,
        pub plus_one: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ScansResponse {
        pub status: Status,
        pub scans: Vec<ScanView>,
    }
}

pub mod event {
    use super::*;

    /// Request body for creating an event.
    ///
    /// `type` stays a plain string so an unknown category is reported as
    /// `insufficientData` rather than a malformed body.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateEvent {
        pub title: Option<String>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub notes: Option<String>,
        /// RFC3339 timestamp, any offset.
        pub start_time: Option<DateTime<FixedOffset>>,
        /// RFC3339 timestamp, any offset.
        pub end_time: Option<DateTime<FixedOffset>>,
        pub location: Option<String>,
        pub created_by: Option<String>,
        pub waiver_url: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EventCreated {
        pub status: Status,
        pub event_id: Uuid,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EventView {
        pub event_id: Uuid,
        pub title: String,
        #[serde(rename = "type")]
        pub kind: EventType,
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

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EventsResponse {
        pub status: Status,
        pub events: Vec<EventView>,
    }
}

pub mod attendance {
    use super::*;
    use crate::{event::EventView, scan::ScanView};

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserAttendanceResponse {
        pub status: Status,
        pub scans: Vec<ScanView>,
        /// Most recent first.
        pub events: Vec<EventView>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PunchView {
        #[serde(rename = "type")]
        pub kind: EventType,
        pub count: u32,
        pub threshold: Option<u32>,
        pub complete: bool,
        pub remaining: u32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserPunchesResponse {
        pub status: Status,
        pub punches: Vec<PunchView>,
        pub raffle_eligible: bool,
    }
}

pub mod summary {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ScansPerEvent {
        pub num_scans: u64,
        pub name: String,
        pub date: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EventSummaries {
        /// Keyed by event id; only the latest events that have scans.
        pub scans_per_event: BTreeMap<Uuid, ScansPerEvent>,
        pub total_attendance: u64,
        pub raffle_eligible_students: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EventSummariesResponse {
        pub status: Status,
        pub event_summaries: EventSummaries,
    }
}

pub mod user {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AttemptLogin {
        pub net_id: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserView {
        pub net_id: String,
        pub first_name: String,
        pub last_name: String,
        pub email: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginResponse {
        pub status: Status,
        pub user: UserView,
    }
}
