//! Attendance engine: the store entities plus every query and write the
//! HTTP surface needs.

use sea_orm::DatabaseConnection;

pub use error::EngineError;
pub use events::{Event, EventDraft, EventKind};
pub use ops::{Attendance, EventScanCount, EventSummaries};
pub use punches::{Punch, PunchCard};
pub use rules::{CATEGORY_THRESHOLDS, RAFFLE_MIN_EVENTS, RaffleRule, threshold_for};
pub use scans::{Scan, ScanDraft};
pub use users::User;

mod error;
mod events;
mod ops;
mod punches;
mod rules;
mod scans;
mod users;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    raffle_rule: RaffleRule,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn raffle_rule(&self) -> &RaffleRule {
        &self.raffle_rule
    }
}

/// Trimmed value of a required text field, or
/// [`EngineError::InsufficientData`] naming the field.
fn require_text(value: Option<String>, field: &str) -> ResultEngine<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| EngineError::InsufficientData(format!("{field} is required")))
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    raffle_rule: Option<RaffleRule>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the raffle rule (defaults to [`RaffleRule::default`]).
    pub fn raffle_rule(mut self, rule: RaffleRule) -> EngineBuilder {
        self.raffle_rule = Some(rule);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            raffle_rule: self.raffle_rule.unwrap_or_default(),
        })
    }
}
