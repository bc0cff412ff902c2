use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{JoinType, QueryFilter, QueryOrder, QuerySelect, prelude::*, sea_query::Expr};
use uuid::Uuid;

use crate::{Event, ResultEngine, events, scans};

use super::super::Engine;

/// How many of the latest events get a per-event scan count.
const SUMMARY_EVENT_COUNT: u64 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventScanCount {
    pub event_id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    /// Scanned users only; plus-ones are not counted here.
    pub num_scans: u64,
}

/// Dashboard figures for organisers.
///
/// `scans_per_event` only looks at the latest events, while
/// `total_attendance` and `raffle_eligible_students` cover every scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSummaries {
    pub scans_per_event: Vec<EventScanCount>,
    pub total_attendance: u64,
    pub raffle_eligible_students: Vec<String>,
}

impl Engine {
    pub async fn event_summaries(&self) -> ResultEngine<EventSummaries> {
        Ok(EventSummaries {
            scans_per_event: self.recent_event_scan_counts().await?,
            total_attendance: self.total_attendance().await?,
            raffle_eligible_students: self.raffle_eligible().await?,
        })
    }

    /// Scan counts for the latest events, newest first. Events nobody was
    /// scanned into are skipped.
    pub async fn recent_event_scan_counts(&self) -> ResultEngine<Vec<EventScanCount>> {
        let recent = events::Entity::find()
            .order_by_desc(events::Column::StartTime)
            .limit(SUMMARY_EVENT_COUNT)
            .all(&self.database)
            .await?;
        if recent.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<String> = recent.iter().map(|event| event.id.clone()).collect();
        let recent_scans = scans::Entity::find()
            .filter(scans::Column::EventId.is_in(event_ids))
            .all(&self.database)
            .await?;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for scan in &recent_scans {
            *counts.entry(scan.event_id.as_str()).or_default() += 1;
        }

        recent
            .into_iter()
            .filter_map(|model| {
                let num_scans = counts.get(model.id.as_str()).copied()?;
                Some(Event::try_from(model).map(|event| EventScanCount {
                    event_id: event.id,
                    name: event.title,
                    date: event.start_time,
                    num_scans,
                }))
            })
            .collect()
    }

    /// Head count over every scan: each scanned user plus their guests.
    pub async fn total_attendance(&self) -> ResultEngine<u64> {
        let total: Option<i64> = scans::Entity::find()
            .select_only()
            .column_as(
                Expr::cust(r#"COALESCE(SUM(1 + "scans"."plus_one"), 0)"#),
                "total",
            )
            .into_tuple()
            .one(&self.database)
            .await?;

        Ok(total.and_then(|total| u64::try_from(total).ok()).unwrap_or(0))
    }

    /// `net_id`s satisfying the raffle rule over all recorded scans.
    pub async fn raffle_eligible(&self) -> ResultEngine<Vec<String>> {
        let net_ids: Vec<String> = scans::Entity::find()
            .select_only()
            .column(scans::Column::NetId)
            .join(JoinType::InnerJoin, scans::Relation::Event.def())
            .group_by(scans::Column::NetId)
            .having(self.raffle_rule.having())
            .order_by_asc(scans::Column::NetId)
            .into_tuple()
            .all(&self.database)
            .await?;

        Ok(net_ids)
    }
}
