use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{Event, PunchCard, ResultEngine, Scan, events, punches, require_text, scans};

use super::super::Engine;

/// A user's scans and the events they point at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attendance {
    pub scans: Vec<Scan>,
    /// Most recent first.
    pub events: Vec<Event>,
}

impl Engine {
    /// Scans recorded for `net_id` and the events they reference.
    ///
    /// A user with no scans gets two empty lists, not an error.
    pub async fn user_attendance(&self, net_id: &str) -> ResultEngine<Attendance> {
        let net_id = require_text(Some(net_id.to_string()), "netId")?;

        let scans = scans::Entity::find()
            .filter(scans::Column::NetId.eq(net_id))
            .all(&self.database)
            .await?;
        if scans.is_empty() {
            return Ok(Attendance::default());
        }

        let event_ids: Vec<String> = scans.iter().map(|scan| scan.event_id.clone()).collect();
        let events = events::Entity::find()
            .filter(events::Column::Id.is_in(event_ids))
            .order_by_desc(events::Column::StartTime)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Event::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(Attendance {
            scans: scans
                .into_iter()
                .map(Scan::try_from)
                .collect::<ResultEngine<Vec<_>>>()?,
            events,
        })
    }

    /// Punch progress per category for `net_id`, and whether the user
    /// currently qualifies for the raffle.
    pub async fn user_punches(&self, net_id: &str) -> ResultEngine<PunchCard> {
        let attendance = self.user_attendance(net_id).await?;
        let raffle_eligible = self.raffle_rule.is_satisfied_by(
            attendance.events.iter().map(|event| (event.id, event.kind)),
        );

        Ok(PunchCard {
            punches: punches::tally(&attendance.events),
            raffle_eligible,
        })
    }
}
