use chrono::{DateTime, Duration, Utc};
use sea_orm::{QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{
    EngineError, Event, EventDraft, EventKind, ResultEngine, events, normalize_optional_text,
    require_text,
};

use super::super::Engine;

/// Events that started less than this many hours ago still count as
/// upcoming.
const UPCOMING_GRACE_HOURS: i64 = 4;

impl Engine {
    /// Creates a new event. The creator is also recorded as its last editor.
    pub async fn create_event(&self, draft: EventDraft, now: DateTime<Utc>) -> ResultEngine<Event> {
        let title = require_text(draft.title, "title")?;
        let kind = EventKind::try_from(require_text(draft.kind, "type")?.as_str())?;
        let start_time = draft
            .start_time
            .ok_or_else(|| EngineError::InsufficientData("startTime is required".to_string()))?;
        let end_time = draft
            .end_time
            .ok_or_else(|| EngineError::InsufficientData("endTime is required".to_string()))?;
        let location = require_text(draft.location, "location")?;
        let created_by = require_text(draft.created_by, "createdBy")?;

        let event = Event {
            id: Uuid::new_v4(),
            title,
            kind,
            notes: normalize_optional_text(draft.notes),
            start_time,
            end_time,
            location,
            edited_by: created_by.clone(),
            created_by,
            created_date: now,
            edit_date: now,
            waiver_url: normalize_optional_text(draft.waiver_url),
        };

        events::ActiveModel::from(&event)
            .insert(&self.database)
            .await?;

        Ok(event)
    }

    /// Events starting after `now` minus the grace window, soonest first.
    pub async fn upcoming_events(&self, now: DateTime<Utc>) -> ResultEngine<Vec<Event>> {
        let cutoff = now - Duration::hours(UPCOMING_GRACE_HOURS);
        events::Entity::find()
            .filter(events::Column::StartTime.gt(cutoff))
            .order_by_asc(events::Column::StartTime)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Event::try_from)
            .collect()
    }
}
