//! Conversions from engine values to response bodies.

use api_types::{
    EventType, attendance::PunchView, event::EventView, scan::ScanView, user::UserView,
};

pub(crate) fn map_kind(kind: engine::EventKind) -> EventType {
    match kind {
        engine::EventKind::Socialize => EventType::Socialize,
        engine::EventKind::Learn => EventType::Learn,
        engine::EventKind::Serve => EventType::Serve,
        engine::EventKind::Discover => EventType::Discover,
        engine::EventKind::Connect => EventType::Connect,
    }
}

pub(crate) fn map_scan(scan: engine::Scan) -> ScanView {
    ScanView {
        net_id: scan.net_id,
        event_id: scan.event_id,
        scanner_id: scan.scanner_id,
        timestamp: scan.timestamp,
        plus_one: scan.plus_one,
    }
}

pub(crate) fn map_event(event: engine::Event) -> EventView {
    EventView {
        event_id: event.id,
        title: event.title,
        kind: map_kind(event.kind),
        notes: event.notes,
        start_time: event.start_time,
        end_time: event.end_time,
        location: event.location,
        created_by: event.created_by,
        created_date: event.created_date,
        edited_by: event.edited_by,
        edit_date: event.edit_date,
        waiver_url: event.waiver_url,
    }
}

pub(crate) fn map_punch(punch: engine::Punch) -> PunchView {
    PunchView {
        kind: map_kind(punch.kind),
        count: punch.count,
        threshold: punch.threshold,
        complete: punch.complete(),
        remaining: punch.remaining(),
    }
}

pub(crate) fn map_user(user: engine::User) -> UserView {
    UserView {
        net_id: user.net_id,
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    }
}
