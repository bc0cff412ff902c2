mod attendance;
mod events;
mod scans;
mod summaries;
mod users;

pub use attendance::Attendance;
pub use summaries::{EventScanCount, EventSummaries};
