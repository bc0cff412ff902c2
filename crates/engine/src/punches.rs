//! Per-category punch progress for a single user.

use crate::{Event, EventKind, rules::threshold_for};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Punch {
    pub kind: EventKind,
    pub count: u32,
    /// `None` when the category has no target in the threshold table.
    pub threshold: Option<u32>,
}

impl Punch {
    pub fn complete(&self) -> bool {
        self.threshold.is_none_or(|threshold| self.count >= threshold)
    }

    pub fn remaining(&self) -> u32 {
        self.threshold
            .map_or(0, |threshold| threshold.saturating_sub(self.count))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PunchCard {
    pub punches: Vec<Punch>,
    pub raffle_eligible: bool,
}

/// Count attended events per kind.
///
/// Kinds appear in the order they are first met in `events`. A kind the
/// user never attended is left out entirely rather than reported as zero.
pub fn tally<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Punch> {
    let mut punches: Vec<Punch> = Vec::new();
    for event in events {
        match punches.iter_mut().find(|punch| punch.kind == event.kind) {
            Some(punch) => punch.count += 1,
            None => punches.push(Punch {
                kind: event.kind,
                count: 1,
                threshold: threshold_for(event.kind),
            }),
        }
    }
    punches
}
