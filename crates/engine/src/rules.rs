//! Attendance thresholds and the raffle eligibility rule.
//!
//! [`CATEGORY_THRESHOLDS`] is the single source of truth: it gives the punch
//! target shown for every category, and its keys decide which categories a
//! student must have attended at least once to enter the raffle.

use std::collections::HashSet;

use sea_orm::{Condition, Value, sea_query::Expr};

use crate::EventKind;

/// Punches needed to complete each category.
pub const CATEGORY_THRESHOLDS: &[(EventKind, u32)] = &[
    (EventKind::Socialize, 2),
    (EventKind::Learn, 2),
    (EventKind::Serve, 4),
    (EventKind::Discover, 4),
    (EventKind::Connect, 3),
];

/// Distinct events a student must attend to enter the raffle.
pub const RAFFLE_MIN_EVENTS: u32 = 10;

/// Punch target for `kind`, if the category is tracked.
pub fn threshold_for(kind: EventKind) -> Option<u32> {
    CATEGORY_THRESHOLDS
        .iter()
        .find_map(|(tracked, threshold)| (*tracked == kind).then_some(*threshold))
}

/// Conjunction of per-category minimums plus a minimum number of distinct
/// attended events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaffleRule {
    categories: Vec<(EventKind, u32)>,
    min_total: u32,
}

impl Default for RaffleRule {
    fn default() -> Self {
        Self::from_thresholds(CATEGORY_THRESHOLDS, RAFFLE_MIN_EVENTS)
    }
}

impl RaffleRule {
    pub fn new(categories: Vec<(EventKind, u32)>, min_total: u32) -> Self {
        Self {
            categories,
            min_total,
        }
    }

    /// Require one attended event in every category of `thresholds`.
    pub fn from_thresholds(thresholds: &[(EventKind, u32)], min_total: u32) -> Self {
        Self::new(
            thresholds.iter().map(|(kind, _)| (*kind, 1)).collect(),
            min_total,
        )
    }

    pub fn categories(&self) -> &[(EventKind, u32)] {
        &self.categories
    }

    pub fn min_total(&self) -> u32 {
        self.min_total
    }

    /// `HAVING` condition for `scans` joined with `events` and grouped by
    /// `net_id`.
    pub fn having(&self) -> Condition {
        self.categories
            .iter()
            .fold(Condition::all(), |condition, (kind, min_count)| {
                condition.add(Expr::cust_with_values(
                    r#"SUM(CASE WHEN "events"."kind" = ? THEN 1 ELSE 0 END) >= ?"#,
                    [Value::from(kind.as_str()), Value::from(i64::from(*min_count))],
                ))
            })
            .add(Expr::cust_with_values(
                r#"COUNT(DISTINCT "scans"."event_id") >= ?"#,
                [Value::from(i64::from(self.min_total))],
            ))
    }

    /// Evaluate the rule over the attended events of one student, given as
    /// `(event id, kind)` pairs. Repeated event ids count once.
    pub fn is_satisfied_by<I, K>(&self, attended: I) -> bool
    where
        I: IntoIterator<Item = (K, EventKind)>,
        K: std::hash::Hash + Eq,
    {
        let mut seen = HashSet::new();
        let mut per_kind: Vec<(EventKind, u32)> = Vec::new();
        for (event, kind) in attended {
            if !seen.insert(event) {
                continue;
            }
            match per_kind.iter_mut().find(|(tracked, _)| *tracked == kind) {
                Some((_, count)) => *count += 1,
                None => per_kind.push((kind, 1)),
            }
        }

        let total = u32::try_from(seen.len()).unwrap_or(u32::MAX);
        let count_of = |kind: EventKind| {
            per_kind
                .iter()
                .find_map(|(tracked, count)| (*tracked == kind).then_some(*count))
                .unwrap_or(0)
        };

        total >= self.min_total
            && self
                .categories
                .iter()
                .all(|(kind, min_count)| count_of(*kind) >= *min_count)
    }
}
