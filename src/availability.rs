//! Read-only availability figures for presenting an event's analytics.
//!
//! These are computed from an [`EventAnalytics`] value on demand and never
//! written back into it.

use serde::Serialize;

use crate::dto::EventAnalytics;

/// How full an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Registrations so far; an absent total counts as zero here.
    pub registered: i32,

    pub capacity: Option<i32>,

    /// `max(0, capacity - registered)`, absent when capacity is unknown.
    pub spots_left: Option<i32>,

    /// Rounded percentage of capacity taken, absent when capacity is
    /// unknown or zero. May exceed 100 for overbooked events.
    pub percent_full: Option<i64>,
}

impl Availability {
    pub fn is_full(&self) -> bool {
        self.spots_left == Some(0)
    }
}

impl From<&EventAnalytics> for Availability {
    fn from(analytics: &EventAnalytics) -> Self {
        let registered = analytics.total_registrations.unwrap_or(0);
        let capacity = analytics.max_capacity;

        let spots_left = capacity.map(|cap| cap.saturating_sub(registered).max(0));

        let percent_full = capacity.filter(|&cap| cap > 0).map(|cap| {
            (f64::from(registered) / f64::from(cap) * 100.0).round() as i64
        });

        Self {
            registered,
            capacity,
            spots_left,
            percent_full,
        }
    }
}
