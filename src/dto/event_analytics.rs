//! DTO for the aggregate analytics view of one event.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::daily_stats::DailyStats;

/// Registration analytics for a single event.
///
/// `daily_stats` is kept in insertion order, which producers use as
/// chronological order. `total_registrations` is whatever the producer
/// supplied and is never derived from `daily_stats` here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventAnalytics {
    #[serde(default)]
    #[validate(range(min = 0, message = "totalRegistrations must not be negative"))]
    pub total_registrations: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, message = "maxCapacity must not be negative"))]
    pub max_capacity: Option<i32>,

    /// Missing or `null` on input reads as an empty series.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(nested)]
    pub daily_stats: Vec<DailyStats>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DailyStats>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DailyStats>>::deserialize(deserializer)?.unwrap_or_default())
}

impl EventAnalytics {
    /// Creates the analytics view from all three values.
    ///
    /// # Examples
    ///
    /// ```
    /// use event_analytics::dto::EventAnalytics;
    ///
    /// let analytics = EventAnalytics::new(Some(0), Some(150), Vec::new());
    /// assert!(analytics.daily_stats.is_empty());
    /// ```
    pub fn new(
        total_registrations: Option<i32>,
        max_capacity: Option<i32>,
        daily_stats: Vec<DailyStats>,
    ) -> Self {
        Self {
            total_registrations,
            max_capacity,
            daily_stats,
        }
    }
}
