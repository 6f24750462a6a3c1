//! DTO for a single day of registration statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration statistics for one calendar day.
///
/// `count` and `cumulative` are `None` when the producer did not compute
/// them, which is distinct from a day with zero registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// The day being reported, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// New registrations on `date`.
    #[serde(default)]
    #[validate(range(min = 0, message = "count must not be negative"))]
    pub count: Option<i64>,

    /// Registrations from the first day through `date`, inclusive.
    #[serde(default)]
    #[validate(range(min = 0, message = "cumulative must not be negative"))]
    pub cumulative: Option<i64>,
}

impl DailyStats {
    /// Creates a record from all three values.
    ///
    /// No checks are performed; see [`crate::consistency`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use event_analytics::dto::DailyStats;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let day = DailyStats::new(date, Some(10), Some(10));
    /// assert_eq!(day.count, Some(10));
    /// ```
    pub fn new(date: NaiveDate, count: Option<i64>, cumulative: Option<i64>) -> Self {
        Self {
            date,
            count,
            cumulative,
        }
    }
}
