//! Opt-in consistency checks for analytics produced elsewhere.
//!
//! The DTOs never check themselves. A producer that wants to make sure its
//! output holds together, or a consumer that does not trust its input, runs
//! [`check`] or [`verify`] explicitly.
//!
//! # Rules
//!
//! Per day:
//! - `cumulative` must be at least `count`
//! - dates must be strictly increasing
//! - `cumulative` must never decrease
//!
//! Per event:
//! - `totalRegistrations` must equal the last day's `cumulative`
//! - `totalRegistrations` must not exceed `maxCapacity`
//!
//! Rules involving an absent value are skipped. Negative numbers are
//! field-level errors reported by [`validator::Validate`], which [`verify`]
//! runs first.

use std::fmt;

use chrono::NaiveDate;
use validator::Validate;

use crate::dto::EventAnalytics;
use crate::error::AppError;

/// A single broken invariant in an analytics value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("day #{index} ({date}): cumulative {cumulative} is below count {count}")]
    CumulativeBelowCount {
        index: usize,
        date: NaiveDate,
        count: i64,
        cumulative: i64,
    },

    #[error("day #{index} ({date}) does not come after {previous}")]
    DateNotIncreasing {
        index: usize,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("day #{index} ({date}): cumulative {cumulative} is below previous {previous}")]
    CumulativeDecreased {
        index: usize,
        date: NaiveDate,
        cumulative: i64,
        previous: i64,
    },

    #[error("totalRegistrations {total} does not match last cumulative {last_cumulative}")]
    TotalMismatch { total: i32, last_cumulative: i64 },

    #[error("totalRegistrations {total} exceeds maxCapacity {capacity}")]
    OverCapacity { total: i32, capacity: i32 },
}

/// All violations found in one analytics value, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    pub violations: Vec<Violation>,
}

impl ConsistencyReport {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.len() {
            1 => write!(f, "1 consistency violation: {}", self.violations[0]),
            n => write!(f, "{n} consistency violations"),
        }
    }
}

/// Checks the sequence-level invariants of `analytics`.
///
/// Never fails; an empty report means every applicable rule holds.
pub fn check(analytics: &EventAnalytics) -> ConsistencyReport {
    let mut violations = Vec::new();

    let mut previous_date: Option<NaiveDate> = None;
    let mut previous_cumulative: Option<i64> = None;

    for (index, day) in analytics.daily_stats.iter().enumerate() {
        if let (Some(count), Some(cumulative)) = (day.count, day.cumulative)
            && cumulative < count
        {
            violations.push(Violation::CumulativeBelowCount {
                index,
                date: day.date,
                count,
                cumulative,
            });
        }

        if let Some(previous) = previous_date
            && day.date <= previous
        {
            violations.push(Violation::DateNotIncreasing {
                index,
                date: day.date,
                previous,
            });
        }
        previous_date = Some(day.date);

        if let Some(cumulative) = day.cumulative {
            if let Some(previous) = previous_cumulative
                && cumulative < previous
            {
                violations.push(Violation::CumulativeDecreased {
                    index,
                    date: day.date,
                    cumulative,
                    previous,
                });
            }
            previous_cumulative = Some(cumulative);
        }
    }

    if let (Some(total), Some(last_cumulative)) = (
        analytics.total_registrations,
        analytics.daily_stats.last().and_then(|d| d.cumulative),
    ) && i64::from(total) != last_cumulative
    {
        violations.push(Violation::TotalMismatch {
            total,
            last_cumulative,
        });
    }

    if let (Some(total), Some(capacity)) = (analytics.total_registrations, analytics.max_capacity)
        && total > capacity
    {
        violations.push(Violation::OverCapacity { total, capacity });
    }

    for violation in &violations {
        tracing::debug!(%violation, "Consistency violation");
    }

    ConsistencyReport { violations }
}

/// Runs field validation, then the sequence checks.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if a number is negative, otherwise
/// [`AppError::Inconsistent`] if [`check`] found anything.
pub fn verify(analytics: &EventAnalytics) -> Result<(), AppError> {
    analytics.validate()?;

    let report = check(analytics);
    if report.is_empty() {
        Ok(())
    } else {
        Err(AppError::Inconsistent(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::DailyStats;

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn day(d: u32, count: i64, cumulative: i64) -> DailyStats {
        DailyStats::new(jan(d), Some(count), Some(cumulative))
    }

    #[test]
    fn test_well_formed_series_is_clean() {
        let analytics =
            EventAnalytics::new(Some(15), Some(150), vec![day(1, 10, 10), day(2, 5, 15)]);

        assert!(check(&analytics).is_empty());
        assert!(verify(&analytics).is_ok());
    }

    #[test]
    fn test_empty_series_is_clean() {
        let analytics = EventAnalytics::new(Some(0), Some(10), Vec::new());
        assert!(check(&analytics).is_empty());
    }

    #[test]
    fn test_cumulative_below_count() {
        let analytics = EventAnalytics::new(Some(3), None, vec![day(1, 5, 3)]);

        assert_eq!(
            check(&analytics).violations,
            vec![Violation::CumulativeBelowCount {
                index: 0,
                date: jan(1),
                count: 5,
                cumulative: 3,
            }]
        );
    }

    #[test]
    fn test_duplicate_date_is_reported() {
        let analytics = EventAnalytics::new(Some(15), None, vec![day(1, 10, 10), day(1, 5, 15)]);

        assert_eq!(
            check(&analytics).violations,
            vec![Violation::DateNotIncreasing {
                index: 1,
                date: jan(1),
                previous: jan(1),
            }]
        );
    }

    #[test]
    fn test_out_of_order_date_is_reported() {
        let analytics = EventAnalytics::new(None, None, vec![day(3, 1, 1), day(2, 1, 2)]);

        let report = check(&analytics);
        assert_eq!(report.len(), 1);
        assert!(matches!(
            report.violations[0],
            Violation::DateNotIncreasing { index: 1, .. }
        ));
    }

    #[test]
    fn test_decreasing_cumulative_skips_absent_days() {
        let gap = DailyStats::new(jan(2), Some(0), None);
        let analytics = EventAnalytics::new(None, None, vec![day(1, 10, 10), gap, day(3, 0, 8)]);

        assert_eq!(
            check(&analytics).violations,
            vec![Violation::CumulativeDecreased {
                index: 2,
                date: jan(3),
                cumulative: 8,
                previous: 10,
            }]
        );
    }

    #[test]
    fn test_total_must_match_last_cumulative() {
        let analytics = EventAnalytics::new(Some(20), None, vec![day(1, 10, 10), day(2, 5, 15)]);

        assert_eq!(
            check(&analytics).violations,
            vec![Violation::TotalMismatch {
                total: 20,
                last_cumulative: 15,
            }]
        );
    }

    #[test]
    fn test_total_unchecked_when_last_cumulative_absent() {
        let last = DailyStats::new(jan(2), Some(5), None);
        let analytics = EventAnalytics::new(Some(99), None, vec![day(1, 10, 10), last]);

        assert!(check(&analytics).is_empty());
    }

    #[test]
    fn test_over_capacity() {
        let analytics = EventAnalytics::new(Some(12), Some(10), vec![day(1, 12, 12)]);

        assert_eq!(
            check(&analytics).violations,
            vec![Violation::OverCapacity {
                total: 12,
                capacity: 10,
            }]
        );
    }

    #[test]
    fn test_capacity_exactly_reached_is_fine() {
        let analytics = EventAnalytics::new(Some(10), Some(10), vec![day(1, 10, 10)]);
        assert!(check(&analytics).is_empty());
    }

    #[test]
    fn test_verify_reports_negative_numbers_as_validation() {
        let analytics = EventAnalytics::new(Some(-1), Some(10), Vec::new());

        assert!(matches!(verify(&analytics), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_verify_reports_sequence_problems_as_inconsistent() {
        let analytics = EventAnalytics::new(Some(12), Some(10), vec![day(1, 12, 12)]);

        match verify(&analytics) {
            Err(AppError::Inconsistent(report)) => assert_eq!(report.len(), 1),
            other => panic!("expected inconsistency, got {other:?}"),
        }
    }

    #[test]
    fn test_report_display() {
        let report = ConsistencyReport {
            violations: vec![Violation::OverCapacity {
                total: 12,
                capacity: 10,
            }],
        };
        assert_eq!(
            report.to_string(),
            "1 consistency violation: totalRegistrations 12 exceeds maxCapacity 10"
        );

        assert_eq!(
            ConsistencyReport::default().to_string(),
            "0 consistency violations"
        );
    }
}
