#![allow(dead_code)]

use chrono::NaiveDate;
use event_analytics::dto::{DailyStats, EventAnalytics};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn day(s: &str, count: i64, cumulative: i64) -> DailyStats {
    DailyStats::new(date(s), Some(count), Some(cumulative))
}

/// The two-day event used throughout the docs.
pub fn two_day_event() -> EventAnalytics {
    EventAnalytics::new(
        Some(15),
        Some(150),
        vec![day("2024-01-01", 10, 10), day("2024-01-02", 5, 15)],
    )
}

/// Builds a consistent series from daily new-registration counts.
pub fn series_from_counts(start: &str, counts: &[i64], capacity: i32) -> EventAnalytics {
    let mut cumulative = 0;
    let daily_stats: Vec<DailyStats> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            cumulative += count;
            DailyStats::new(
                date(start) + chrono::Days::new(i as u64),
                Some(count),
                Some(cumulative),
            )
        })
        .collect();

    EventAnalytics::new(Some(cumulative as i32), Some(capacity), daily_stats)
}

/// Writes `contents` to a temporary `.json` file, removed on drop.
pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("event-analytics-")
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
