//! Data Transfer Objects for event registration analytics.
//!
//! Both records are plain values: they never validate or recompute anything
//! on their own. Field-level checks are available through [`validator::Validate`]
//! and sequence-level checks through [`crate::consistency`], and neither runs
//! unless a caller asks for it.
//!
//! On the wire, field names are camelCase and absent numbers are `null`.

pub mod daily_stats;
pub mod event_analytics;

pub use daily_stats::DailyStats;
pub use event_analytics::EventAnalytics;
