//! # Event Analytics
//!
//! Transport types for event registration analytics, plus the tooling that
//! sits around them.
//!
//! ## Layout
//!
//! - **Types** ([`dto`]) - [`DailyStats`](dto::DailyStats) and
//!   [`EventAnalytics`](dto::EventAnalytics), plain serde values
//! - **Checks** ([`consistency`]) - opt-in verification of ordering, totals
//!   and capacity
//! - **Presentation** ([`availability`]) - spots left and percent full
//! - **I/O** ([`codec`]) - JSON from files or stdin
//!
//! ## Wire Format
//!
//! ```json
//! {
//!   "totalRegistrations": 120,
//!   "maxCapacity": 150,
//!   "dailyStats": [
//!     { "date": "2024-01-01", "count": 10, "cumulative": 10 },
//!     { "date": "2024-01-02", "count": 5,  "cumulative": 15 }
//!   ]
//! }
//! ```
//!
//! ## Configuration
//!
//! The `event-analytics` binary reads its settings from environment variables
//! via [`config::Config`].

pub mod availability;
pub mod codec;
pub mod consistency;
pub mod dto;
pub mod error;

pub mod config;
pub mod telemetry;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::availability::Availability;
    pub use crate::consistency::{ConsistencyReport, Violation};
    pub use crate::dto::{DailyStats, EventAnalytics};
    pub use crate::error::AppError;
}
