//! JSON input and output for [`EventAnalytics`].
//!
//! A path of `-` means stdin.

use std::io::Read;
use std::path::Path;

use crate::dto::EventAnalytics;
use crate::error::AppError;

/// Reads analytics from a file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the source cannot be read and
/// [`AppError::Json`] if its content is not valid analytics JSON.
pub fn read_analytics(path: &Path) -> Result<EventAnalytics, AppError> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::io("<stdin>", e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?
    };

    let analytics = from_json(&raw)?;
    tracing::debug!(
        source = %path.display(),
        days = analytics.daily_stats.len(),
        "Analytics loaded"
    );

    Ok(analytics)
}

/// Parses analytics from a JSON string.
pub fn from_json(raw: &str) -> Result<EventAnalytics, AppError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes analytics to JSON, pretty-printed or compact.
pub fn to_json(analytics: &EventAnalytics, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(analytics)?
    } else {
        serde_json::to_string(analytics)?
    };
    Ok(json)
}
