//! Time-range service
//!
//! Tracks the current raw time range for the Explore view. Raw ranges keep
//! the user's expressions verbatim (`now-6h`, an RFC3339 timestamp, or epoch
//! milliseconds) so the URL state round-trips exactly what was typed;
//! `resolve_epoch_ms` turns a bound into an absolute instant when needed.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default lookback window for a fresh Explore view
pub const DEFAULT_RANGE_FROM: &str = "now-6h";
pub const DEFAULT_RANGE_TO: &str = "now";

/// A time range as the user expressed it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTimeRange {
    pub from: String,
    pub to: String,
}

impl RawTimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Holds the current raw time range for the Explore view
pub struct TimeSrv {
    range: RwLock<RawTimeRange>,
}

impl Default for TimeSrv {
    fn default() -> Self {
        Self::new(RawTimeRange::new(DEFAULT_RANGE_FROM, DEFAULT_RANGE_TO))
    }
}

impl TimeSrv {
    pub fn new(range: RawTimeRange) -> Self {
        Self {
            range: RwLock::new(range),
        }
    }

    /// Snapshot of the current raw range
    pub fn raw_range(&self) -> RawTimeRange {
        self.range
            .read()
            .map(|range| range.clone())
            .unwrap_or_default()
    }

    pub fn set_range(&self, range: RawTimeRange) {
        if let Ok(mut current) = self.range.write() {
            trace_debug!("Time range updated to {} .. {}", range.from, range.to);
            *current = range;
        }
    }

    /// Resolve a single range bound to epoch milliseconds.
    ///
    /// Supports `now`, `now-<N><unit>` with units s/m/h/d, RFC3339
    /// timestamps, and bare epoch-millisecond strings. Returns `None` for
    /// expressions this service cannot interpret.
    pub fn resolve_epoch_ms(expr: &str, now: DateTime<Utc>) -> Option<i64> {
        if expr == "now" {
            return Some(now.timestamp_millis());
        }
        if let Some(offset) = expr.strip_prefix("now-") {
            let unit = offset.chars().last()?;
            let amount: i64 = offset[..offset.len() - unit.len_utf8()].parse().ok()?;
            let duration = match unit {
                's' => Duration::seconds(amount),
                'm' => Duration::minutes(amount),
                'h' => Duration::hours(amount),
                'd' => Duration::days(amount),
                _ => return None,
            };
            return Some((now - duration).timestamp_millis());
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(expr) {
            return Some(timestamp.timestamp_millis());
        }
        expr.parse::<i64>().ok()
    }
}
