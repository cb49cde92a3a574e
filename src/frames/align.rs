//! Bucket alignment.
//!
//! Truncates a timestamp to a granularity and returns a key comparable by
//! equality. The truncation is the matching policy of the resampler: two
//! instants share a bucket iff their keys are equal. No timezone
//! conversion happens, the calendar fields are used as supplied.

use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

/// How far a timestamp is truncated before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Zero seconds and sub-seconds, keep the minute.
    Minute,
    /// Zero minutes, seconds and sub-seconds.
    Hour,
}

/// Canonical bucket key produced by [`align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey(NaiveDateTime);

impl BucketKey {
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

#[inline]
pub fn align(timestamp: NaiveDateTime, granularity: Granularity) -> BucketKey {
    let minute = match granularity {
        Granularity::Minute => timestamp.minute(),
        Granularity::Hour => 0,
    };

    // Every field below the kept one is zeroed, so these never fail.
    let truncated = timestamp
        .date()
        .and_hms_opt(timestamp.hour(), minute, 0)
        .unwrap_or(timestamp);

    BucketKey(truncated)
}
