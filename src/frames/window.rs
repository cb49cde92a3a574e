use chrono::{NaiveDateTime, TimeDelta};

use crate::models::CounterField;

use super::error::{FrameError, FrameResult};

/// Label format for bucket columns, e.g. `2020-03-29 Sun 19:00`.
pub const LABEL_FORMAT: &str = "%Y-%m-%d %a %H:%M";

/// Request-scoped framing configuration.
///
/// Buckets start at `from` and advance by `stride` while they stay within
/// `to`, so `to` itself is a bucket only when it lies exactly on a stride
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameWindow {
    from: NaiveDateTime,
    to: NaiveDateTime,
    stride: TimeDelta,
    counter_field: CounterField,
}

impl FrameWindow {
    pub fn new(
        from: NaiveDateTime,
        to: NaiveDateTime,
        stride: TimeDelta,
        counter_field: CounterField,
    ) -> FrameResult<Self> {
        if stride <= TimeDelta::zero() {
            return Err(FrameError::MalformedWindow(format!(
                "stride must be positive, got {stride}"
            )));
        }
        if to <= from {
            return Err(FrameError::MalformedWindow(format!(
                "window end {to} is not after start {from}"
            )));
        }

        Ok(Self {
            from,
            to,
            stride,
            counter_field,
        })
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    pub fn stride(&self) -> TimeDelta {
        self.stride
    }

    pub fn counter_field(&self) -> CounterField {
        self.counter_field
    }

    /// `floor((to - from) / stride) + 1`
    pub fn bucket_count(&self) -> usize {
        let span = self.to - self.from;
        let steps = match (span.num_nanoseconds(), self.stride.num_nanoseconds()) {
            (Some(span), Some(stride)) => span / stride,
            // Spans beyond ~292 years overflow nanoseconds.
            _ => span.num_milliseconds() / self.stride.num_milliseconds().max(1),
        };
        steps as usize + 1
    }

    /// Bucket start timestamps in chronological order.
    pub fn buckets(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        (0..self.bucket_count()).map(move |k| self.from + self.stride * k as i32)
    }

    /// Whether `timestamp` falls inside `[from, to]`.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.from && timestamp <= self.to
    }
}

/// Column label of a bucket. Independent of alignment granularity.
pub fn label(timestamp: NaiveDateTime) -> String {
    timestamp.format(LABEL_FORMAT).to_string()
}
