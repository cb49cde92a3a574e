//! Frame resampler.
//!
//! Walks the buckets of a [`FrameWindow`] for one entity and turns its
//! cumulative counter snapshots into deltas against the first anchor.
//!
//! Per bucket:
//! - nothing matched and no anchor yet: `""`
//! - first snapshot or release-date anchor: `0`, establishing the baseline
//! - later snapshot: `counter - baseline`
//! - release-date anchor after the baseline: `0 - baseline`
//! - nothing matched after the baseline: `""`

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::models::{BucketValue, Entity, Snapshot};

use super::{
    align::{align, BucketKey, Granularity},
    error::FrameError,
    window::{label, FrameWindow},
};

/// Where the zero baseline of a series comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// The entity's release date counts as a zero-valued observation.
    ReleaseDate,
    /// Only observed snapshots establish the baseline.
    FirstObservation,
}

/// Parameters that distinguish the per-kind resamplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePolicy {
    pub granularity: Granularity,
    pub anchor: AnchorPolicy,
    pub uppercase: bool,
    pub name_max: usize,
}

impl FramePolicy {
    /// Minute buckets anchored on the release date.
    pub fn video() -> Self {
        Self {
            granularity: Granularity::Minute,
            anchor: AnchorPolicy::ReleaseDate,
            uppercase: false,
            name_max: crate::utils::VIDEO_NAME_MAX,
        }
    }

    /// Hour buckets anchored on the first observation.
    pub fn channel() -> Self {
        Self {
            granularity: Granularity::Hour,
            anchor: AnchorPolicy::FirstObservation,
            uppercase: false,
            name_max: crate::utils::CHANNEL_NAME_MAX,
        }
    }

    /// Minute buckets, names up to the trending limit.
    pub fn trending() -> Self {
        Self {
            granularity: Granularity::Minute,
            anchor: AnchorPolicy::FirstObservation,
            uppercase: false,
            name_max: crate::utils::TRENDING_NAME_MAX,
        }
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

/// Resampled counter series of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub entity_id: String,
    /// `(label, value)` pairs in chronological order.
    pub buckets: Vec<(String, BucketValue)>,
    /// Entity-local data problems met while resampling.
    pub issues: Vec<FrameError>,
}

/// Index snapshots by bucket key. The first snapshot of a bucket wins.
fn index_snapshots(
    snapshots: &[Snapshot],
    granularity: Granularity,
) -> FxHashMap<BucketKey, &Snapshot> {
    let mut index = FxHashMap::default();
    for snapshot in snapshots {
        index
            .entry(align(snapshot.timestamp, granularity))
            .or_insert(snapshot);
    }
    index
}

/// Resample one entity over `window`.
///
/// Returns `None` when none of the entity's snapshots lies within
/// `[from, to]`; such entities contribute no record. Snapshots off the
/// bucket grid still count, so the series may be all `""`.
pub fn resample(entity: &Entity, window: &FrameWindow, policy: &FramePolicy) -> Option<Series> {
    if !entity.snapshots.iter().any(|s| window.contains(s.timestamp)) {
        debug!("Entity {} has no snapshots in the window, skipping", entity.id);
        return None;
    }

    let granularity = policy.granularity;
    let index = index_snapshots(&entity.snapshots, granularity);

    let keys: Vec<_> = window
        .buckets()
        .map(|ts| (ts, align(ts, granularity)))
        .collect();

    let counter = window.counter_field();
    let anchor_key = match policy.anchor {
        AnchorPolicy::ReleaseDate => entity.anchor_date().map(|d| align(d, granularity)),
        AnchorPolicy::FirstObservation => None,
    };

    let mut baseline: Option<i64> = None;
    let mut buckets = Vec::with_capacity(keys.len());
    let mut issues = Vec::new();

    for (ts, key) in keys {
        let observed = match index.get(&key) {
            Some(snapshot) => match snapshot.counter(counter) {
                Some(value) => Some(value as i64),
                None => {
                    warn!(
                        "Snapshot of {} at {} has no '{}' counter, leaving bucket unmatched",
                        entity.id, snapshot.timestamp, counter
                    );
                    issues.push(FrameError::MissingCounterField {
                        entity_id: entity.id.clone(),
                        counter: counter.to_string(),
                        bucket: key.as_datetime(),
                    });
                    None
                }
            },
            None => None,
        };
        let is_anchor = anchor_key == Some(key);

        let value = match (baseline, observed) {
            // An observed value wins over the release-date zero in the same bucket.
            (None, Some(v)) => {
                baseline = Some(v);
                BucketValue::Value(0)
            }
            (None, None) if is_anchor => {
                baseline = Some(0);
                BucketValue::Value(0)
            }
            (Some(base), Some(v)) => BucketValue::Value(v - base),
            (Some(base), None) if is_anchor => BucketValue::Value(-base),
            _ => BucketValue::Empty,
        };

        buckets.push((label(ts), value));
    }

    Some(Series {
        entity_id: entity.id.clone(),
        buckets,
        issues,
    })
}
