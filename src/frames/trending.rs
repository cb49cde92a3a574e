//! Trending rank normalizer.
//!
//! Turns a sequence of ranked trending lists into one rank series per video.
//! Lower scores are better. Unlike counter series, buckets without any
//! trending list carry the last known score forward.

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{BucketValue, EntityKind, ResultRecord, TrendingSnapshot, TrendingVideo};

use super::{
    align::{align, BucketKey, Granularity},
    format::{compose, Overrides},
    resample::FramePolicy,
    window::{label, FrameWindow},
};

/// Score of the top position.
pub const RANK_BASE: i64 = 100;

/// Score gap between neighbouring positions.
pub const RANK_STEP: i64 = 2;

/// Score of a video missing from a list, and the starting carry value.
pub const UNRANKED_SCORE: i64 = 1000;

#[inline]
pub fn rank_score(position: usize) -> i64 {
    RANK_BASE + RANK_STEP * position as i64
}

/// Unique videos across `snapshots`, in order of first appearance, keeping
/// the metadata of their first occurrence.
pub fn unique_videos<'a>(snapshots: &[&'a TrendingSnapshot]) -> Vec<&'a TrendingVideo> {
    let mut seen = FxHashSet::default();
    snapshots
        .iter()
        .copied()
        .flat_map(|s| s.videos.iter())
        .filter(|&v| seen.insert(v.id.as_str()))
        .collect()
}

/// Rank series of one video over pre-aligned buckets.
fn rank_series(
    video_id: &str,
    buckets: &[(String, BucketKey)],
    index: &FxHashMap<BucketKey, &TrendingSnapshot>,
) -> Vec<(String, BucketValue)> {
    let mut last_known = UNRANKED_SCORE;

    buckets
        .iter()
        .map(|(label, key)| {
            let score = match index.get(key) {
                Some(snapshot) => match snapshot.position_of(video_id) {
                    Some(position) => {
                        last_known = rank_score(position);
                        last_known
                    }
                    None => UNRANKED_SCORE,
                },
                None => last_known,
            };
            (label.clone(), BucketValue::Value(score))
        })
        .collect()
}

/// Normalize ranked trending lists over `window` into one record per video.
///
/// Records come out in order of first appearance. Suppressed videos are
/// dropped.
pub fn normalize_trending(
    snapshots: &[TrendingSnapshot],
    window: &FrameWindow,
    overrides: &Overrides,
    policy: &FramePolicy,
) -> Vec<ResultRecord> {
    let in_window: Vec<&TrendingSnapshot> = snapshots
        .iter()
        .filter(|s| window.contains(s.timestamp))
        .collect();

    let mut index = FxHashMap::default();
    for snapshot in &in_window {
        index
            .entry(align(snapshot.timestamp, Granularity::Minute))
            .or_insert(*snapshot);
    }

    let buckets: Vec<(String, BucketKey)> = window
        .buckets()
        .map(|ts| (label(ts), align(ts, Granularity::Minute)))
        .collect();

    let videos = unique_videos(&in_window);
    debug!(
        "Normalizing {} trending videos over {} lists",
        videos.len(),
        in_window.len()
    );

    videos
        .into_iter()
        .filter_map(|video| {
            compose(
                EntityKind::Video,
                &video.id,
                &video.display_name(),
                &video.image_url,
                rank_series(&video.id, &buckets, &index),
                overrides,
                policy,
            )
            .kept()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CounterField, Override};
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, 29)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn list(ts: NaiveDateTime, ids: &[&str]) -> TrendingSnapshot {
        TrendingSnapshot::new(
            ts,
            ids.iter()
                .map(|id| TrendingVideo::new(*id, format!("title {id}"), "chan"))
                .collect(),
        )
    }

    fn window(from: NaiveDateTime, to: NaiveDateTime) -> FrameWindow {
        FrameWindow::new(from, to, TimeDelta::minutes(10), CounterField::ViewCount).unwrap()
    }

    #[test]
    fn test_rank_score() {
        assert_eq!(rank_score(0), 100);
        assert_eq!(rank_score(3), 106);
    }

    #[test]
    fn test_dedup_keeps_first_metadata() {
        let mut late = list(at(19, 10, 0), &["b", "a"]);
        late.videos[1].title = "renamed".to_string();
        let snapshots = vec![list(at(19, 0, 0), &["a"]), late];
        let refs: Vec<_> = snapshots.iter().collect();

        let videos = unique_videos(&refs);
        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(videos[0].title, "title a");
    }

    #[test]
    fn test_gap_before_first_list_is_unranked() {
        let snapshots = vec![list(at(19, 10, 20), &["a"])];
        let records = normalize_trending(
            &snapshots,
            &window(at(19, 0, 0), at(19, 15, 0)),
            &Overrides::default(),
            &FramePolicy::trending(),
        );
        let values: Vec<_> = records[0].values().collect();
        assert_eq!(
            values,
            vec![BucketValue::Value(UNRANKED_SCORE), BucketValue::Value(100)]
        );
    }

    #[test]
    fn test_lists_outside_window_are_ignored() {
        let snapshots = vec![list(at(18, 0, 0), &["early"]), list(at(19, 0, 0), &["a"])];
        let records = normalize_trending(
            &snapshots,
            &window(at(19, 0, 0), at(19, 30, 0)),
            &Overrides::default(),
            &FramePolicy::trending(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "a");
    }

    #[test]
    fn test_suppressed_trending_video_dropped() {
        let snapshots = vec![list(at(19, 0, 0), &["a", "b"])];
        let overrides = Overrides::new(vec![Override::new("a").suppress()]);
        let records = normalize_trending(
            &snapshots,
            &window(at(19, 0, 0), at(19, 10, 0)),
            &overrides,
            &FramePolicy::trending(),
        );
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }
}
