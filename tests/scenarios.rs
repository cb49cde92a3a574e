use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use tubeframes::{
    frames::{normalize_trending, resample, FrameError},
    jobs::{channel_frames, trending_frames, video_frames},
    models::{
        BucketValue, CounterField, Entity, Override, Snapshot, TrendingSnapshot, TrendingVideo,
    },
    FramePolicy, FrameWindow, JobContext, Overrides,
};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 3, 29)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn views(id: &str, ts: NaiveDateTime, v: u64) -> Snapshot {
    Snapshot::new(id, ts).with_counter(CounterField::ViewCount, v)
}

fn evening_window() -> FrameWindow {
    FrameWindow::new(at(19, 0), at(21, 31), TimeDelta::minutes(10), CounterField::ViewCount)
        .unwrap()
}

#[test]
fn video_deltas_against_release_day_snapshot() {
    let video = Entity::video("AzLij636Mss", "Title", "Chan", at(19, 0))
        .with_snapshots(vec![views("AzLij636Mss", at(19, 0), 100), views("AzLij636Mss", at(19, 20), 145)]);

    let series = resample(&video, &evening_window(), &FramePolicy::video()).unwrap();

    assert_eq!(series.buckets.len(), 16);
    assert_eq!(series.buckets[0], ("2020-03-29 Sun 19:00".to_string(), BucketValue::Value(0)));
    assert_eq!(series.buckets[1], ("2020-03-29 Sun 19:10".to_string(), BucketValue::Empty));
    assert_eq!(series.buckets[2], ("2020-03-29 Sun 19:20".to_string(), BucketValue::Value(45)));
    assert_eq!(series.buckets[3].1, BucketValue::Empty);
    assert_eq!(series.buckets[15], ("2020-03-29 Sun 21:30".to_string(), BucketValue::Empty));
    assert!(series.buckets[3..].iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn channel_baseline_is_first_observation() {
    let channel = Entity::channel("UC1", "Chan").with_snapshots(vec![
        views("UC1", at(19, 2), 1_000_000),
        views("UC1", at(20, 1), 1_000_250),
        views("UC1", at(21, 3), 1_000_600),
    ]);
    let window =
        FrameWindow::new(at(19, 0), at(21, 0), TimeDelta::hours(1), CounterField::ViewCount).unwrap();

    let series = resample(&channel, &window, &FramePolicy::channel()).unwrap();
    let values: Vec<_> = series.buckets.iter().map(|(_, v)| *v).collect();
    assert_eq!(
        values,
        vec![BucketValue::Value(0), BucketValue::Value(250), BucketValue::Value(600)]
    );
}

#[test]
fn trending_gap_carries_last_known_rank() {
    let ranked = |ids: &[&str]| -> Vec<TrendingVideo> {
        ids.iter().map(|id| TrendingVideo::new(*id, "t", "c")).collect()
    };
    let lists = vec![
        TrendingSnapshot::new(at(19, 0), ranked(&["a", "b", "c", "x"])),
        TrendingSnapshot::new(at(19, 10), ranked(&["a", "b"])),
    ];
    let window =
        FrameWindow::new(at(19, 0), at(19, 20), TimeDelta::minutes(10), CounterField::ViewCount)
            .unwrap();

    let records = normalize_trending(&lists, &window, &Overrides::default(), &FramePolicy::trending());
    let x = records.iter().find(|r| r.id == "x").unwrap();
    let values: Vec<_> = x.values().collect();
    assert_eq!(
        values,
        vec![BucketValue::Value(106), BucketValue::Value(1000), BucketValue::Value(106)]
    );

    let a = records.iter().find(|r| r.id == "a").unwrap();
    assert!(a.values().all(|v| v == BucketValue::Value(100)));
}

#[test]
fn bucket_count_matches_window_for_any_stride() {
    let video = Entity::video("v", "t", "c", at(19, 0)).with_snapshots(vec![views("v", at(19, 0), 1)]);

    for minutes in [1, 3, 7, 10, 25, 60, 151] {
        let window = FrameWindow::new(
            at(19, 0),
            at(21, 31),
            TimeDelta::minutes(minutes),
            CounterField::ViewCount,
        )
        .unwrap();
        let series = resample(&video, &window, &FramePolicy::video()).unwrap();
        assert_eq!(series.buckets.len(), (151 / minutes as usize) + 1);
        assert_eq!(series.buckets.len(), window.bucket_count());
    }
}

#[test]
fn non_decreasing_counters_give_non_negative_deltas() {
    let counts = [5u64, 5, 9, 30, 30, 31, 80];
    let snapshots = counts
        .iter()
        .enumerate()
        .map(|(i, v)| views("v", at(19, 0) + TimeDelta::minutes(10 * i as i64), *v))
        .collect();
    let video = Entity::video("v", "t", "c", at(12, 0)).with_snapshots(snapshots);
    let window =
        FrameWindow::new(at(19, 0), at(20, 0), TimeDelta::minutes(10), CounterField::ViewCount)
            .unwrap();

    let series = resample(&video, &window, &FramePolicy::video()).unwrap();
    let values: Vec<i64> = series.buckets.iter().filter_map(|(_, v)| v.as_i64()).collect();
    assert_eq!(values.first(), Some(&0));
    assert!(values.iter().all(|v| *v >= 0));
    assert_eq!(values.last(), Some(&75));
}

#[tokio::test]
async fn video_job_filters_suppressed_and_keeps_order() {
    let videos: Vec<Entity> = ["first", "hidden", "third"]
        .iter()
        .map(|id| {
            Entity::video(*id, "A title", "A channel", at(18, 0))
                .with_snapshots(vec![views(id, at(19, 0), 10), views(id, at(19, 30), 40)])
        })
        .collect();

    let ctx = JobContext::new(evening_window())
        .with_overrides(Overrides::new(vec![
            Override::new("hidden").suppress(),
            Override::new("third").rename("Renamed third"),
        ]))
        .with_uppercase(true)
        .with_parallelism(2);

    let report = video_frames::run(videos, &ctx).await.unwrap();

    let ids: Vec<_> = report.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "third"]);
    assert_eq!(report.suppressed, 1);
    assert_eq!(report.records[0].display_name, "A CHANNEL: A TITLE");
    assert_eq!(report.records[1].display_name, "RENAMED THIRD");
    assert_eq!(
        report.records[0].value("2020-03-29 Sun 19:30"),
        Some(BucketValue::Value(30))
    );
}

#[tokio::test]
async fn channel_job_reports_missing_counter_without_aborting() {
    let channels = vec![
        Entity::channel("UC1", "Chan").with_snapshots(vec![
            Snapshot::new("UC1", at(19, 0)).with_counter(CounterField::SubscriberCount, 10),
            Snapshot::new("UC1", at(20, 0)),
            Snapshot::new("UC1", at(21, 0)).with_counter(CounterField::SubscriberCount, 16),
        ]),
        Entity::channel("UC2", "Empty channel"),
    ];
    let window =
        FrameWindow::new(at(19, 0), at(21, 0), TimeDelta::hours(1), CounterField::SubscriberCount)
            .unwrap();

    let report = channel_frames::run(channels, &JobContext::new(window)).await.unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped, 1);
    assert!(matches!(report.issues.as_slice(), [FrameError::MissingCounterField { .. }]));
    let values: Vec<_> = report.records[0].values().collect();
    assert_eq!(
        values,
        vec![BucketValue::Value(0), BucketValue::Empty, BucketValue::Value(6)]
    );
}

#[test]
fn trending_job_uses_trending_name_limit() {
    let long_title = "x".repeat(120);
    let lists = vec![TrendingSnapshot::new(
        at(19, 0),
        vec![TrendingVideo::new("v", long_title, "chan")],
    )];

    let report = trending_frames::run(&lists, &JobContext::new(evening_window())).unwrap();
    assert_eq!(report.records[0].display_name.chars().count(), 78);
}
