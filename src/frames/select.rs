//! Input preparation: which entities and snapshots take part in a run.

use chrono::TimeDelta;

use crate::models::{Entity, EntityKind, ResultRecord, Status};

use super::window::FrameWindow;

/// Keep entities that are switched on and, for videos, were released within
/// `lookback` before the window start and before its end. Each kept entity's
/// snapshots are trimmed to `[from, to]` and sorted by time.
pub fn select_active(entities: Vec<Entity>, window: &FrameWindow, lookback: TimeDelta) -> Vec<Entity> {
    let released_after = window.from() - lookback;

    entities
        .into_iter()
        .filter(|entity| entity.status == Status::On)
        .filter(|entity| match (entity.kind, entity.release_or_join_date) {
            (EntityKind::Video, Some(released)) => released > released_after && released < window.to(),
            (EntityKind::Video, None) => false,
            (EntityKind::Channel, _) => true,
        })
        .map(|mut entity| {
            entity.snapshots.retain(|s| window.contains(s.timestamp));
            entity.snapshots.sort_by_key(|s| s.timestamp);
            entity
        })
        .collect()
}

/// Concatenate result batches in sequence order.
pub fn merge_batches<I>(batches: I) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = Vec<ResultRecord>>,
{
    batches.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CounterField, Snapshot};
    use chrono::{NaiveDate, NaiveDateTime};

    fn day(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn window() -> FrameWindow {
        FrameWindow::new(day(29, 19), day(29, 21), TimeDelta::minutes(10), CounterField::ViewCount)
            .unwrap()
    }

    #[test]
    fn test_selects_recent_active_videos() {
        let recent = Entity::video("recent", "t", "c", day(25, 12));
        let old = Entity::video("old", "t", "c", day(1, 12));
        let future = Entity::video("future", "t", "c", day(30, 12));
        let mut off = Entity::video("off", "t", "c", day(28, 12));
        off.status = Status::Off;
        let channel = Entity::channel("chan", "c");

        let selected = select_active(
            vec![recent, old, future, off, channel],
            &window(),
            TimeDelta::days(7),
        );
        let ids: Vec<_> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["recent", "chan"]);
    }

    #[test]
    fn test_trims_and_sorts_snapshots() {
        let video = Entity::video("v", "t", "c", day(29, 18)).with_snapshots(vec![
            Snapshot::new("v", day(29, 20)),
            Snapshot::new("v", day(29, 19)),
            Snapshot::new("v", day(29, 22)),
            Snapshot::new("v", day(28, 19)),
        ]);

        let selected = select_active(vec![video], &window(), TimeDelta::days(7));
        let times: Vec<_> = selected[0].snapshots.iter().map(|s| s.timestamp).collect();
        assert_eq!(times, vec![day(29, 19), day(29, 20)]);
    }

    #[test]
    fn test_merge_batches_keeps_sequence_order() {
        let record = |id: &str| ResultRecord {
            kind: EntityKind::Video,
            display_name: id.to_string(),
            id: id.to_string(),
            image_url: String::new(),
            buckets: vec![],
        };

        let merged = merge_batches(vec![vec![record("a"), record("b")], vec![], vec![record("c")]]);
        let ids: Vec<_> = merged.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
