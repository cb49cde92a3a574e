//! Job framing per-video counters into minute buckets.
//!
//! Videos are anchored on their release date, so a video released inside
//! the window starts at `0` even before its first snapshot.

use anyhow::Result;
use log::info;

use crate::{frames::{select_active, FramePolicy}, models::Entity};

use super::{pipeline::run_parallel, JobContext, JobReport};

const JOB_NAME: &str = "video_frames";

pub async fn run(videos: Vec<Entity>, ctx: &JobContext) -> Result<JobReport> {
    info!(
        "Starting {} job for {} over {} buckets...",
        JOB_NAME,
        ctx.window.counter_field(),
        ctx.window.bucket_count()
    );
    let start = std::time::Instant::now();

    let received = videos.len();
    let videos = select_active(videos, &ctx.window, ctx.lookback);
    let policy = FramePolicy::video().with_uppercase(ctx.uppercase);

    let report = run_parallel(
        videos,
        ctx.window.clone(),
        ctx.overrides.clone(),
        policy,
        ctx.parallelism,
    )
    .await?;

    info!(
        "{}: {} of {} videos framed ({} without snapshots, {} suppressed, {} data issues) in {:?}",
        JOB_NAME,
        report.records.len(),
        received,
        report.skipped,
        report.suppressed,
        report.issues.len(),
        start.elapsed()
    );
    Ok(report)
}
