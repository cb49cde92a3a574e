//! Job framing per-channel counters into hour buckets.
//!
//! Channels have no zero anchor: the first observed value becomes the
//! baseline and every later bucket is relative to it.

use anyhow::Result;
use log::info;

use crate::{frames::{select_active, FramePolicy}, models::Entity};

use super::{pipeline::run_parallel, JobContext, JobReport};

const JOB_NAME: &str = "channel_frames";

pub async fn run(channels: Vec<Entity>, ctx: &JobContext) -> Result<JobReport> {
    info!(
        "Starting {} job for {} over {} buckets...",
        JOB_NAME,
        ctx.window.counter_field(),
        ctx.window.bucket_count()
    );
    let start = std::time::Instant::now();

    let received = channels.len();
    let channels = select_active(channels, &ctx.window, ctx.lookback);
    let policy = FramePolicy::channel().with_uppercase(ctx.uppercase);

    let report = run_parallel(
        channels,
        ctx.window.clone(),
        ctx.overrides.clone(),
        policy,
        ctx.parallelism,
    )
    .await?;

    info!(
        "{}: {} of {} channels framed ({} without snapshots, {} suppressed) in {:?}",
        JOB_NAME,
        report.records.len(),
        received,
        report.skipped,
        report.suppressed,
        start.elapsed()
    );
    Ok(report)
}
