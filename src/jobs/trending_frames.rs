//! Job turning ranked trending lists into per-video rank series.

use anyhow::Result;
use log::info;

use crate::{
    frames::{normalize_trending, FramePolicy},
    models::TrendingSnapshot,
};

use super::{JobContext, JobReport};

const JOB_NAME: &str = "trending_frames";

pub fn run(lists: &[TrendingSnapshot], ctx: &JobContext) -> Result<JobReport> {
    info!(
        "Starting {} job over {} lists and {} buckets...",
        JOB_NAME,
        lists.len(),
        ctx.window.bucket_count()
    );
    let start = std::time::Instant::now();

    let policy = FramePolicy::trending().with_uppercase(ctx.uppercase);
    let records = normalize_trending(lists, &ctx.window, &ctx.overrides, &policy);

    info!(
        "{}: {} trending videos framed in {:?}",
        JOB_NAME,
        records.len(),
        start.elapsed()
    );

    Ok(JobReport {
        records,
        ..Default::default()
    })
}
