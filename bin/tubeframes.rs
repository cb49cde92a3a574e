use std::io::Write;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use tubeframes::{
    config::InputKind,
    jobs::{channel_frames, trending_frames, video_frames},
    models::{Entity, TrendingSnapshot},
    JobContext, JobReport, Settings,
};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("Failed to initialize logger")?;

    // Load configuration
    let settings =
        Settings::new().context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    // Window errors are fatal before any entity is touched
    let ctx = JobContext::from_settings(&settings)?;

    let raw = tokio::fs::read_to_string(&settings.input.path)
        .await
        .with_context(|| format!("Failed to read input collection {}", settings.input.path))?;

    let report = run_job(settings.input.kind, &raw, &ctx).await?;

    for issue in &report.issues {
        warn!("{}", issue);
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report.records)
        .context("Failed to write result records")?;
    writeln!(stdout)?;

    info!("Wrote {} records", report.records.len());
    Ok(())
}

async fn run_job(kind: InputKind, raw: &str, ctx: &JobContext) -> anyhow::Result<JobReport> {
    match kind {
        InputKind::Videos => {
            let videos: Vec<Entity> =
                serde_json::from_str(raw).context("Input is not a list of videos")?;
            video_frames::run(videos, ctx).await
        }
        InputKind::Channels => {
            let channels: Vec<Entity> =
                serde_json::from_str(raw).context("Input is not a list of channels")?;
            channel_frames::run(channels, ctx).await
        }
        InputKind::Trending => {
            let lists: Vec<TrendingSnapshot> =
                serde_json::from_str(raw).context("Input is not a list of trending snapshots")?;
            trending_frames::run(&lists, ctx)
        }
    }
}
