//! Per-entity framing and the fan-out over worker threads.
//!
//! Entities are independent, so chunks of them are framed on blocking
//! worker threads. Every outcome carries its input index and the report is
//! assembled in input order, never in completion order.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::join_all;
use log::debug;

use crate::{
    frames::{format, resample, FrameError, FramePolicy, FrameWindow, Formatted, Overrides},
    models::{Entity, ResultRecord},
};

/// What happened to one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityOutcome {
    /// No snapshot in the window.
    Skipped,
    /// Removed by an override.
    Suppressed { issues: Vec<FrameError> },
    Kept {
        record: ResultRecord,
        issues: Vec<FrameError>,
    },
}

/// Result of one job run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    /// Output records in input entity order.
    pub records: Vec<ResultRecord>,
    pub skipped: usize,
    pub suppressed: usize,
    /// Entity-local data errors, in input entity order.
    pub issues: Vec<FrameError>,
}

impl JobReport {
    fn push(&mut self, outcome: EntityOutcome) {
        match outcome {
            EntityOutcome::Skipped => self.skipped += 1,
            EntityOutcome::Suppressed { issues } => {
                self.suppressed += 1;
                self.issues.extend(issues);
            }
            EntityOutcome::Kept { record, issues } => {
                self.records.push(record);
                self.issues.extend(issues);
            }
        }
    }
}

impl FromIterator<EntityOutcome> for JobReport {
    fn from_iter<T: IntoIterator<Item = EntityOutcome>>(iter: T) -> Self {
        let mut report = JobReport::default();
        for outcome in iter {
            report.push(outcome);
        }
        report
    }
}

/// Resample and format a single entity.
pub fn process_entity(
    entity: &Entity,
    window: &FrameWindow,
    overrides: &Overrides,
    policy: &FramePolicy,
) -> EntityOutcome {
    let Some(mut series) = resample(entity, window, policy) else {
        return EntityOutcome::Skipped;
    };
    let issues = std::mem::take(&mut series.issues);

    match format(entity, series, overrides, policy) {
        Formatted::Kept(record) => EntityOutcome::Kept { record, issues },
        Formatted::Suppressed(_) => {
            debug!("Entity {} suppressed by override", entity.id);
            EntityOutcome::Suppressed { issues }
        }
    }
}

/// Frame all entities on the current thread.
pub fn run_sequential(
    entities: &[Entity],
    window: &FrameWindow,
    overrides: &Overrides,
    policy: &FramePolicy,
) -> JobReport {
    entities
        .iter()
        .map(|entity| process_entity(entity, window, overrides, policy))
        .collect()
}

/// Number of workers to use for `requested` (0 means one per core).
pub fn effective_parallelism(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Frame all entities across `parallelism` blocking workers.
pub async fn run_parallel(
    entities: Vec<Entity>,
    window: FrameWindow,
    overrides: Arc<Overrides>,
    policy: FramePolicy,
    parallelism: usize,
) -> Result<JobReport> {
    if entities.is_empty() {
        return Ok(JobReport::default());
    }

    let workers = effective_parallelism(parallelism).min(entities.len());
    let chunk_size = entities.len().div_ceil(workers);
    let window = Arc::new(window);

    let mut chunks: Vec<Vec<(usize, Entity)>> = Vec::with_capacity(workers);
    let mut indexed = entities.into_iter().enumerate().peekable();
    while indexed.peek().is_some() {
        chunks.push(indexed.by_ref().take(chunk_size).collect());
    }

    let handles = chunks.into_iter().map(|chunk| {
        let window = window.clone();
        let overrides = overrides.clone();
        tokio::task::spawn_blocking(move || {
            chunk
                .iter()
                .map(|(index, entity)| (*index, process_entity(entity, &window, &overrides, &policy)))
                .collect::<Vec<_>>()
        })
    });

    let mut outcomes = Vec::new();
    for joined in join_all(handles).await {
        outcomes.extend(joined.context("Framing worker panicked")?);
    }
    outcomes.sort_by_key(|(index, _)| *index);

    Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
}
