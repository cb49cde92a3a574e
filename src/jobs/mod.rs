//! Framing jobs, one per entity kind.
//!
//! Each job takes an already-materialized collection and returns a
//! [`JobReport`]. Fetching the collection and storing the records belong to
//! the caller.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::TimeDelta;

use crate::{
    config::Settings,
    frames::{FrameWindow, Overrides},
};

pub mod channel_frames;
pub mod pipeline;
pub mod trending_frames;
pub mod video_frames;

pub use pipeline::{process_entity, run_parallel, run_sequential, EntityOutcome, JobReport};

/// Everything a job needs besides its input.
#[derive(Debug, Clone)]
pub struct JobContext {
    pub window: FrameWindow,
    pub overrides: Arc<Overrides>,
    pub uppercase: bool,
    pub lookback: TimeDelta,
    pub parallelism: usize,
}

impl JobContext {
    pub fn new(window: FrameWindow) -> Self {
        Self {
            window,
            overrides: Arc::new(Overrides::default()),
            uppercase: false,
            lookback: TimeDelta::days(7),
            parallelism: 0,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Build from configuration. Fails fast on a malformed window.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let frames = &settings.frames;
        let window = frames.window().context("Invalid frame window in configuration")?;
        let lookback = frames.lookback().context("Invalid lookback in configuration")?;

        Ok(Self {
            window,
            overrides: Arc::new(Overrides::new(frames.overrides.iter().cloned())),
            uppercase: frames.uppercase,
            lookback,
            parallelism: settings.workers.parallelism,
        })
    }
}
