use chrono::{NaiveDateTime, TimeDelta};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{
    frames::{FrameError, FrameResult, FrameWindow},
    models::{CounterField, Override},
};

/// Framing request: window, counter and display options.
///
/// Durations are humantime strings such as `10m`, `1h` or `7d`.
#[derive(Debug, Deserialize, Clone)]
pub struct FrameSettings {
    #[serde(with = "crate::utils::timestamp")]
    pub from: NaiveDateTime,
    #[serde(with = "crate::utils::timestamp")]
    pub to: NaiveDateTime,
    #[serde(default = "default_stride")]
    pub stride: String,
    #[serde(default = "default_counter_field")]
    pub counter_field: CounterField,
    /// Uppercase display names before truncation.
    #[serde(default)]
    pub uppercase: bool,
    /// How far before `from` a video may have been released to be framed.
    #[serde(default = "default_lookback")]
    pub lookback: String,
    #[serde(default)]
    pub overrides: Vec<Override>,
}

fn default_stride() -> String {
    "10m".to_string()
}

fn default_counter_field() -> CounterField {
    CounterField::ViewCount
}

fn default_lookback() -> String {
    "7d".to_string()
}

/// Parse a humantime duration into a chrono delta.
pub fn parse_delta(raw: &str) -> FrameResult<TimeDelta> {
    let duration =
        humantime::parse_duration(raw.trim()).map_err(|_| FrameError::InvalidStride(raw.to_string()))?;
    TimeDelta::from_std(duration).map_err(|_| FrameError::InvalidStride(raw.to_string()))
}

impl FrameSettings {
    pub fn stride(&self) -> FrameResult<TimeDelta> {
        parse_delta(&self.stride)
    }

    pub fn lookback(&self) -> FrameResult<TimeDelta> {
        parse_delta(&self.lookback)
    }

    /// Validated window for this request.
    pub fn window(&self) -> FrameResult<FrameWindow> {
        FrameWindow::new(self.from, self.to, self.stride()?, self.counter_field)
    }
}

/// Which collection the input file holds.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Videos,
    Channels,
    Trending,
}

/// Location of the already-materialized input collection.
#[derive(Debug, Deserialize, Clone)]
pub struct InputSettings {
    pub kind: InputKind,
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WorkerSettings {
    /// Blocking workers used to frame entities. 0 means one per core.
    #[serde(default)]
    pub parallelism: usize,
}

/// Root application configuration.
///
/// Loaded from `config.yaml`, with `TUBEFRAMES__SECTION__KEY` environment
/// variables taking precedence.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub frames: FrameSettings,
    pub input: InputSettings,
    #[serde(default)]
    pub workers: WorkerSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("TUBEFRAMES").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}
