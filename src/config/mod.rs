#[allow(clippy::module_inception)]
mod config;

pub use self::config::{parse_delta, FrameSettings, InputKind, InputSettings, Settings, WorkerSettings};
