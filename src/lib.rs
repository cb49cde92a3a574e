pub mod config;
pub mod frames;
pub mod jobs;
pub mod models;
pub mod utils;

pub use crate::config::Settings;
pub use frames::{FrameError, FramePolicy, FrameWindow, Overrides};
pub use jobs::{JobContext, JobReport};
