//! Utility functions shared across the crate.
//!
//! - [`timestamp`] - Lenient timestamp parsing that keeps local calendar fields
//! - [`names`] - Display-name casing and truncation

pub mod names;
pub mod timestamp;

pub use names::{shape_name, truncate_name, CHANNEL_NAME_MAX, TRENDING_NAME_MAX, VIDEO_NAME_MAX};
pub use timestamp::parse_timestamp;
