//! Time-series framing engine.
//!
//! - [`align`] - Bucket alignment, the sole matching rule between snapshots and buckets
//! - [`window`] - Frame window validation, bucket walk and labels
//! - [`resample`] - Cumulative counters to per-bucket deltas
//! - [`format`] - Display metadata, name shaping and overrides
//! - [`trending`] - Rank scores for trending lists with carry-forward
//! - [`select`] - Active-entity selection and batch merging

pub mod align;
pub mod error;
pub mod format;
pub mod resample;
pub mod select;
pub mod trending;
pub mod window;

pub use align::{align, BucketKey, Granularity};
pub use error::{FrameError, FrameResult};
pub use format::{compose, format, merge_override, Formatted, Overrides};
pub use resample::{resample, AnchorPolicy, FramePolicy, Series};
pub use select::{merge_batches, select_active};
pub use trending::{normalize_trending, rank_score, UNRANKED_SCORE};
pub use window::{label, FrameWindow};
