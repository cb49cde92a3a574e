//! Input and output records of the framing engine.

mod counter;
mod entity;
mod overrides;
mod record;
mod snapshot;
mod trending;

pub use counter::CounterField;
pub use entity::{Entity, EntityKind, Status};
pub use overrides::Override;
pub use record::{BucketValue, ResultRecord};
pub use snapshot::Snapshot;
pub use trending::{TrendingSnapshot, TrendingVideo};
