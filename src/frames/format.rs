//! Entity formatter.
//!
//! Wraps a resampled series with display metadata, then patches it with the
//! entity's override. Suppression is decided last, after the override has
//! been merged, so the outcome does not depend on the order overrides are
//! listed in.

use rustc_hash::FxHashMap;

use crate::{
    models::{BucketValue, Entity, EntityKind, Override, ResultRecord},
    utils::names::shape_name,
};

use super::resample::{FramePolicy, Series};

/// Overrides keyed by entity id. The first entry for an id wins.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    by_id: FxHashMap<String, Override>,
}

impl Overrides {
    pub fn new(overrides: impl IntoIterator<Item = Override>) -> Self {
        let mut by_id = FxHashMap::default();
        for entry in overrides {
            by_id.entry(entry.entity_id.clone()).or_insert(entry);
        }
        Self { by_id }
    }

    pub fn get(&self, entity_id: &str) -> Option<&Override> {
        self.by_id.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Outcome of formatting one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    Kept(ResultRecord),
    Suppressed(ResultRecord),
}

impl Formatted {
    pub fn kept(self) -> Option<ResultRecord> {
        match self {
            Formatted::Kept(record) => Some(record),
            Formatted::Suppressed(_) => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Formatted::Suppressed(_))
    }
}

/// Patch `record` with `patch`, field by field. Override wins.
pub fn merge_override(mut record: ResultRecord, patch: &Override, policy: &FramePolicy) -> ResultRecord {
    if let Some(name) = &patch.display_name {
        record.display_name = shape_name(name, policy.name_max, policy.uppercase);
    }
    if let Some(image_url) = &patch.image_url {
        record.image_url = image_url.clone();
    }
    record
}

/// Build a record from raw metadata and buckets, then apply its override.
pub fn compose(
    kind: EntityKind,
    id: &str,
    raw_name: &str,
    image_url: &str,
    buckets: Vec<(String, BucketValue)>,
    overrides: &Overrides,
    policy: &FramePolicy,
) -> Formatted {
    let record = ResultRecord {
        kind,
        display_name: shape_name(raw_name, policy.name_max, policy.uppercase),
        id: id.to_string(),
        image_url: image_url.to_string(),
        buckets,
    };

    match overrides.get(id) {
        Some(patch) => {
            let record = merge_override(record, patch, policy);
            if patch.remove {
                Formatted::Suppressed(record)
            } else {
                Formatted::Kept(record)
            }
        }
        None => Formatted::Kept(record),
    }
}

pub fn format(entity: &Entity, series: Series, overrides: &Overrides, policy: &FramePolicy) -> Formatted {
    compose(
        entity.kind,
        &entity.id,
        &entity.display_name(),
        &entity.image_url,
        series.buckets,
        overrides,
        policy,
    )
}
