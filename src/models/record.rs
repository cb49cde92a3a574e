use serde::{ser::SerializeMap, Serialize, Serializer};

use super::EntityKind;

/// Value of one bucket in an output series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketValue {
    /// No data and no anchor yet. Serialized as `""`.
    Empty,
    Value(i64),
}

impl BucketValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BucketValue::Empty => None,
            BucketValue::Value(v) => Some(*v),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BucketValue::Empty)
    }
}

impl Serialize for BucketValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BucketValue::Empty => serializer.serialize_str(""),
            BucketValue::Value(v) => serializer.serialize_i64(*v),
        }
    }
}

/// Flat output row: entity metadata followed by bucket columns in
/// chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub kind: EntityKind,
    pub display_name: String,
    pub id: String,
    pub image_url: String,
    pub buckets: Vec<(String, BucketValue)>,
}

impl ResultRecord {
    /// Column names for `(display_name, id, image_url)`.
    pub fn metadata_keys(kind: EntityKind) -> (&'static str, &'static str, &'static str) {
        match kind {
            EntityKind::Video => ("VideoName", "VideoId", "Thumbnail"),
            EntityKind::Channel => ("ChannelName", "ChannelId", "ProfilePic"),
        }
    }

    pub fn value(&self, label: &str) -> Option<BucketValue> {
        self.buckets
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn values(&self) -> impl Iterator<Item = BucketValue> + '_ {
        self.buckets.iter().map(|(_, v)| *v)
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (name_key, id_key, image_key) = Self::metadata_keys(self.kind);

        let mut map = serializer.serialize_map(Some(3 + self.buckets.len()))?;
        map.serialize_entry(name_key, &self.display_name)?;
        map.serialize_entry(id_key, &self.id)?;
        map.serialize_entry(image_key, &self.image_url)?;
        for (label, value) in &self.buckets {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
