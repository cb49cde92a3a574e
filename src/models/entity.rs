use chrono::NaiveDateTime;
use serde::Deserialize;

use super::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Video,
    Channel,
}

/// Tracking status. Entities switched off are ignored by selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    On,
    Off,
}

/// A video or channel together with its snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    /// Video title or channel name.
    pub title: String,
    /// Owning channel's name, videos only.
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub image_url: String,
    /// Release date for videos, join date for channels.
    #[serde(default, with = "crate::utils::timestamp::option")]
    pub release_or_join_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
}

impl Entity {
    pub fn video(
        id: impl Into<String>,
        title: impl Into<String>,
        channel_name: impl Into<String>,
        release_date: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::Video,
            title: title.into(),
            channel_name: Some(channel_name.into()),
            image_url: String::new(),
            release_or_join_date: Some(release_date),
            status: Status::On,
            snapshots: Vec::new(),
        }
    }

    pub fn channel(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: EntityKind::Channel,
            title: name.into(),
            channel_name: None,
            image_url: String::new(),
            release_or_join_date: None,
            status: Status::On,
            snapshots: Vec::new(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_snapshots(mut self, snapshots: Vec<Snapshot>) -> Self {
        self.snapshots = snapshots;
        self
    }

    /// Implicit zero-value anchor. Only videos carry one.
    pub fn anchor_date(&self) -> Option<NaiveDateTime> {
        match self.kind {
            EntityKind::Video => self.release_or_join_date,
            EntityKind::Channel => None,
        }
    }

    /// `"{channel}: {title}"` for videos, the channel name for channels.
    pub fn display_name(&self) -> String {
        match (self.kind, &self.channel_name) {
            (EntityKind::Video, Some(channel)) => format!("{}: {}", channel, self.title),
            _ => self.title.clone(),
        }
    }
}
