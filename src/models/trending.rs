use chrono::NaiveDateTime;
use serde::Deserialize;

/// A video as listed on a trending page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingVideo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub image_url: String,
}

impl TrendingVideo {
    pub fn new(id: impl Into<String>, title: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            channel_name: channel.into(),
            image_url: String::new(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}: {}", self.channel_name, self.title)
    }
}

/// Ranked trending list captured at one instant, best rank first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingSnapshot {
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub videos: Vec<TrendingVideo>,
}

impl TrendingSnapshot {
    pub fn new(timestamp: NaiveDateTime, videos: Vec<TrendingVideo>) -> Self {
        Self { timestamp, videos }
    }

    /// Zero-based position of `video_id` in the ranked list.
    pub fn position_of(&self, video_id: &str) -> Option<usize> {
        self.videos.iter().position(|v| v.id == video_id)
    }
}
