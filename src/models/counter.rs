use std::fmt;

use serde::Deserialize;

/// Counter tracked in a snapshot's `counters` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterField {
    ViewCount,
    LikeCount,
    DislikeCount,
    CommentCount,
    SubscriberCount,
    VideoCount,
}

impl CounterField {
    /// Key under which the counter is stored in a snapshot.
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterField::ViewCount => "viewCount",
            CounterField::LikeCount => "likeCount",
            CounterField::DislikeCount => "dislikeCount",
            CounterField::CommentCount => "commentCount",
            CounterField::SubscriberCount => "subscriberCount",
            CounterField::VideoCount => "videoCount",
        }
    }
}

impl fmt::Display for CounterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
