use serde::Deserialize;

/// Manual per-entity patch applied after resampling.
///
/// Keys may also be spelled like the record columns they replace, so a
/// config entry can read `{ videoId: "AzLij636Mss", VideoName: "foo", Remove: true }`.
/// Lowercase spellings are accepted for environment-sourced values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Override {
    #[serde(
        rename = "entityId",
        alias = "videoId",
        alias = "channelId",
        alias = "entityid",
        alias = "videoid",
        alias = "channelid"
    )]
    pub entity_id: String,
    #[serde(
        default,
        rename = "displayName",
        alias = "VideoName",
        alias = "ChannelName",
        alias = "displayname",
        alias = "videoname",
        alias = "channelname"
    )]
    pub display_name: Option<String>,
    #[serde(
        default,
        rename = "imageUrl",
        alias = "Thumbnail",
        alias = "ProfilePic",
        alias = "imageurl",
        alias = "thumbnail",
        alias = "profilepic"
    )]
    pub image_url: Option<String>,
    #[serde(default, rename = "Remove", alias = "remove")]
    pub remove: bool,
}

impl Override {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            ..Default::default()
        }
    }

    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn suppress(mut self) -> Self {
        self.remove = true;
        self
    }
}
