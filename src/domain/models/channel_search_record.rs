use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::join_key::Correlatable;
use super::user_profile_record::UserProfileRecord;

/// One hit of the Helix `/search/channels` endpoint.
///
/// `id` is the broadcaster's user id; there is no separate owner field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSearchRecord {
    pub id: String,
    #[serde(default)]
    pub broadcaster_language: String,
    pub broadcaster_login: String,
    pub display_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    pub is_live: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub title: String,
    /// Helix sends an empty string for offline channels.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(rename = "streamerName", default, skip_serializing_if = "Option::is_none")]
    pub streamer_name: Option<String>,
    #[serde(rename = "profileImage", default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|parsed| Some(parsed.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

impl Correlatable for ChannelSearchRecord {
    fn self_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        None
    }

    fn attach_profile(&mut self, profile: Option<&UserProfileRecord>) {
        self.streamer_name = profile.map(|p| p.display_name.clone());
        self.profile_image = profile.map(|p| p.profile_image_url.clone());
    }
}
