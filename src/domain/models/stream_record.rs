use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::join_key::Correlatable;
use super::user_profile_record::UserProfileRecord;

/// One entry of the Helix `/streams` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(rename = "type", default)]
    pub stream_type: String,
    pub title: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub viewer_count: u32,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub language: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub is_mature: bool,

    // filled in by correlation
    #[serde(rename = "streamerName", default, skip_serializing_if = "Option::is_none")]
    pub streamer_name: Option<String>,
    #[serde(rename = "profileImage", default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl Correlatable for StreamRecord {
    fn self_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> Option<&str> {
        Some(&self.user_id)
    }

    fn attach_profile(&mut self, profile: Option<&UserProfileRecord>) {
        self.streamer_name = profile.map(|p| p.display_name.clone());
        self.profile_image = profile.map(|p| p.profile_image_url.clone());
    }
}
