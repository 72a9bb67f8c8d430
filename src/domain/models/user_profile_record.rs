use serde::{Deserialize, Serialize};

/// Public profile from Helix `/users`, used only as a correlation lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileRecord {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_image_url: String,
    #[serde(default)]
    pub description: String,
}
