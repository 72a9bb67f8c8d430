pub const DEFAULT_API_BASE_URL: &str = "https://api.twitch.tv/helix";
pub const DEFAULT_TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// Helix URLs derived from a base URL.
#[derive(Debug, Clone)]
pub struct HelixEndpoints {
    pub streams: String,
    pub search: String,
    pub users: String,
}

impl HelixEndpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            streams: format!("{}/streams", base),
            search: format!("{}/search/channels?live_only=true", base),
            users: format!("{}/users", base),
        }
    }
}
