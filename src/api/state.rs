use std::sync::Arc;

use crate::application::services::twitch_manager::TwitchManager;

#[derive(Clone)]
pub struct AppState {
    pub twitch: Arc<TwitchManager>,
}
