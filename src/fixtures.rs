use chrono::{TimeZone, Utc};

use crate::domain::models::{
    channel_search_record::ChannelSearchRecord, stream_record::StreamRecord,
    user_profile_record::UserProfileRecord,
};

pub fn stream(id: &str, user_id: &str) -> StreamRecord {
    StreamRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        user_login: "user_login".to_string(),
        user_name: "user_name".to_string(),
        game_id: "game_id".to_string(),
        game_name: "game_name".to_string(),
        stream_type: "live".to_string(),
        title: "title".to_string(),
        tags: Some(vec!["tags_1".to_string(), "tags_2".to_string()]),
        viewer_count: 12345,
        started_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        language: "en".to_string(),
        thumbnail_url: "thumbnail_url".to_string(),
        is_mature: false,
        streamer_name: None,
        profile_image: None,
    }
}

pub fn channel(id: &str) -> ChannelSearchRecord {
    ChannelSearchRecord {
        id: id.to_string(),
        broadcaster_language: "en".to_string(),
        broadcaster_login: "broadcaster_login".to_string(),
        display_name: "display_name".to_string(),
        game_id: "game_id".to_string(),
        game_name: "game_name".to_string(),
        is_live: true,
        tags: Some(vec!["tags_1".to_string()]),
        thumbnail_url: "thumbnail_url".to_string(),
        title: "title".to_string(),
        started_at: None,
        streamer_name: None,
        profile_image: None,
    }
}

pub fn profile(id: &str, display_name: &str, profile_image_url: &str) -> UserProfileRecord {
    UserProfileRecord {
        id: id.to_string(),
        display_name: display_name.to_string(),
        profile_image_url: profile_image_url.to_string(),
        description: "description".to_string(),
    }
}
