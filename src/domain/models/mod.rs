pub mod channel_search_record;
pub mod credential;
pub mod join_key;
pub mod stream_record;
pub mod user_profile_record;
