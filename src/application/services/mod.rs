pub mod credential_provider;
pub mod stream_correlator;
pub mod twitch_manager;
