use crate::domain::models::{
    channel_search_record::ChannelSearchRecord, credential::Credential,
    stream_record::StreamRecord, user_profile_record::UserProfileRecord,
};
use crate::error::HelixResult;

/// Filter for the `/streams` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamsQuery {
    /// `first=<n>`
    First(u32),
    /// one `user_id=<id>` per entry
    UserIds(Vec<String>),
}

#[async_trait::async_trait]
pub trait HelixApi: Send + Sync + 'static {
    /// Client-credentials exchange against the token endpoint.
    ///
    /// `client_id`, `client_secret` and `grant_type=client_credentials` are sent
    /// as an `application/x-www-form-urlencoded` body rather than JSON; the token
    /// endpoint accepts both.
    async fn request_app_token(&self) -> HelixResult<Credential>;

    async fn get_streams(
        &self,
        credential: &Credential,
        query: &StreamsQuery,
    ) -> HelixResult<Vec<StreamRecord>>;

    /// Live-only channel search.
    async fn search_channels(
        &self,
        credential: &Credential,
        query: &str,
    ) -> HelixResult<Vec<ChannelSearchRecord>>;

    async fn get_users(
        &self,
        credential: &Credential,
        ids: &[String],
    ) -> HelixResult<Vec<UserProfileRecord>>;
}

#[cfg(test)]
mockall::mock! {
    pub Helix {}

    #[async_trait::async_trait]
    impl HelixApi for Helix {
        async fn request_app_token(&self) -> HelixResult<Credential>;
        async fn get_streams(
            &self,
            credential: &Credential,
            query: &StreamsQuery,
        ) -> HelixResult<Vec<StreamRecord>>;
        async fn search_channels(
            &self,
            credential: &Credential,
            query: &str,
        ) -> HelixResult<Vec<ChannelSearchRecord>>;
        async fn get_users(
            &self,
            credential: &Credential,
            ids: &[String],
        ) -> HelixResult<Vec<UserProfileRecord>>;
    }
}
