use std::sync::Arc;

use tracing::{debug, info};

use crate::application::ports::helix_api::{HelixApi, StreamsQuery};
use crate::application::services::{
    credential_provider::CredentialProvider, stream_correlator::StreamCorrelator,
};
use crate::domain::models::{
    channel_search_record::ChannelSearchRecord, join_key::JoinKey, stream_record::StreamRecord,
};
use crate::error::HelixResult;

/// Page size of the top-streams listing.
pub const TOP_STREAMS_PAGE_SIZE: u32 = 100;

/// Entry point used by the HTTP handlers.
///
/// Every operation acquires the app token if needed, issues one primary Helix
/// request, then correlates the result with `/users`. Errors at any step are
/// returned as-is.
pub struct TwitchManager {
    api: Arc<dyn HelixApi>,
    credentials: CredentialProvider,
    correlator: StreamCorrelator,
}

impl TwitchManager {
    pub fn new(api: Arc<dyn HelixApi>) -> Self {
        Self {
            credentials: CredentialProvider::new(api.clone()),
            correlator: StreamCorrelator::new(api.clone()),
            api,
        }
    }

    pub fn credentials(&self) -> &CredentialProvider {
        &self.credentials
    }

    pub async fn fetch_top_live_streams(&self) -> HelixResult<Vec<StreamRecord>> {
        let credential = self.credentials.ensure_credential().await?;

        let streams = self
            .api
            .get_streams(&credential, &StreamsQuery::First(TOP_STREAMS_PAGE_SIZE))
            .await?;
        info!("Fetched {} top live streams", streams.len());

        self.correlator
            .correlate(&credential, streams, JoinKey::ByOwnerId)
            .await
    }

    /// Live channels matching `query`, joined on the channel's own id.
    pub async fn search_channels(&self, query: &str) -> HelixResult<Vec<ChannelSearchRecord>> {
        let credential = self.credentials.ensure_credential().await?;

        let channels = self.api.search_channels(&credential, query).await?;
        info!("Search for {:?} returned {} live channels", query, channels.len());

        self.correlator
            .correlate(&credential, channels, JoinKey::BySelfId)
            .await
    }

    /// Live streams for channels previously returned by a search.
    pub async fn fetch_streams_for_channels(
        &self,
        channels: &[ChannelSearchRecord],
    ) -> HelixResult<Vec<StreamRecord>> {
        let credential = self.credentials.ensure_credential().await?;

        let user_ids: Vec<String> = channels.iter().map(|channel| channel.id.clone()).collect();
        if user_ids.is_empty() {
            debug!("No channels given, nothing to fetch");
            return Ok(Vec::new());
        }

        let streams = self
            .api
            .get_streams(&credential, &StreamsQuery::UserIds(user_ids))
            .await?;
        info!(
            "Fetched {} live streams for {} channels",
            streams.len(),
            channels.len()
        );

        self.correlator
            .correlate(&credential, streams, JoinKey::ByOwnerId)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::helix_api::MockHelix;
    use crate::domain::models::credential::Credential;
    use crate::error::HelixError;
    use crate::fixtures::{channel, profile, stream};

    const MOCK_TOKEN: &str = "mock_oauth_token";

    fn with_token(api: &mut MockHelix) {
        api.expect_request_app_token()
            .times(1)
            .returning(|| Ok(Credential::new(MOCK_TOKEN)));
    }

    #[tokio::test]
    async fn top_streams_are_joined_on_owner_id() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_get_streams()
            .withf(|credential, query| {
                credential.value() == MOCK_TOKEN && *query == StreamsQuery::First(100)
            })
            .times(1)
            .returning(|_, _| Ok(vec![stream("s1", "u1")]));
        api.expect_get_users()
            .withf(|_, ids| ids.to_vec() == vec!["u1".to_string()])
            .times(1)
            .returning(|_, _| Ok(vec![profile("u1", "Alice", "http://img")]));

        let manager = TwitchManager::new(Arc::new(api));
        let streams = manager.fetch_top_live_streams().await.unwrap();

        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].streamer_name.as_deref(), Some("Alice"));
        assert_eq!(streams[0].profile_image.as_deref(), Some("http://img"));
    }

    #[tokio::test]
    async fn top_streams_without_matching_profile_stay_bare() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_get_streams()
            .returning(|_, _| Ok(vec![stream("s2", "u2")]));
        api.expect_get_users()
            .returning(|_, _| Ok(vec![profile("u1", "Alice", "http://img")]));

        let manager = TwitchManager::new(Arc::new(api));
        let streams = manager.fetch_top_live_streams().await.unwrap();

        assert_eq!(streams.len(), 1);
        assert!(streams[0].streamer_name.is_none());
        assert!(streams[0].profile_image.is_none());
    }

    #[tokio::test]
    async fn search_is_joined_on_the_channel_id() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_search_channels()
            .withf(|credential, query| credential.value() == MOCK_TOKEN && query == "test_channel")
            .times(1)
            .returning(|_, _| Ok(vec![channel("41245072")]));
        api.expect_get_users()
            .withf(|_, ids| ids.to_vec() == vec!["41245072".to_string()])
            .times(1)
            .returning(|_, _| Ok(vec![profile("41245072", "Loserfruit", "http://img")]));

        let manager = TwitchManager::new(Arc::new(api));
        let channels = manager.search_channels("test_channel").await.unwrap();

        assert_eq!(channels[0].streamer_name.as_deref(), Some("Loserfruit"));
        assert_eq!(channels[0].profile_image.as_deref(), Some("http://img"));
    }

    #[tokio::test]
    async fn streams_for_channels_filter_by_channel_ids() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_get_streams()
            .withf(|_, query| {
                *query == StreamsQuery::UserIds(vec!["c1".to_string(), "c2".to_string()])
            })
            .times(1)
            .returning(|_, _| Ok(vec![stream("s1", "c2")]));
        api.expect_get_users()
            .withf(|_, ids| ids.to_vec() == vec!["c2".to_string()])
            .times(1)
            .returning(|_, _| Ok(vec![profile("c2", "Bob", "http://bob")]));

        let manager = TwitchManager::new(Arc::new(api));
        let streams = manager
            .fetch_streams_for_channels(&[channel("c1"), channel("c2")])
            .await
            .unwrap();

        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].streamer_name.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn streams_for_no_channels_skip_upstream() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_get_streams().never();
        api.expect_get_users().never();

        let manager = TwitchManager::new(Arc::new(api));
        let streams = manager.fetch_streams_for_channels(&[]).await.unwrap();

        assert!(streams.is_empty());
    }

    #[tokio::test]
    async fn token_is_reused_across_operations() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_get_streams()
            .times(2)
            .returning(|_, _| Ok(vec![stream("s1", "u1")]));
        api.expect_search_channels()
            .times(1)
            .returning(|_, _| Ok(vec![channel("u1")]));
        api.expect_get_users()
            .times(3)
            .returning(|_, _| Ok(vec![]));

        let manager = TwitchManager::new(Arc::new(api));
        manager.fetch_top_live_streams().await.unwrap();
        manager.search_channels("query").await.unwrap();
        manager.fetch_top_live_streams().await.unwrap();

        assert_eq!(
            manager.credentials().credential().await,
            Some(Credential::new(MOCK_TOKEN))
        );
    }

    #[tokio::test]
    async fn token_failure_stops_before_primary_fetch() {
        let mut api = MockHelix::new();
        api.expect_request_app_token().returning(|| {
            Err(HelixError::Status {
                endpoint: "token",
                status: 400,
                body: "invalid client".to_string(),
            })
        });
        api.expect_get_streams().never();
        api.expect_search_channels().never();
        api.expect_get_users().never();

        let manager = TwitchManager::new(Arc::new(api));

        let err = manager.fetch_top_live_streams().await.unwrap_err();
        assert_eq!(err.to_string(), "token returned 400: invalid client");

        let err = manager.search_channels("query").await.unwrap_err();
        assert!(matches!(err, HelixError::Status { endpoint: "token", status: 400, .. }));

        let err = manager
            .fetch_streams_for_channels(&[channel("c1")])
            .await
            .unwrap_err();
        assert!(matches!(err, HelixError::Status { endpoint: "token", status: 400, .. }));
    }

    #[tokio::test]
    async fn primary_failure_skips_correlation() {
        let mut api = MockHelix::new();
        with_token(&mut api);
        api.expect_search_channels().returning(|_, _| {
            Err(HelixError::Status {
                endpoint: "search",
                status: 503,
                body: String::new(),
            })
        });
        api.expect_get_users().never();

        let manager = TwitchManager::new(Arc::new(api));
        let err = manager.search_channels("query").await.unwrap_err();

        assert!(matches!(err, HelixError::Status { endpoint: "search", status: 503, .. }));
    }
}
