use reqwest::{Client, RequestBuilder, Response, header::AUTHORIZATION};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::application::ports::helix_api::{HelixApi, StreamsQuery};
use crate::config::{ClientCredentials, TwitchConfig};
use crate::domain::models::{
    channel_search_record::ChannelSearchRecord, credential::Credential,
    stream_record::StreamRecord, user_profile_record::UserProfileRecord,
};
use crate::error::{HelixError, HelixResult};

use super::constants::HelixEndpoints;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct HelixData<T> {
    data: Vec<T>,
}

/// `reqwest` implementation of the Helix port.
pub struct HelixClient {
    http: Client,
    token_url: String,
    endpoints: HelixEndpoints,
    credentials: ClientCredentials,
}

impl HelixClient {
    pub fn new(config: TwitchConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: TwitchConfig) -> Self {
        Self {
            http,
            endpoints: HelixEndpoints::new(&config.api_base_url),
            token_url: config.token_url,
            credentials: config.credentials,
        }
    }

    fn authorized(&self, request: RequestBuilder, credential: &Credential) -> RequestBuilder {
        request
            .header("Client-Id", self.credentials.client_id())
            .header(AUTHORIZATION, credential.bearer())
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> HelixResult<Vec<T>> {
        let response = ensure_success(endpoint, request.send().await?).await?;

        let envelope: HelixData<T> = response.json().await?;
        debug!("Helix {} returned {} records", endpoint, envelope.data.len());
        Ok(envelope.data)
    }
}

async fn ensure_success(endpoint: &'static str, response: Response) -> HelixResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Twitch {} request failed with {}: {}", endpoint, status, body);
    Err(HelixError::Status {
        endpoint,
        status: status.as_u16(),
        body,
    })
}

#[async_trait::async_trait]
impl HelixApi for HelixClient {
    async fn request_app_token(&self) -> HelixResult<Credential> {
        let client_id = self.credentials.client_id();
        let client_secret = self.credentials.client_secret();
        let params = [
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;
        let response = ensure_success("token", response).await?;

        let token: TokenResponse = response.json().await?;
        Ok(Credential::new(token.access_token))
    }

    async fn get_streams(
        &self,
        credential: &Credential,
        query: &StreamsQuery,
    ) -> HelixResult<Vec<StreamRecord>> {
        let params: Vec<(&str, String)> = match query {
            StreamsQuery::First(first) => vec![("first", first.to_string())],
            StreamsQuery::UserIds(ids) => ids.iter().map(|id| ("user_id", id.clone())).collect(),
        };

        let request = self.http.get(&self.endpoints.streams).query(&params);
        self.fetch_data("streams", self.authorized(request, credential))
            .await
    }

    async fn search_channels(
        &self,
        credential: &Credential,
        query: &str,
    ) -> HelixResult<Vec<ChannelSearchRecord>> {
        let request = self
            .http
            .get(&self.endpoints.search)
            .query(&[("query", query)]);
        self.fetch_data("search", self.authorized(request, credential))
            .await
    }

    async fn get_users(
        &self,
        credential: &Credential,
        ids: &[String],
    ) -> HelixResult<Vec<UserProfileRecord>> {
        let params: Vec<(&str, &str)> = ids.iter().map(|id| ("id", id.as_str())).collect();

        let request = self.http.get(&self.endpoints.users).query(&params);
        self.fetch_data("users", self.authorized(request, credential))
            .await
    }
}
