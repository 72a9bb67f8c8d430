use std::net::SocketAddr;

use tracing::warn;

use crate::infrastructure::twitch::constants::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL};

/// Where the client id and secret come from.
#[derive(Debug, Clone)]
pub enum ClientCredentials {
    /// `TWITCH_CLIENT_ID` / `TWITCH_CLIENT_SECRET`, read on every use.
    Env,
    Static {
        client_id: String,
        client_secret: String,
    },
}

impl ClientCredentials {
    pub fn client_id(&self) -> String {
        match self {
            Self::Env => env_or_empty("TWITCH_CLIENT_ID"),
            Self::Static { client_id, .. } => client_id.clone(),
        }
    }

    pub fn client_secret(&self) -> String {
        match self {
            Self::Env => env_or_empty("TWITCH_CLIENT_SECRET"),
            Self::Static { client_secret, .. } => client_secret.clone(),
        }
    }
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        warn!("{} is not set", key);
        String::new()
    })
}

#[derive(Debug, Clone)]
pub struct TwitchConfig {
    pub api_base_url: String,
    pub token_url: String,
    pub credentials: ClientCredentials,
}

impl TwitchConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("TWITCH_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            token_url: std::env::var("TWITCH_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            credentials: ClientCredentials::Env,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors_allowed_origin: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = std::env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;
        let cors_allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            addr,
            cors_allowed_origin,
        })
    }
}
