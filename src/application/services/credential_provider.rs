use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::application::ports::helix_api::HelixApi;
use crate::domain::models::credential::Credential;
use crate::error::HelixResult;

/// Lazily acquires an app access token and keeps it for the life of the instance.
///
/// There is no expiry tracking. The slot is not locked across the exchange, so
/// concurrent cold calls may each request a token; the last one written wins.
pub struct CredentialProvider {
    api: Arc<dyn HelixApi>,
    slot: RwLock<Option<Credential>>,
}

impl CredentialProvider {
    pub fn new(api: Arc<dyn HelixApi>) -> Self {
        Self {
            api,
            slot: RwLock::new(None),
        }
    }

    /// Returns the bound credential, performing the token exchange first if none is bound.
    pub async fn ensure_credential(&self) -> HelixResult<Credential> {
        if let Some(credential) = self.slot.read().await.as_ref() {
            return Ok(credential.clone());
        }

        info!("No app access token bound, requesting one");
        let credential = self.api.request_app_token().await?;
        *self.slot.write().await = Some(credential.clone());
        info!("App access token acquired");

        Ok(credential)
    }

    /// Currently bound credential, `None` until `ensure_credential` succeeds.
    pub async fn credential(&self) -> Option<Credential> {
        self.slot.read().await.clone()
    }
}
