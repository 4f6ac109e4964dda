use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use hd_core::ids::UserId;
use hd_core::ports::{ProfilePatch, ProfileRowPort, RowStoreError};

use super::{response_message, BackendConfig, SessionStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The table holding one row per account.
const PROFILES_TABLE: &str = "profiles";

/// Row store client over the backend's table endpoints.
pub struct HttpProfileRows {
    http: reqwest::Client,
    config: BackendConfig,
    session: Arc<SessionStore>,
}

impl HttpProfileRows {
    pub fn new(config: BackendConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build rows http client failed")?;

        Ok(Self {
            http,
            config,
            session,
        })
    }
}

#[async_trait]
impl ProfileRowPort for HttpProfileRows {
    async fn update_profile(&self, id: &UserId, patch: ProfilePatch) -> Result<(), RowStoreError> {
        if patch.is_empty() {
            debug!(%id, "empty profile patch, nothing to update");
            return Ok(());
        }

        let mut request = self
            .http
            .patch(self.config.endpoint(&format!("rest/v1/{PROFILES_TABLE}")))
            .header("apikey", &self.config.api_key)
            .header("prefer", "return=minimal")
            .query(&[("id", format!("eq.{id}"))])
            .json(&patch);
        if let Some(session) = self.session.get().await {
            request = request.bearer_auth(session.access_token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| RowStoreError::Backend(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RowStoreError::Backend(response_message(response).await))
        }
    }
}
