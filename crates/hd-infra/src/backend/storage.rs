use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use hd_core::ports::{ObjectStoragePort, StorageError};

use super::{response_message, BackendConfig, SessionStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Object storage client over the backend's bucket endpoints.
pub struct HttpObjectStorage {
    http: reqwest::Client,
    config: BackendConfig,
    session: Arc<SessionStore>,
}

#[derive(Debug, Deserialize)]
struct SignedUrlBody {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

impl HttpObjectStorage {
    pub fn new(config: BackendConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build storage http client failed")?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        self.config
            .endpoint(&format!("storage/v1/object/{bucket}/{key}"))
    }

    async fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("apikey", &self.config.api_key);
        match self.session.get().await {
            Some(session) => request.bearer_auth(session.access_token),
            None => request,
        }
    }

    async fn send_object(
        &self,
        request: reqwest::RequestBuilder,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<reqwest::Response, StorageError> {
        self.authorize(request)
            .await
            .header("content-type", content_type.to_string())
            .body(bytes)
            .send()
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))
    }
}

#[async_trait]
impl ObjectStoragePort for HttpObjectStorage {
    async fn create(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let request = self.http.post(self.object_url(bucket, key));
        let response = self.send_object(request, bytes, content_type).await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(StorageError::AlreadyExists),
            _ => Err(StorageError::Backend(response_message(response).await)),
        }
    }

    async fn update(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let request = self.http.put(self.object_url(bucket, key));
        let response = self.send_object(request, bytes, content_type).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(StorageError::Backend(response_message(response).await))
        }
    }

    async fn create_signed_url(
        &self,
        bucket: &str,
        key: &str,
        ttl_secs: u64,
    ) -> Result<String, StorageError> {
        let request = self
            .http
            .post(
                self.config
                    .endpoint(&format!("storage/v1/object/sign/{bucket}/{key}")),
            )
            .json(&json!({ "expiresIn": ttl_secs }));
        let response = self
            .authorize(request)
            .await
            .send()
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Backend(response_message(response).await));
        }

        let body: SignedUrlBody = response
            .json()
            .await
            .map_err(|err| StorageError::Backend(err.to_string()))?;
        let url = self
            .config
            .endpoint(&format!("storage/v1{}", body.signed_url));
        debug!(bucket, key, "signed url issued");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use hd_core::ids::UserId;

    use super::super::Session;
    use super::*;

    fn storage_for(server: &mockito::Server) -> HttpObjectStorage {
        let config = BackendConfig {
            base_url: server.url(),
            api_key: "anon-key".to_string(),
        };
        let session = SessionStore::with_session(Session {
            access_token: "token-1".to_string(),
            user_id: UserId::from("user-1"),
        });
        HttpObjectStorage::new(config, Arc::new(session)).unwrap()
    }

    #[tokio::test]
    async fn test_create_posts_object_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/storage/v1/object/avatars/user-user-1.jpg")
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer token-1")
            .match_header("content-type", "image/jpeg")
            .match_body("jpeg-bytes")
            .with_status(200)
            .with_body(r#"{"Key":"avatars/user-user-1.jpg"}"#)
            .create_async()
            .await;

        let storage = storage_for(&server);
        storage
            .create(
                "avatars",
                "user-user-1.jpg",
                Bytes::from_static(b"jpeg-bytes"),
                "image/jpeg",
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_conflict_maps_to_already_exists() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/storage/v1/object/avatars/user-user-1.jpg")
            .with_status(409)
            .with_body(r#"{"message":"The resource already exists"}"#)
            .create_async()
            .await;

        let storage = storage_for(&server);
        let err = storage
            .create(
                "avatars",
                "user-user-1.jpg",
                Bytes::from_static(b"jpeg-bytes"),
                "image/jpeg",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_signed_url_is_joined_to_the_project_base() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/storage/v1/object/sign/avatars/user-user-1.jpg")
            .match_body(mockito::Matcher::Json(json!({ "expiresIn": 31536000 })))
            .with_status(200)
            .with_body(r#"{"signedURL":"/object/sign/avatars/user-user-1.jpg?token=abc"}"#)
            .create_async()
            .await;

        let storage = storage_for(&server);
        let url = storage
            .create_signed_url("avatars", "user-user-1.jpg", 31_536_000)
            .await
            .unwrap();

        assert_eq!(
            url,
            format!(
                "{}/storage/v1/object/sign/avatars/user-user-1.jpg?token=abc",
                server.url()
            )
        );
    }

    #[tokio::test]
    async fn test_update_failure_carries_service_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/storage/v1/object/avatars/user-user-1.jpg")
            .with_status(413)
            .with_body(r#"{"message":"Payload too large"}"#)
            .create_async()
            .await;

        let storage = storage_for(&server);
        let err = storage
            .update(
                "avatars",
                "user-user-1.jpg",
                Bytes::from_static(b"jpeg-bytes"),
                "image/jpeg",
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Payload too large");
    }
}
