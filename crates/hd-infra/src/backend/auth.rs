use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use hd_core::ports::{AuthError, AuthPort, AuthUser};

use super::{response_message, BackendConfig, SessionStore};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Auth provider client over the backend's auth and profile-query endpoints.
pub struct HttpAuthClient {
    http: reqwest::Client,
    config: BackendConfig,
    session: Arc<SessionStore>,
}

impl HttpAuthClient {
    pub fn new(config: BackendConfig, session: Arc<SessionStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build auth http client failed")?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    async fn bearer_token(&self) -> Result<String, AuthError> {
        self.session
            .get()
            .await
            .map(|session| session.access_token)
            .ok_or(AuthError::NotAuthenticated)
    }

    /// PUT a partial user record to the auth endpoint.
    async fn put_user(&self, body: serde_json::Value) -> Result<(), AuthError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .put(self.config.endpoint("auth/v1/user"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|err| AuthError::Backend(err.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Backend(response_message(response).await))
        }
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Ok(self
            .session
            .get()
            .await
            .map(|session| AuthUser {
                id: session.user_id,
            }))
    }

    async fn update_username(&self, username: &str) -> Result<(), AuthError> {
        self.put_user(json!({ "data": { "username": username } }))
            .await
    }

    async fn update_password(&self, password: &str) -> Result<(), AuthError> {
        self.put_user(json!({ "password": password })).await
    }

    async fn check_username_availability(&self, username: &str) -> Result<bool, AuthError> {
        let response = self
            .http
            .get(self.config.endpoint("rest/v1/profiles"))
            .header("apikey", &self.config.api_key)
            .query(&[
                ("select", "id".to_string()),
                ("username", format!("eq.{username}")),
            ])
            .send()
            .await
            .map_err(|err| AuthError::Backend(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Backend(response_message(response).await));
        }

        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|err| AuthError::Backend(err.to_string()))?;
        debug!(username, matches = rows.len(), "availability lookup");
        Ok(rows.is_empty())
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let token = self.bearer_token().await?;
        let response = self
            .http
            .post(self.config.endpoint("auth/v1/logout"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| AuthError::Backend(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AuthError::Backend(response_message(response).await));
        }

        self.session.clear().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hd_core::ids::UserId;

    use super::super::Session;
    use super::*;

    fn client_for(server: &mockito::Server, session: Option<Session>) -> HttpAuthClient {
        let config = BackendConfig {
            base_url: server.url(),
            api_key: "anon-key".to_string(),
        };
        let store = match session {
            Some(session) => SessionStore::with_session(session),
            None => SessionStore::new(),
        };
        HttpAuthClient::new(config, Arc::new(store)).unwrap()
    }

    fn session() -> Session {
        Session {
            access_token: "token-1".to_string(),
            user_id: UserId::from("user-1"),
        }
    }

    #[tokio::test]
    async fn test_update_username_puts_user_metadata() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/auth/v1/user")
            .match_header("apikey", "anon-key")
            .match_header("authorization", "Bearer token-1")
            .match_body(mockito::Matcher::Json(
                json!({ "data": { "username": "grace" } }),
            ))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server, Some(session()));
        client.update_username("grace").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_signed_out_update_fails_without_network() {
        let server = mockito::Server::new_async().await;
        let client = client_for(&server, None);

        let err = client.update_username("grace").await.unwrap_err();

        assert!(matches!(err, AuthError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_backend_rejection_surfaces_service_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/auth/v1/user")
            .with_status(422)
            .with_body(r#"{"msg":"Password should be at least 6 characters"}"#)
            .create_async()
            .await;

        let client = client_for(&server, Some(session()));
        let err = client.update_password("pw").await.unwrap_err();

        assert_eq!(err.to_string(), "Password should be at least 6 characters");
    }

    #[tokio::test]
    async fn test_availability_true_on_empty_result() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/v1/profiles")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("select".into(), "id".into()),
                mockito::Matcher::UrlEncoded("username".into(), "eq.grace".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server, None);

        assert!(client.check_username_availability("grace").await.unwrap());
    }

    #[tokio::test]
    async fn test_availability_false_when_a_row_matches() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/v1/profiles")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"id":"user-2"}]"#)
            .create_async()
            .await;

        let client = client_for(&server, None);

        assert!(!client.check_username_availability("grace").await.unwrap());
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/v1/logout")
            .with_status(204)
            .create_async()
            .await;

        let store = Arc::new(SessionStore::with_session(session()));
        let config = BackendConfig {
            base_url: server.url(),
            api_key: "anon-key".to_string(),
        };
        let client = HttpAuthClient::new(config, store.clone()).unwrap();

        client.logout().await.unwrap();

        assert!(store.get().await.is_none());
    }
}
