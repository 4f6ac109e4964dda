//! HTTP adapters for the hosted backend.
//!
//! One client per port: auth endpoints, bucket object endpoints, and row
//! patches. All three share the project config and the bearer session.

pub mod auth;
pub mod config;
pub mod rows;
pub mod storage;

use serde::Deserialize;
use tokio::sync::RwLock;

use hd_core::ids::UserId;

pub use auth::HttpAuthClient;
pub use config::BackendConfig;
pub use rows::HttpProfileRows;
pub use storage::HttpObjectStorage;

/// An authenticated backend session.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user_id: UserId,
}

/// Shared holder for the current session.
///
/// Populated by the login flow (out of scope here), read by every backend
/// client, cleared on logout.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }

    pub async fn get(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}

/// Error payload shapes the backend services use.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Extract the service's own message from an error response, falling back
/// to the status code when the body is not one of the known shapes.
async fn response_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .message
            .or(body.msg)
            .or(body.error_description)
            .or(body.error)
            .unwrap_or_else(|| format!("Unexpected status code: {status}")),
        Err(_) => format!("Unexpected status code: {status}"),
    }
}
