use async_trait::async_trait;

use crate::ids::UserId;
use crate::ports::errors::AuthError;

/// The authenticated principal as the auth provider sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
}

/// Auth provider port.
///
/// Account credentials and the username live with the provider; profile rows
/// are the row store's concern ([`super::ProfileRowPort`]).
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// The current session's user, or None when signed out.
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;

    /// Replace the account's username.
    async fn update_username(&self, username: &str) -> Result<(), AuthError>;

    /// Replace the account's password.
    async fn update_password(&self, password: &str) -> Result<(), AuthError>;

    /// Whether no other account holds `username`.
    async fn check_username_availability(&self, username: &str) -> Result<bool, AuthError>;

    /// End the current session.
    async fn logout(&self) -> Result<(), AuthError>;
}
