//! Account mutation use cases.
//!
//! Each use case performs exactly one logical backend update and reconciles
//! the profile cache on success. Errors cross this boundary as
//! [`MutationError`]; the orchestrator converts them to user-facing alerts.

pub mod check_availability;
pub mod logout;
pub mod update_avatar;
pub mod update_password;
pub mod update_status;
pub mod update_username;

use hd_core::ports::{AuthError, RowStoreError, StorageError};
use thiserror::Error;

pub use check_availability::CheckUsernameAvailability;
pub use logout::Logout;
pub use update_avatar::UpdateAvatar;
pub use update_password::UpdateUserPassword;
pub use update_status::UpdateUserStatus;
pub use update_username::UpdateUsername;

/// A failed account mutation.
///
/// Display is transparent: the user sees the backend's own message.
#[derive(Debug, Clone, Error)]
pub enum MutationError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Rows(#[from] RowStoreError),
}
