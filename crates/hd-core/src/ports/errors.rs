use thiserror::Error;

/// Failures from the auth provider.
///
/// `Backend` carries the provider's message verbatim; the feedback layer
/// shows it to the user unchanged. Transport failures are not distinguished
/// from rejections.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User not authenticated")]
    NotAuthenticated,

    #[error("{0}")]
    Backend(String),
}

/// Failures from object storage.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// An object with the requested key already exists. Create-or-update
    /// callers fall back to an in-place update on this variant.
    #[error("The resource already exists")]
    AlreadyExists,

    #[error("{0}")]
    Backend(String),
}

/// Failures from the row store.
#[derive(Debug, Clone, Error)]
pub enum RowStoreError {
    #[error("{0}")]
    Backend(String),
}
