use async_trait::async_trait;
use bytes::Bytes;

use crate::ports::errors::StorageError;

/// Object storage port.
///
/// Objects live in named buckets under caller-chosen keys. `create` fails
/// with [`StorageError::AlreadyExists`] when the key is taken; `update`
/// overwrites in place. Signed URLs grant read access without a session for
/// `ttl_secs` seconds.
#[async_trait]
pub trait ObjectStoragePort: Send + Sync {
    async fn create(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn update(
        &self,
        bucket: &str,
        key: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn create_signed_url(
        &self,
        bucket: &str,
        key: &str,
        ttl_secs: u64,
    ) -> Result<String, StorageError>;
}
