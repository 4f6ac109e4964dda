use async_trait::async_trait;
use bytes::Bytes;

/// An image chosen by the user, as raw bytes plus its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Image picker port.
///
/// `Ok(None)` means the user canceled; errors are picker failures.
#[async_trait]
pub trait ImagePickerPort: Send + Sync {
    async fn pick_image(&self) -> anyhow::Result<Option<PickedImage>>;
}
