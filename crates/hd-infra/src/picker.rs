//! File-based image picker.
//!
//! Desktop stand-in for a native picker dialog: the view layer records the
//! path the user chose, and `pick_image` loads it. With no selection the
//! pick reports as canceled.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use hd_core::ports::{ImagePickerPort, PickedImage};

pub struct FilePicker {
    selection: Mutex<Option<PathBuf>>,
}

impl FilePicker {
    pub fn new() -> Self {
        Self {
            selection: Mutex::new(None),
        }
    }

    pub async fn select(&self, path: impl Into<PathBuf>) {
        *self.selection.lock().await = Some(path.into());
    }

    pub async fn clear_selection(&self) {
        *self.selection.lock().await = None;
    }
}

impl Default for FilePicker {
    fn default() -> Self {
        Self::new()
    }
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[async_trait]
impl ImagePickerPort for FilePicker {
    async fn pick_image(&self) -> Result<Option<PickedImage>> {
        let Some(path) = self.selection.lock().await.clone() else {
            return Ok(None);
        };

        let Some(content_type) = content_type_for(&path) else {
            bail!("unsupported image type: {}", path.display());
        };
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("read image failed: {}", path.display()))?;

        Ok(Some(PickedImage {
            bytes: bytes.into(),
            content_type: content_type.to_string(),
        }))
    }
}
