use async_trait::async_trait;
use serde::Serialize;

use crate::ids::UserId;
use crate::ports::errors::RowStoreError;
use crate::profile::Status;

/// Partial update of a profile row. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl ProfilePatch {
    pub fn avatar_url(url: impl Into<String>) -> Self {
        Self {
            avatar_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Row store port for the profiles table.
#[async_trait]
pub trait ProfileRowPort: Send + Sync {
    /// Apply `patch` to the row whose id equals `id`.
    async fn update_profile(&self, id: &UserId, patch: ProfilePatch)
        -> Result<(), RowStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ProfilePatch::status(Status::Busy);
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"busy"}"#
        );
    }

    #[test]
    fn test_empty_patch_detected() {
        assert!(ProfilePatch::default().is_empty());
        assert!(!ProfilePatch::avatar_url("https://x/y.jpg").is_empty());
    }
}
