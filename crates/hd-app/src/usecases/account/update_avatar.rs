use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use hd_core::ports::{AuthError, AuthPort, ObjectStoragePort, PickedImage, ProfilePatch,
    ProfileRowPort, StorageError};
use hd_core::profile::ProfileCache;

use super::MutationError;

/// Bucket holding one avatar object per account.
pub const AVATARS_BUCKET: &str = "avatars";

/// Signed URL validity. Effectively non-expiring for a profile picture.
pub const SIGNED_URL_TTL_SECS: u64 = 31_536_000;

/// Use case for replacing the account's profile picture.
///
/// Two-phase against object storage: the avatar object is created under a
/// key derived from the user id, and when that key already exists the
/// object is updated in place instead. Either way the resulting state is
/// the same: a fresh signed URL persisted on the profile row and mirrored
/// into the cache.
pub struct UpdateAvatar {
    auth: Arc<dyn AuthPort>,
    storage: Arc<dyn ObjectStoragePort>,
    rows: Arc<dyn ProfileRowPort>,
    cache: Arc<ProfileCache>,
}

impl UpdateAvatar {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        storage: Arc<dyn ObjectStoragePort>,
        rows: Arc<dyn ProfileRowPort>,
        cache: Arc<ProfileCache>,
    ) -> Self {
        Self {
            auth,
            storage,
            rows,
            cache,
        }
    }

    /// Upload `image` and return the signed URL persisted on the profile.
    pub async fn execute(&self, image: PickedImage) -> Result<String, MutationError> {
        let span = info_span!("usecase.update_avatar.execute");

        async {
            let user = self
                .auth
                .current_user()
                .await?
                .ok_or(AuthError::NotAuthenticated)?;
            let key = format!("user-{}.jpg", user.id);

            match self
                .storage
                .create(AVATARS_BUCKET, &key, image.bytes.clone(), &image.content_type)
                .await
            {
                Ok(()) => debug!(key, "avatar object created"),
                Err(StorageError::AlreadyExists) => {
                    self.storage
                        .update(AVATARS_BUCKET, &key, image.bytes, &image.content_type)
                        .await?;
                    debug!(key, "avatar object updated in place");
                }
                Err(other) => return Err(other.into()),
            }

            let url = self
                .storage
                .create_signed_url(AVATARS_BUCKET, &key, SIGNED_URL_TTL_SECS)
                .await?;
            self.rows
                .update_profile(&user.id, ProfilePatch::avatar_url(url.clone()))
                .await?;
            self.cache
                .update(|profile| profile.avatar_url = Some(url.clone()))
                .await;

            info!(key, "avatar updated");
            Ok(url)
        }
        .instrument(span)
        .await
    }
}
