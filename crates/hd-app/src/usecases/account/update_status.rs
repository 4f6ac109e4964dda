use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use hd_core::ports::{AuthError, ProfilePatch, ProfileRowPort};
use hd_core::profile::{ProfileCache, Status};

use super::MutationError;

/// Use case for changing the account's presence status.
///
/// The status type admits only the four legal values, so the write needs no
/// further validation. Semantically idempotent: repeating the same status
/// write yields the same row and cache state.
pub struct UpdateUserStatus {
    rows: Arc<dyn ProfileRowPort>,
    cache: Arc<ProfileCache>,
}

impl UpdateUserStatus {
    pub fn new(rows: Arc<dyn ProfileRowPort>, cache: Arc<ProfileCache>) -> Self {
        Self { rows, cache }
    }

    pub async fn execute(&self, status: Status) -> Result<(), MutationError> {
        let span = info_span!("usecase.update_status.execute", status = %status);

        async {
            let profile = self
                .cache
                .get()
                .await
                .ok_or(AuthError::NotAuthenticated)?;

            self.rows
                .update_profile(&profile.id, ProfilePatch::status(status))
                .await?;
            self.cache.update(|profile| profile.status = status).await;

            info!(%status, "status updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
