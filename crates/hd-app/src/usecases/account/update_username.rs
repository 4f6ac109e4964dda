use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use hd_core::ports::AuthPort;
use hd_core::profile::ProfileCache;

use super::MutationError;

/// Use case for replacing the account's username.
///
/// The username lives with the auth provider; on success the cached
/// profile's username is replaced to match. The cache is untouched on
/// failure.
pub struct UpdateUsername {
    auth: Arc<dyn AuthPort>,
    cache: Arc<ProfileCache>,
}

impl UpdateUsername {
    pub fn new(auth: Arc<dyn AuthPort>, cache: Arc<ProfileCache>) -> Self {
        Self { auth, cache }
    }

    pub async fn execute(&self, username: &str) -> Result<(), MutationError> {
        let span = info_span!("usecase.update_username.execute");

        async {
            self.auth.update_username(username).await?;
            self.cache
                .update(|profile| profile.username = username.to_string())
                .await;

            info!(username, "username updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
