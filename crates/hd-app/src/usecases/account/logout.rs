use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use hd_core::ports::AuthPort;
use hd_core::profile::ProfileCache;

use super::MutationError;

/// Use case for ending the session.
///
/// Closes the profile cache lifecycle: the cache is cleared once the
/// provider has dropped the session.
pub struct Logout {
    auth: Arc<dyn AuthPort>,
    cache: Arc<ProfileCache>,
}

impl Logout {
    pub fn new(auth: Arc<dyn AuthPort>, cache: Arc<ProfileCache>) -> Self {
        Self { auth, cache }
    }

    pub async fn execute(&self) -> Result<(), MutationError> {
        let span = info_span!("usecase.logout.execute");

        async {
            self.auth.logout().await?;
            self.cache.clear().await;

            info!("session ended");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
