use std::sync::Arc;

use tracing::{debug, info_span, Instrument};

use hd_core::ports::AuthPort;
use hd_core::profile::ProfileCache;
use hd_core::settings_flow::UsernameAvailability;

use super::MutationError;

/// Use case for the username uniqueness check.
///
/// The cached profile is the baseline: a candidate equal to the current
/// username is available by definition and never reaches the network.
pub struct CheckUsernameAvailability {
    auth: Arc<dyn AuthPort>,
    cache: Arc<ProfileCache>,
}

impl CheckUsernameAvailability {
    pub fn new(auth: Arc<dyn AuthPort>, cache: Arc<ProfileCache>) -> Self {
        Self { auth, cache }
    }

    pub async fn execute(&self, candidate: &str) -> Result<UsernameAvailability, MutationError> {
        let span = info_span!("usecase.check_availability.execute");

        async {
            if let Some(profile) = self.cache.get().await {
                if profile.username == candidate {
                    debug!("candidate equals current username, skipping lookup");
                    return Ok(UsernameAvailability::Available);
                }
            }

            let available = self.auth.check_username_availability(candidate).await?;
            Ok(UsernameAvailability::from_available(available))
        }
        .instrument(span)
        .await
    }
}
