use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use hd_core::ports::AuthPort;

use super::MutationError;

/// Use case for replacing the account's password.
///
/// Credentials live entirely with the auth provider: no profile row or
/// cache field is touched.
pub struct UpdateUserPassword {
    auth: Arc<dyn AuthPort>,
}

impl UpdateUserPassword {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, password: &str) -> Result<(), MutationError> {
        let span = info_span!("usecase.update_password.execute");

        async {
            self.auth.update_password(password).await?;
            info!("password updated");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
