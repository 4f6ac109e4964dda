//! Application dependency grouping.
//!
//! Not a Builder: no build steps, no defaults, no hidden logic — just a
//! struct that groups the ports the settings flow is wired with. All
//! dependencies are required.

use std::sync::Arc;

use hd_core::ports::{AuthPort, FeedbackPort, ImagePickerPort, ObjectStoragePort, ProfileRowPort};
use hd_core::profile::ProfileCache;

/// Ports and shared state the account use cases depend on.
pub struct AccountDeps {
    pub auth: Arc<dyn AuthPort>,
    pub storage: Arc<dyn ObjectStoragePort>,
    pub rows: Arc<dyn ProfileRowPort>,
    pub picker: Arc<dyn ImagePickerPort>,
    pub feedback: Arc<dyn FeedbackPort>,
    pub cache: Arc<ProfileCache>,
}
