use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::profile::status::Status;

/// The authenticated user's persisted account record.
///
/// Owned by the session: mutated only through the account use cases,
/// never written to directly by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    pub status: Status,
}
