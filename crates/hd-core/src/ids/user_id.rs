use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable account identifier issued by the backend at signup.
///
/// Held as an opaque string; fresh ids are uuid-v4 but nothing in this
/// crate depends on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_str() {
        let id: UserId = "user-42".into();
        assert_eq!(id.as_str(), "user-42");
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(UserId::new(), UserId::new());
    }
}
