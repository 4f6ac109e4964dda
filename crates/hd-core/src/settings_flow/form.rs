use serde::{Deserialize, Serialize};

/// Transient input state for the active step.
///
/// Scoped to one visit: seeded when a section is entered, discarded when the
/// flow returns to the menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the username field, as when entering the username step.
    pub fn seed_username(&mut self, username: &str) {
        self.username = username.to_string();
    }

    /// Discard all field values.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
