use serde::{Deserialize, Serialize};

/// State of the username availability indicator.
///
/// Undetermined covers both "not checked yet" and "input changed since the
/// last check": any keystroke resets the indicator so a stale verdict is
/// never shown against new input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsernameAvailability {
    #[default]
    Undetermined,
    Available,
    Taken,
}

impl UsernameAvailability {
    pub fn from_available(available: bool) -> Self {
        if available {
            UsernameAvailability::Available
        } else {
            UsernameAvailability::Taken
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, UsernameAvailability::Available)
    }
}
