use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Visual treatment of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertVariant {
    Success,
    Error,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub variant: AlertVariant,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            message: message.into(),
            variant: AlertVariant::Success,
        }
    }

    /// Error alert carrying the backend's message verbatim, suffixed with a
    /// period. No translation or code mapping.
    pub fn backend_error(error: &impl Display) -> Self {
        Self {
            title: "Oops!".to_string(),
            message: format!("{error}."),
            variant: AlertVariant::Error,
        }
    }
}

/// Feedback channel port. Every mutation outcome produces exactly one alert.
pub trait FeedbackPort: Send + Sync {
    fn show_alert(&self, alert: Alert);
}
