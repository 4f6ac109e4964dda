use serde::{Deserialize, Serialize};

use crate::settings_flow::step::SettingsSection;

/// Inputs that drive the settings flow state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEvent {
    /// The user tapped a menu entry.
    SectionSelected(SettingsSection),

    /// The user tapped the back affordance.
    BackRequested,

    /// A mutation for the active section completed successfully.
    SubmitSucceeded,
}
