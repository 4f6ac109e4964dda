use serde::{Deserialize, Serialize};

/// Side effects a transition asks its driver to perform.
///
/// Domain actions (`SeedUsernameForm`, `CheckAvailability`, `DiscardForm`)
/// are executed by the flow orchestrator; UI actions (`ResetScroll`,
/// `ExitSettings`) are handed to the embedding view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowAction {
    /// Pre-fill the username field from the cached profile.
    SeedUsernameForm,

    /// Run the username availability check for the seeded value.
    CheckAvailability,

    /// Drop the transient form state.
    DiscardForm,

    /// Return the pager to position zero.
    ResetScroll,

    /// Leave the settings screen entirely.
    ExitSettings,
}
