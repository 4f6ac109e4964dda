use serde::{Deserialize, Serialize};

/// One of the five mutually exclusive views of the settings screen.
///
/// The index is the horizontal page position and is stable: the menu is
/// page 0, the sections are pages 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsStep {
    Menu,
    Username,
    Password,
    Avatar,
    Status,
}

impl SettingsStep {
    pub fn index(&self) -> usize {
        match self {
            SettingsStep::Menu => 0,
            SettingsStep::Username => 1,
            SettingsStep::Password => 2,
            SettingsStep::Avatar => 3,
            SettingsStep::Status => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SettingsStep::Menu),
            1 => Some(SettingsStep::Username),
            2 => Some(SettingsStep::Password),
            3 => Some(SettingsStep::Avatar),
            4 => Some(SettingsStep::Status),
            _ => None,
        }
    }

    /// Header title shown while the step is active.
    pub fn title(&self) -> &'static str {
        match self {
            SettingsStep::Menu => "Settings",
            SettingsStep::Username => "Username",
            SettingsStep::Password => "Password",
            SettingsStep::Avatar => "Profile Picture",
            SettingsStep::Status => "Update Status",
        }
    }
}

/// A selectable menu entry; everything but the menu itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsSection {
    Username,
    Password,
    Avatar,
    Status,
}

impl SettingsSection {
    pub fn step(&self) -> SettingsStep {
        match self {
            SettingsSection::Username => SettingsStep::Username,
            SettingsSection::Password => SettingsStep::Password,
            SettingsSection::Avatar => SettingsStep::Avatar,
            SettingsSection::Status => SettingsStep::Status,
        }
    }
}
