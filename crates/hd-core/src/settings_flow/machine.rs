use tracing::warn;

use crate::settings_flow::action::FlowAction;
use crate::settings_flow::event::FlowEvent;
use crate::settings_flow::step::{SettingsSection, SettingsStep};

/// Pure transition function for the settings flow.
///
/// The menu is the hub: sections are only reachable from it, and every
/// section returns to it. There is no lateral movement between sections.
pub struct SettingsFlowMachine;

impl SettingsFlowMachine {
    pub fn transition(
        step: SettingsStep,
        event: FlowEvent,
    ) -> (SettingsStep, Vec<FlowAction>) {
        match (step, event) {
            // ===== Menu =====
            (SettingsStep::Menu, FlowEvent::SectionSelected(section)) => {
                let mut actions = Vec::new();
                // Entering the username step pre-fills the field and kicks
                // off the availability check before the transition completes.
                if section == SettingsSection::Username {
                    actions.push(FlowAction::SeedUsernameForm);
                    actions.push(FlowAction::CheckAvailability);
                }
                (section.step(), actions)
            }
            (SettingsStep::Menu, FlowEvent::BackRequested) => {
                (SettingsStep::Menu, vec![FlowAction::ExitSettings])
            }

            // ===== Sections =====
            (
                SettingsStep::Username
                | SettingsStep::Password
                | SettingsStep::Avatar
                | SettingsStep::Status,
                FlowEvent::BackRequested | FlowEvent::SubmitSucceeded,
            ) => (
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),

            // ===== Invalid =====
            (step, event) => {
                warn!(?step, ?event, "invalid settings flow transition");
                (step, vec![])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsFlowMachine;
    use crate::settings_flow::action::FlowAction;
    use crate::settings_flow::event::FlowEvent;
    use crate::settings_flow::step::{SettingsSection, SettingsStep};

    fn cases() -> Vec<(
        &'static str,
        SettingsStep,
        FlowEvent,
        SettingsStep,
        Vec<FlowAction>,
    )> {
        vec![
            (
                "menu -> username seeds form and checks availability",
                SettingsStep::Menu,
                FlowEvent::SectionSelected(SettingsSection::Username),
                SettingsStep::Username,
                vec![FlowAction::SeedUsernameForm, FlowAction::CheckAvailability],
            ),
            (
                "menu -> password",
                SettingsStep::Menu,
                FlowEvent::SectionSelected(SettingsSection::Password),
                SettingsStep::Password,
                vec![],
            ),
            (
                "menu -> avatar",
                SettingsStep::Menu,
                FlowEvent::SectionSelected(SettingsSection::Avatar),
                SettingsStep::Avatar,
                vec![],
            ),
            (
                "menu -> status",
                SettingsStep::Menu,
                FlowEvent::SectionSelected(SettingsSection::Status),
                SettingsStep::Status,
                vec![],
            ),
            (
                "back from menu exits the screen",
                SettingsStep::Menu,
                FlowEvent::BackRequested,
                SettingsStep::Menu,
                vec![FlowAction::ExitSettings],
            ),
            (
                "back from username discards form",
                SettingsStep::Username,
                FlowEvent::BackRequested,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
            (
                "back from password discards form",
                SettingsStep::Password,
                FlowEvent::BackRequested,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
            (
                "back from avatar discards form",
                SettingsStep::Avatar,
                FlowEvent::BackRequested,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
            (
                "back from status discards form",
                SettingsStep::Status,
                FlowEvent::BackRequested,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
            (
                "submit success returns to menu",
                SettingsStep::Username,
                FlowEvent::SubmitSucceeded,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
            (
                "submit success from status returns to menu",
                SettingsStep::Status,
                FlowEvent::SubmitSucceeded,
                SettingsStep::Menu,
                vec![FlowAction::DiscardForm, FlowAction::ResetScroll],
            ),
        ]
    }

    #[test]
    fn settings_flow_machine_table_driven() {
        for (name, from, event, expected_step, expected_actions) in cases() {
            let (next, actions) = SettingsFlowMachine::transition(from, event);
            assert_eq!(next, expected_step, "step mismatch: {}", name);
            assert_eq!(actions, expected_actions, "actions mismatch: {}", name);
        }
    }

    #[test]
    fn selecting_a_section_outside_the_menu_is_noop() {
        let (next, actions) = SettingsFlowMachine::transition(
            SettingsStep::Password,
            FlowEvent::SectionSelected(SettingsSection::Status),
        );

        assert_eq!(next, SettingsStep::Password);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_success_on_menu_is_noop() {
        let (next, actions) =
            SettingsFlowMachine::transition(SettingsStep::Menu, FlowEvent::SubmitSucceeded);

        assert_eq!(next, SettingsStep::Menu);
        assert!(actions.is_empty());
    }
}
