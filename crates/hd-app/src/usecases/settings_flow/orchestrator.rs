//! Settings flow orchestrator.
//!
//! Coordinates the step state machine, the transient form, and the account
//! use cases. Domain actions coming out of the machine are executed here;
//! UI actions (scroll reset, leaving the screen) are returned to the
//! embedding layer as data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info_span, warn, Instrument};

use hd_core::ports::{Alert, AuthError, FeedbackPort, ImagePickerPort, PickedImage};
use hd_core::profile::{ProfileCache, Status};
use hd_core::settings_flow::{
    FlowAction, FlowEvent, FormState, SettingsFlowMachine, SettingsSection, SettingsStep,
    UsernameAvailability,
};
use hd_core::validation::{
    password, validate_confirmation, validate_password, validate_username, FieldError,
};

use crate::deps::AccountDeps;
use crate::usecases::account::{
    CheckUsernameAvailability, Logout, UpdateAvatar, UpdateUserPassword, UpdateUserStatus,
    UpdateUsername,
};

const MSG_USERNAME_UPDATED: &str = "Your username has been updated.";
const MSG_PASSWORD_UPDATED: &str = "Your password has been updated.";
const MSG_AVATAR_UPDATED: &str = "Your profile picture has been updated.";
const MSG_STATUS_UPDATED: &str = "Your status has been updated.";

/// Drives one settings screen instance.
///
/// At most one mutation is in flight at a time: submits while busy are
/// rejected with a warning, matching the disabled save button. Navigation
/// does not cancel an in-flight mutation; its result still reconciles the
/// cache when it lands.
pub struct SettingsFlow {
    step: Mutex<SettingsStep>,
    form: Mutex<FormState>,
    availability: Mutex<UsernameAvailability>,
    staged_image: Mutex<Option<PickedImage>>,
    selected_status: Mutex<Option<Status>>,
    submitting: AtomicBool,

    update_username: UpdateUsername,
    update_password: UpdateUserPassword,
    update_avatar: UpdateAvatar,
    update_status: UpdateUserStatus,
    availability_check: CheckUsernameAvailability,
    end_session: Logout,

    picker: Arc<dyn ImagePickerPort>,
    feedback: Arc<dyn FeedbackPort>,
    cache: Arc<ProfileCache>,
}

impl SettingsFlow {
    pub fn new(deps: AccountDeps) -> Self {
        let AccountDeps {
            auth,
            storage,
            rows,
            picker,
            feedback,
            cache,
        } = deps;

        Self {
            step: Mutex::new(SettingsStep::Menu),
            form: Mutex::new(FormState::new()),
            availability: Mutex::new(UsernameAvailability::Undetermined),
            staged_image: Mutex::new(None),
            selected_status: Mutex::new(None),
            submitting: AtomicBool::new(false),

            update_username: UpdateUsername::new(auth.clone(), cache.clone()),
            update_password: UpdateUserPassword::new(auth.clone()),
            update_avatar: UpdateAvatar::new(
                auth.clone(),
                storage,
                rows.clone(),
                cache.clone(),
            ),
            update_status: UpdateUserStatus::new(rows, cache.clone()),
            availability_check: CheckUsernameAvailability::new(auth.clone(), cache.clone()),
            end_session: Logout::new(auth, cache.clone()),

            picker,
            feedback,
            cache,
        }
    }

    // ===== Observed state =====

    pub async fn current_step(&self) -> SettingsStep {
        *self.step.lock().await
    }

    pub async fn form_state(&self) -> FormState {
        self.form.lock().await.clone()
    }

    pub async fn availability(&self) -> UsernameAvailability {
        *self.availability.lock().await
    }

    pub async fn selected_status(&self) -> Option<Status> {
        *self.selected_status.lock().await
    }

    /// Whether a mutation is in flight; the save button is disabled while set.
    pub fn is_busy(&self) -> bool {
        self.submitting.load(Ordering::SeqCst)
    }

    /// Advisory strength tier for the current password input.
    pub async fn password_strength(&self) -> Option<password::PasswordStrength> {
        password::strength(&self.form.lock().await.password)
    }

    // ===== Navigation =====

    /// The user tapped a menu entry.
    pub async fn select_section(&self, section: SettingsSection) -> Vec<FlowAction> {
        self.dispatch(FlowEvent::SectionSelected(section)).await
    }

    /// The user tapped the back affordance.
    pub async fn back(&self) -> Vec<FlowAction> {
        self.dispatch(FlowEvent::BackRequested).await
    }

    // ===== Form input =====

    /// A keystroke in the username field. Resets the availability indicator
    /// so a stale verdict is never shown against new input.
    pub async fn username_input_changed(&self, value: &str) {
        self.form.lock().await.username = value.to_string();
        *self.availability.lock().await = UsernameAvailability::Undetermined;
    }

    pub async fn password_input_changed(&self, value: &str) {
        self.form.lock().await.password = value.to_string();
    }

    pub async fn confirm_password_input_changed(&self, value: &str) {
        self.form.lock().await.confirm_password = value.to_string();
    }

    /// Submit-like refresh of the availability indicator (not per keystroke).
    ///
    /// Runs only when the candidate passes validation; the indicator stays
    /// undetermined otherwise.
    pub async fn refresh_availability(&self) {
        let candidate = self.form.lock().await.username.clone();
        if validate_username(&candidate).is_err() {
            return;
        }

        match self.availability_check.execute(&candidate).await {
            Ok(verdict) => *self.availability.lock().await = verdict,
            Err(err) => {
                warn!(%err, "availability check failed");
                *self.availability.lock().await = UsernameAvailability::Undetermined;
            }
        }
    }

    // ===== Submits =====

    /// Validate and save the username field.
    ///
    /// Validation failures come back as field errors and never reach the
    /// network; mutation outcomes surface through the feedback channel.
    pub async fn submit_username(&self) -> Result<Vec<FlowAction>, FieldError> {
        let Some(_guard) = self.try_begin_submit() else {
            return Ok(vec![]);
        };

        let username = self.form.lock().await.username.clone();
        validate_username(&username)?;

        match self.update_username.execute(&username).await {
            Ok(()) => {
                self.feedback.show_alert(Alert::success(MSG_USERNAME_UPDATED));
                Ok(self.dispatch(FlowEvent::SubmitSucceeded).await)
            }
            Err(err) => {
                self.feedback.show_alert(Alert::backend_error(&err));
                Ok(vec![])
            }
        }
    }

    /// Validate and save the password fields.
    pub async fn submit_password(&self) -> Result<Vec<FlowAction>, FieldError> {
        let Some(_guard) = self.try_begin_submit() else {
            return Ok(vec![]);
        };

        let (password, confirm) = {
            let form = self.form.lock().await;
            (form.password.clone(), form.confirm_password.clone())
        };
        validate_password(&password)?;
        validate_confirmation(&password, &confirm)?;

        match self.update_password.execute(&password).await {
            Ok(()) => {
                self.feedback.show_alert(Alert::success(MSG_PASSWORD_UPDATED));
                Ok(self.dispatch(FlowEvent::SubmitSucceeded).await)
            }
            Err(err) => {
                self.feedback.show_alert(Alert::backend_error(&err));
                Ok(vec![])
            }
        }
    }

    /// Open the image picker and stage the chosen image for saving.
    ///
    /// Returns false when the user canceled; the stage is left untouched.
    pub async fn pick_avatar(&self) -> anyhow::Result<bool> {
        match self.picker.pick_image().await? {
            Some(image) => {
                *self.staged_image.lock().await = Some(image);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Upload the staged image as the new profile picture.
    pub async fn save_avatar(&self) -> Vec<FlowAction> {
        let Some(_guard) = self.try_begin_submit() else {
            return vec![];
        };

        let staged = self.staged_image.lock().await.clone();
        let Some(image) = staged else {
            warn!("no image staged, ignoring avatar save");
            return vec![];
        };

        match self.update_avatar.execute(image).await {
            Ok(_url) => {
                self.feedback.show_alert(Alert::success(MSG_AVATAR_UPDATED));
                self.dispatch(FlowEvent::SubmitSucceeded).await
            }
            Err(err) => {
                self.feedback.show_alert(Alert::backend_error(&err));
                vec![]
            }
        }
    }

    /// Highlight a status option without saving it yet.
    pub async fn select_status(&self, status: Status) {
        *self.selected_status.lock().await = Some(status);
    }

    /// Save the highlighted status (or re-save the current one).
    pub async fn save_status(&self) -> Vec<FlowAction> {
        let Some(_guard) = self.try_begin_submit() else {
            return vec![];
        };

        let selected = *self.selected_status.lock().await;
        let status = match selected {
            Some(status) => status,
            None => match self.cache.get().await {
                Some(profile) => profile.status,
                None => {
                    self.feedback
                        .show_alert(Alert::backend_error(&AuthError::NotAuthenticated));
                    return vec![];
                }
            },
        };

        match self.update_status.execute(status).await {
            Ok(()) => {
                self.feedback.show_alert(Alert::success(MSG_STATUS_UPDATED));
                self.dispatch(FlowEvent::SubmitSucceeded).await
            }
            Err(err) => {
                self.feedback.show_alert(Alert::backend_error(&err));
                vec![]
            }
        }
    }

    /// End the session from the menu's logout entry.
    pub async fn logout(&self) -> Vec<FlowAction> {
        match self.end_session.execute().await {
            Ok(()) => vec![FlowAction::ExitSettings],
            Err(err) => {
                warn!(%err, "logout failed");
                self.feedback.show_alert(Alert::backend_error(&err));
                vec![]
            }
        }
    }

    // ===== Internals =====

    async fn dispatch(&self, event: FlowEvent) -> Vec<FlowAction> {
        let span = info_span!("usecase.settings_flow.dispatch", event = ?event);
        async {
            let current = *self.step.lock().await;
            let (next, actions) = SettingsFlowMachine::transition(current, event);
            let effects = self.execute_actions(actions).await;
            *self.step.lock().await = next;
            effects
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<FlowAction>) -> Vec<FlowAction> {
        let mut effects = Vec::new();
        for action in actions {
            match action {
                FlowAction::SeedUsernameForm => {
                    if let Some(profile) = self.cache.get().await {
                        self.form.lock().await.seed_username(&profile.username);
                    }
                }
                FlowAction::CheckAvailability => self.refresh_availability().await,
                FlowAction::DiscardForm => {
                    self.form.lock().await.clear();
                    *self.availability.lock().await = UsernameAvailability::Undetermined;
                    *self.staged_image.lock().await = None;
                    *self.selected_status.lock().await = None;
                }
                FlowAction::ResetScroll | FlowAction::ExitSettings => effects.push(action),
            }
        }
        effects
    }

    fn try_begin_submit(&self) -> Option<SubmitGuard<'_>> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            Some(SubmitGuard(&self.submitting))
        } else {
            warn!("submit ignored, a mutation is already in flight");
            None
        }
    }
}

/// Clears the busy flag on every exit path, field errors included.
struct SubmitGuard<'a>(&'a AtomicBool);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
