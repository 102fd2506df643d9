//! The registration form controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::FormConfig;
use crate::error::{SendError, SubmitError, TransitionError};
use crate::feedback;
use crate::field::FieldId;
use crate::lifecycle::{Lifecycle, SubmissionState};
use crate::rules::registration_rules;
use crate::submit::{SimulatedSubmitter, Submitter};
use crate::surface::{FormSurface, Tone};
use crate::validation::{FieldError, Validator};
use crate::values::FormValues;

const SENT_PATH: &[SubmissionState] = &[SubmissionState::Succeeded, SubmissionState::Idle];
const FAILED_PATH: &[SubmissionState] = &[SubmissionState::Failed, SubmissionState::Idle];
const CANCELLED_PATH: &[SubmissionState] = &[SubmissionState::Idle];

/// How a submit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the errors are shown on the form.
    Rejected(Vec<FieldError>),
    /// The submitter accepted the form and the fields were reset.
    Sent,
    /// The submitter reported a failure; values were kept.
    SendFailed(SendError),
    /// [`FormValidator::cancel`] interrupted the submission; values were kept.
    Cancelled,
}

/// Validates a registration form and drives its submission.
///
/// `FormValidator` is a cheap handle: clones share the same surface, state
/// and in-flight submission. Handlers never hold the surface lock across an
/// await, so input handling stays live while a submission is pending.
///
/// # Example
///
/// ```ignore
/// let form = DomForm::bind(Document::new(registration_markup()))?;
/// let validator = FormValidator::new(form, FormConfig::default());
///
/// validator.edit(FieldId::FullName, "Jane Doe");
/// // ...
/// match validator.submit().await? {
///     SubmitOutcome::Sent => println!("done"),
///     SubmitOutcome::Rejected(errors) => println!("{} errors", errors.len()),
///     _ => {}
/// }
/// ```
pub struct FormValidator<S> {
    surface: Arc<Mutex<S>>,
    rules: Arc<Validator>,
    config: Arc<FormConfig>,
    submitter: Arc<dyn Submitter>,
    lifecycle: Arc<Lifecycle>,
    inflight: Arc<Mutex<Option<CancellationToken>>>,
}

impl<S: FormSurface> FormValidator<S> {
    /// Create a validator with the registration rules and a simulated
    /// submitter using the configured latency.
    pub fn new(surface: S, config: FormConfig) -> Self {
        let submitter = SimulatedSubmitter::new(config.submit_latency);
        Self {
            surface: Arc::new(Mutex::new(surface)),
            rules: Arc::new(registration_rules(&config)),
            config: Arc::new(config),
            submitter: Arc::new(submitter),
            lifecycle: Arc::new(Lifecycle::new()),
            inflight: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the submitter.
    pub fn with_submitter(mut self, submitter: impl Submitter + 'static) -> Self {
        self.submitter = Arc::new(submitter);
        self
    }

    /// Replace the rule set.
    pub fn with_rules(mut self, rules: Validator) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current submission state.
    pub fn state(&self) -> SubmissionState {
        self.lifecycle.state()
    }

    /// Observe state transitions as `(from, to)`.
    ///
    /// Callbacks run without the surface lock held and may call
    /// [`with_surface`](Self::with_surface).
    pub fn on_transition<F>(&self, f: F)
    where
        F: Fn(SubmissionState, SubmissionState) + Send + Sync + 'static,
    {
        self.lifecycle.on_transition(f);
    }

    /// Run `f` with exclusive access to the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, S> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Event handlers
    // -------------------------------------------------------------------------

    /// A field was edited: clear its error and the aggregate message.
    pub fn handle_input(&self, field: FieldId) {
        let mut surface = self.lock();
        feedback::clear_error(&mut *surface, field);
        surface.set_message("");
    }

    /// Type `value` into a field and run the input handler.
    pub fn edit(&self, field: FieldId, value: &str) {
        self.lock().set_value(field, value);
        self.handle_input(field);
    }

    /// Cancel the in-flight submission, if any.
    pub fn cancel(&self) -> bool {
        let guard = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(token) => {
                log::info!("cancelling in-flight submission");
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Validate the form and, when it passes, submit it.
    ///
    /// Every field is checked and every failure is rendered. A second call
    /// while one is being handled fails with [`SubmitError::InFlight`]
    /// and leaves the form untouched.
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        self.lifecycle.begin().map_err(|state| {
            log::warn!("submit ignored while {state:?}");
            SubmitError::InFlight { state }
        })?;

        let msg = &self.config.messages;

        let (values, errors) = {
            let mut surface = self.lock();
            surface.set_message("");
            surface.set_message_tone(Tone::Neutral);
            feedback::clear_all(&mut *surface);

            let values = FormValues::snapshot(&*surface);
            let errors = self.rules.validate(&values).into_errors();
            for error in &errors {
                feedback::show_error(&mut *surface, error.field, &error.message);
            }

            if !errors.is_empty() {
                surface.set_message(&msg.form_invalid);
                surface.set_message_tone(Tone::Error);
                surface.announce_message();
            }
            (values, errors)
        };

        if !errors.is_empty() {
            log::info!("submit rejected with {} invalid field(s)", errors.len());
            self.settle(FAILED_PATH)?;
            return Ok(SubmitOutcome::Rejected(errors));
        }

        self.lifecycle.transition(SubmissionState::Sending)?;
        let label = {
            let mut surface = self.lock();
            let label = surface.submit_label();
            surface.set_submit_disabled(true);
            surface.set_submit_label(&msg.pending_label);
            surface.set_submit_sending(true);
            surface.set_message(&msg.pending);
            surface.set_message_tone(Tone::Neutral);
            label
        };

        let guard = SendingGuard {
            validator: self,
            label,
            settled: false,
        };
        let token = CancellationToken::new();
        self.set_inflight(Some(token.clone()));
        let sent = tokio::select! {
            _ = token.cancelled() => None,
            result = self.submitter.submit(&values) => Some(result),
        };
        let label = guard.settle();

        let (outcome, path) = {
            let mut surface = self.lock();
            restore_control(&mut *surface, &label);

            match sent {
                Some(Ok(())) => {
                    log::info!("submission sent");
                    surface.set_message(&msg.sent);
                    surface.set_message_tone(Tone::Success);
                    surface.reset_values();
                    feedback::clear_all(&mut *surface);
                    (SubmitOutcome::Sent, SENT_PATH)
                }
                Some(Err(err)) => {
                    log::warn!("submission failed: {err}");
                    surface.set_message(&msg.send_failed);
                    surface.set_message_tone(Tone::Error);
                    surface.announce_message();
                    (SubmitOutcome::SendFailed(err), FAILED_PATH)
                }
                None => {
                    log::info!("submission cancelled");
                    surface.set_message("");
                    (SubmitOutcome::Cancelled, CANCELLED_PATH)
                }
            }
        };

        self.settle(path)?;
        Ok(outcome)
    }

    fn settle(&self, path: &[SubmissionState]) -> Result<(), TransitionError> {
        for &next in path {
            self.lifecycle.transition(next)?;
        }
        Ok(())
    }

    fn set_inflight(&self, token: Option<CancellationToken>) {
        *self.inflight.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

/// Re-enable the submit control after a send.
fn restore_control<S: FormSurface + ?Sized>(surface: &mut S, label: &str) {
    surface.set_submit_disabled(false);
    // Markup whitespace around the captured label is not restored.
    surface.set_submit_label(label.trim());
    surface.set_submit_sending(false);
}

/// Held across the send await.
///
/// If the submit future is dropped there (an aborted task, a timeout or a
/// losing `select!` branch) the control is restored and the state returns
/// to `Idle`, as for a cancel.
struct SendingGuard<'a, S: FormSurface> {
    validator: &'a FormValidator<S>,
    label: String,
    settled: bool,
}

impl<S: FormSurface> SendingGuard<'_, S> {
    /// The await finished; hand back the saved label.
    fn settle(mut self) -> String {
        self.settled = true;
        self.validator.set_inflight(None);
        std::mem::take(&mut self.label)
    }
}

impl<S: FormSurface> Drop for SendingGuard<'_, S> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        log::warn!("submission dropped while sending");
        self.validator.set_inflight(None);
        {
            let mut surface = self.validator.lock();
            restore_control(&mut *surface, &self.label);
            surface.set_message("");
        }
        if let Err(err) = self.validator.lifecycle.transition(SubmissionState::Idle) {
            log::warn!("could not settle dropped submission: {err}");
        }
    }
}

impl<S: FormSurface + Send + 'static> FormValidator<S> {
    /// Run [`submit`](Self::submit) on a tokio task.
    pub fn spawn_submit(&self) -> JoinHandle<Result<SubmitOutcome, SubmitError>> {
        let this = self.clone();
        tokio::spawn(async move { this.submit().await })
    }
}

impl<S> Clone for FormValidator<S> {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            rules: Arc::clone(&self.rules),
            config: Arc::clone(&self.config),
            submitter: Arc::clone(&self.submitter),
            lifecycle: Arc::clone(&self.lifecycle),
            inflight: Arc::clone(&self.inflight),
        }
    }
}

impl<S> std::fmt::Debug for FormValidator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("state", &self.lifecycle.state())
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
