use std::{sync::Arc, time::Duration};

use shared::domain::{FieldName, FormFields, ValidationErrors};
use tokio::sync::{watch, Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::{
    deferred::DeferredTask,
    sender::{ContactSender, SendError},
};

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// The send failed; fields are kept so the user can retry.
    Failed(String),
}

impl SubmissionStatus {
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, SubmissionStatus::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(ValidationErrors),
    /// A submission was already in flight; nothing was validated or sent.
    Busy,
    Failed(SendError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
}

#[derive(Debug, Default)]
struct FormState {
    fields: FormFields,
    errors: ValidationErrors,
}

/// The outstanding success reset. `torn_down` lives under the same lock so
/// a reset can never be stored after teardown has looked for it.
#[derive(Debug, Default)]
struct ResetSlot {
    task: Option<DeferredTask>,
    torn_down: bool,
}

pub struct ContactFormController<S: ContactSender> {
    sender: S,
    state: RwLock<FormState>,
    status: Arc<watch::Sender<SubmissionStatus>>,
    success_window: Duration,
    pending_reset: Mutex<ResetSlot>,
}

impl<S: ContactSender> ContactFormController<S> {
    pub fn new(sender: S) -> Self {
        Self::with_success_window(sender, SUCCESS_DISPLAY_WINDOW)
    }

    pub fn with_success_window(sender: S, success_window: Duration) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            sender,
            state: RwLock::new(FormState::default()),
            status: Arc::new(status),
            success_window,
            pending_reset: Mutex::new(ResetSlot::default()),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    pub async fn snapshot(&self) -> FormSnapshot {
        let state = self.state.read().await;
        FormSnapshot {
            fields: state.fields.clone(),
            errors: state.errors.clone(),
            status: self.status(),
        }
    }

    pub async fn fields(&self) -> FormFields {
        self.state.read().await.fields.clone()
    }

    pub async fn errors(&self) -> ValidationErrors {
        self.state.read().await.errors.clone()
    }

    /// Overwrites one field and drops any error recorded for it without
    /// re-validating. Accepted in every status.
    pub async fn update_field(&self, field: FieldName, value: impl Into<String>) {
        let mut state = self.state.write().await;
        state.fields.set(field, value);
        state.errors.remove(field);
    }

    /// Replaces the error mapping with a fresh one computed from the
    /// current fields. Returns whether the form is valid.
    pub async fn validate(&self) -> bool {
        let mut state = self.state.write().await;
        state.errors = state.fields.validate();
        state.errors.is_empty()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let accepting = self.status.borrow().accepts_submit();
        if !accepting {
            return SubmitOutcome::Busy;
        }

        let fields = {
            let mut state = self.state.write().await;
            state.errors = state.fields.validate();
            if !state.errors.is_empty() {
                debug!(errors = state.errors.len(), "contact form failed validation");
                return SubmitOutcome::Invalid(state.errors.clone());
            }
            state.fields.clone()
        };

        let claimed = self.status.send_if_modified(|status| {
            if status.accepts_submit() {
                *status = SubmissionStatus::Submitting;
                true
            } else {
                false
            }
        });
        if !claimed {
            return SubmitOutcome::Busy;
        }
        self.cancel_pending_reset().await;

        info!(service = %fields.service, "submitting contact form");
        match self.sender.send(&fields).await {
            Ok(()) => {
                self.state.write().await.fields = FormFields::default();
                self.status.send_replace(SubmissionStatus::Succeeded);
                self.schedule_reset().await;
                info!("contact form sent");
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact form send failed");
                self.status
                    .send_replace(SubmissionStatus::Failed(err.to_string()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Acknowledges a failed send and returns the form to idle.
    pub fn dismiss_failure(&self) -> bool {
        self.status.send_if_modified(|status| {
            if matches!(status, SubmissionStatus::Failed(_)) {
                *status = SubmissionStatus::Idle;
                true
            } else {
                false
            }
        })
    }

    /// Defuses the pending success reset. Call when the view goes away;
    /// dropping the controller has the same effect.
    pub async fn teardown(&self) {
        let mut slot = self.pending_reset.lock().await;
        slot.torn_down = true;
        if let Some(task) = slot.task.take() {
            task.cancel();
        }
    }

    async fn cancel_pending_reset(&self) {
        if let Some(task) = self.pending_reset.lock().await.task.take() {
            task.cancel();
        }
    }

    async fn schedule_reset(&self) {
        let mut slot = self.pending_reset.lock().await;
        if slot.torn_down {
            debug!("controller torn down, success banner stays up");
            return;
        }

        let status = self.status.clone();
        let task = DeferredTask::after(self.success_window, async move {
            status.send_if_modified(|status| {
                if *status == SubmissionStatus::Succeeded {
                    *status = SubmissionStatus::Idle;
                    true
                } else {
                    false
                }
            });
        });
        slot.task = Some(task);
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
