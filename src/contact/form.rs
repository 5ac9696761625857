use std::time::Duration;

use super::gateway::{GatewayError, TemplateParams};
use super::validate::{Field, FormErrors, FormState};

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Submit was attempted with empty or invalid fields. Nothing was sent.
    Invalid,
    /// The gateway was called and failed.
    Delivery(String),
}

impl SubmitFailure {
    pub fn banner(&self) -> &str {
        match self {
            SubmitFailure::Invalid => "Please fix the highlighted fields below.",
            SubmitFailure::Delivery(_) => {
                "Your message could not be sent. Please try again in a moment."
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(SubmitFailure),
}

/// Outcome of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Guard passed; send these parameters through the gateway exactly once,
    /// then report back with [`ContactForm::finish_submit`].
    Dispatch(TemplateParams),
    /// Guard failed; status is now an error and no call may be made.
    Rejected,
    /// A submission is already in flight.
    Ignored,
}

/// Identifies one success cycle so a late timer can't dismiss a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    errors: FormErrors,
    status: SubmissionStatus,
    cycle: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field: Field) -> &str {
        self.state.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Inputs and the submit control are disabled while this is true.
    pub fn is_locked(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Applies one edit. Returns `false` if the edit was refused because a
    /// submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.state.set(field, value);
        self.errors = FormErrors::from_state(&self.state);
        if matches!(self.status, SubmissionStatus::Error(_)) {
            self.status = SubmissionStatus::Idle;
        }
        true
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_locked() {
            log::debug!("contact form: submit ignored, already sending");
            return SubmitAttempt::Ignored;
        }
        if !self.errors.is_empty() || !self.state.is_complete() {
            log::debug!(
                "contact form: submit rejected ({} invalid fields)",
                self.errors.len()
            );
            self.status = SubmissionStatus::Error(SubmitFailure::Invalid);
            return SubmitAttempt::Rejected;
        }
        self.status = SubmissionStatus::Sending;
        SubmitAttempt::Dispatch(TemplateParams::from(&self.state))
    }

    /// Records the gateway's answer. Returns a ticket for scheduling the
    /// success dismissal, or `None` if nothing was in flight or it failed.
    pub fn finish_submit(&mut self, result: Result<(), GatewayError>) -> Option<DismissTicket> {
        if !self.is_locked() {
            log::warn!("contact form: gateway result arrived with nothing in flight");
            return None;
        }
        match result {
            Ok(()) => {
                self.state.clear();
                self.errors = FormErrors::default();
                self.status = SubmissionStatus::Success;
                self.cycle += 1;
                log::info!("contact form: message sent");
                Some(DismissTicket(self.cycle))
            }
            Err(e) => {
                log::warn!("contact form: delivery failed: {e}");
                self.status = SubmissionStatus::Error(SubmitFailure::Delivery(e.to_string()));
                None
            }
        }
    }

    /// Returns `true` if the form went back to idle.
    pub fn dismiss_success(&mut self, ticket: DismissTicket) -> bool {
        if self.status == SubmissionStatus::Success && ticket.0 == self.cycle {
            self.status = SubmissionStatus::Idle;
            true
        } else {
            false
        }
    }
}
