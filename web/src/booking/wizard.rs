use shared_types::NewBooking;

use super::validate::{validate_booking, FieldError};

/// The four stations of the booking flow. `Success` is terminal; the only
/// way out is recreating the wizard (navigating away and back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Service,
    DateTime,
    Contact,
    Success,
}

/// In-progress form state, owned by the wizard for one session. Discarded
/// on restart, never partially persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub service_type: String,
    pub property_type: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub terms_accepted: bool,
}

impl BookingDraft {
    /// Wire payload for the collector. The terms checkbox is a client-side
    /// gate and is stripped here.
    pub fn to_submission(&self) -> NewBooking {
        NewBooking {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            service_type: self.service_type.clone(),
            property_type: self.property_type.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.clone())
            },
        }
    }
}

/// Step-level rejection raised when a transition guard fails.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardNotice {
    /// "Missing information" toast for the Service and DateTime gates.
    MissingInformation(&'static str),
    /// Contact-step validation failed; per-field messages are attached
    /// to the wizard.
    InvalidFields,
    /// A submission is already in flight.
    SubmissionPending,
}

impl WizardNotice {
    pub fn message(&self) -> &'static str {
        match self {
            WizardNotice::MissingInformation(msg) => msg,
            WizardNotice::InvalidFields => "Please correct the highlighted fields.",
            WizardNotice::SubmissionPending => "Your booking is already being submitted.",
        }
    }
}

/// Linear four-step booking flow with per-step guards. Transitions move
/// one step at a time; `Success` is reached only through a completed
/// submission from `Contact`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWizard {
    step: WizardStep,
    pub draft: BookingDraft,
    submitting: bool,
    field_errors: Vec<FieldError>,
    submit_error: Option<String>,
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingWizard {
    pub fn new() -> Self {
        BookingWizard {
            step: WizardStep::Service,
            draft: BookingDraft::default(),
            submitting: false,
            field_errors: Vec::new(),
            submit_error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Advance one step, gated on the current step's required selections.
    /// On rejection the state is unchanged and a user-facing notice is
    /// returned. Advancing out of `Contact` goes through
    /// [`BookingWizard::begin_submission`] instead.
    pub fn try_advance(&mut self) -> Result<WizardStep, WizardNotice> {
        match self.step {
            WizardStep::Service => {
                if self.draft.service_type.is_empty() || self.draft.property_type.is_empty() {
                    return Err(WizardNotice::MissingInformation(
                        "Please select a service type and property type to continue.",
                    ));
                }
                self.step = WizardStep::DateTime;
            }
            WizardStep::DateTime => {
                if self.draft.date.is_empty() || self.draft.time.is_empty() {
                    return Err(WizardNotice::MissingInformation(
                        "Please select a date and time to continue.",
                    ));
                }
                self.step = WizardStep::Contact;
            }
            WizardStep::Contact | WizardStep::Success => {}
        }
        Ok(self.step)
    }

    /// One step back. Never below `Service`, never out of `Success`.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Service | WizardStep::Success => self.step,
            WizardStep::DateTime => WizardStep::Service,
            WizardStep::Contact => WizardStep::DateTime,
        };
    }

    /// Validate the whole form and hand back the wire payload. Exactly one
    /// submission may be in flight; until it is resolved via
    /// `submission_succeeded`/`submission_failed`, further calls are
    /// rejected.
    pub fn begin_submission(&mut self) -> Result<NewBooking, WizardNotice> {
        if self.step != WizardStep::Contact {
            return Err(WizardNotice::MissingInformation(
                "Please complete the previous steps first.",
            ));
        }
        if self.submitting {
            return Err(WizardNotice::SubmissionPending);
        }

        self.field_errors = validate_booking(&self.draft);
        if !self.field_errors.is_empty() {
            return Err(WizardNotice::InvalidFields);
        }

        self.submitting = true;
        self.submit_error = None;
        Ok(self.draft.to_submission())
    }

    /// One-way transition into `Success`. The draft (date, time, email) is
    /// retained for the confirmation display.
    pub fn submission_succeeded(&mut self) {
        self.submitting = false;
        self.step = WizardStep::Success;
    }

    /// Stay in `Contact` with a one-shot notice; the user may resubmit.
    pub fn submission_failed(&mut self, reason: impl Into<String>) {
        self.submitting = false;
        self.submit_error = Some(reason.into());
    }
}
