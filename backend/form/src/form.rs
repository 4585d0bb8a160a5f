use contract::{
    SubmitResponse,
    messages::{FIX_FORM_ERRORS, SUBMIT_FAILED},
    timestamp_now,
};
use tracing::{debug, info, warn};

use crate::{
    notification::{Notification, NotificationKind},
    transport::{SubmitError, Transport},
    validate::{Field, FieldErrors, FormData, Validation, validate},
};

#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted(SubmitResponse),
    /// Nothing was sent.
    Invalid(FieldErrors),
    Failed(SubmitError),
    /// Already in flight or already submitted.
    Ignored,
}

pub struct FormClient<T> {
    transport: T,
    form_data: FormData,
    errors: FieldErrors,
    is_submitting: bool,
    is_submitted: bool,
    notification: Option<Notification>,
}

impl<T: Transport> FormClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            form_data: FormData::default(),
            errors: FieldErrors::new(),
            is_submitting: false,
            is_submitted: false,
            notification: None,
        }
    }

    /// Overwrites one field and clears its error without re-validating.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitted {
            return;
        }

        self.form_data.set(field, value.into());
        self.errors.remove(&field);
    }

    pub fn validate(&self) -> Validation {
        validate(&self.form_data)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting || self.is_submitted {
            return SubmitOutcome::Ignored;
        }

        let validation = self.validate();
        self.errors = validation.errors;

        if !self.errors.is_empty() {
            debug!("Form has {} invalid fields", self.errors.len());
            self.show_notification(FIX_FORM_ERRORS, NotificationKind::Error);

            return SubmitOutcome::Invalid(self.errors.clone());
        }

        self.is_submitting = true;

        let payload = self.form_data.payload(timestamp_now());
        debug!("Sending submission: {payload:?}");

        let result = self.transport.send(&payload).await;
        self.is_submitting = false;

        match result {
            Ok(response) => {
                info!("Submission saved");
                self.is_submitted = true;
                self.show_notification(response.message.clone(), NotificationKind::Success);

                SubmitOutcome::Submitted(response)
            }
            Err(e) => {
                warn!("Submission failed: {e}");
                self.show_notification(SUBMIT_FAILED, NotificationKind::Error);

                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn form_data(&self) -> &FormData {
        &self.form_data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// Current notification, `None` once it has been up for the full TTL.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|notification| !notification.is_expired())
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn show_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notification = Some(Notification::new(message, kind));
    }
}
