//! State machine behind the "I'm Interested" modal.
//!
//! States
//! ------
//! - **Closed**: nothing rendered (initial).
//! - **Editing**: form visible. Entered on open and after a failed submit.
//! - **Submitted**: acknowledgment visible. Only reachable through a 2xx.
//!
//! `close()` leads back to Closed from anywhere and wipes the form, the error
//! slot and the submitted flag in one step, so a reopened modal never shows
//! stale input.
//!
//! Each open starts a new *session*. A submission carries the session it was
//! started in; an outcome that arrives after the modal was closed is dropped
//! instead of flipping a fresh session into Submitted. The request itself is
//! never cancelled.
//!
//! This module is platform-agnostic and holds no Dioxus handles; the
//! component keeps one `InterestState` in a signal and forwards events.

use api::{Lead, SubmitError};
use dioxus::logger::tracing::{debug, error, info, warn};

/// Which branch of the overlay to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalView {
    Closed,
    Editing,
    Submitted,
}

/// Text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Pincode,
}

impl FormField {
    /// `name` attribute of the matching `<input>`.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Pincode => "pincode",
        }
    }
}

/// One input event, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Text(FormField, String),
    WhatsappUpdates(bool),
}

/// Current form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub pincode: String,
    pub whatsapp_updates: bool,
}

impl LeadForm {
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Text(FormField::Name, value) => self.name = value,
            FieldChange::Text(FormField::Phone, value) => self.phone = value,
            FieldChange::Text(FormField::Pincode, value) => self.pincode = value,
            FieldChange::WhatsappUpdates(checked) => self.whatsapp_updates = checked,
        }
    }

    /// Required text fields are non-empty. Content is not validated further.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.pincode.is_empty()
    }

    pub fn to_lead(&self) -> Lead {
        Lead {
            name: self.name.clone(),
            phone: self.phone.clone(),
            pincode: self.pincode.clone(),
            whatsapp_updates: self.whatsapp_updates,
        }
    }
}

/// User-facing error taxonomy. Only one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field was empty at submit time.
    Validation,
    /// The endpoint answered with a non-success status.
    Rejected,
    /// The request never completed.
    Transport,
}

impl FormError {
    /// Catalog key of the message.
    pub fn message_key(self) -> &'static str {
        match self {
            FormError::Validation => "error-validation",
            FormError::Rejected => "error-rejected",
            FormError::Transport => "error-transport",
        }
    }

    /// Localized message for the error slot.
    pub fn message(self) -> String {
        match self {
            FormError::Validation => crate::t!("error-validation"),
            FormError::Rejected => crate::t!("error-rejected"),
            FormError::Transport => crate::t!("error-transport"),
        }
    }
}

/// How a finished request ended, reduced to what the modal cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
    TransportFailed,
}

impl SubmitOutcome {
    /// Classify a sink result. Transport detail is logged here and nowhere
    /// else; the user only ever sees the generic message.
    pub fn from_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) if err.is_rejection() => {
                warn!("lead submission rejected: {err}");
                SubmitOutcome::Rejected
            }
            Err(err) => {
                error!("lead submission failed: {err}");
                SubmitOutcome::TransportFailed
            }
        }
    }
}

/// A validated submission ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub session: u64,
    pub lead: Lead,
}

/// Result of asking to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Send this lead, then report back with `finish_submit`.
    Send(SubmitTicket),
    /// Validation failed; the error slot now holds `FormError::Validation`.
    Invalid,
    /// A request from this session is still pending.
    Busy,
    /// Not in Editing; nothing to submit.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestState {
    open: bool,
    submitted: bool,
    error: Option<FormError>,
    form: LeadForm,
    in_flight: bool,
    session: u64,
}

impl InterestState {
    pub fn view(&self) -> ModalView {
        match (self.open, self.submitted) {
            (false, _) => ModalView::Closed,
            (true, false) => ModalView::Editing,
            (true, true) => ModalView::Submitted,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    /// True while this session's request is pending.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Show the overlay in Editing. Opening an open modal is a no-op.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.reset();
        self.open = true;
        self.session = self.session.wrapping_add(1);
        info!(session = self.session, "interest modal opened");
    }

    /// Hide the overlay and return every transient field to its default.
    pub fn close(&mut self) {
        if self.in_flight {
            debug!(session = self.session, "closing with a submission pending");
        }
        self.reset();
        info!(session = self.session, "interest modal closed");
    }

    fn reset(&mut self) {
        let session = self.session;
        *self = Self {
            session,
            ..Self::default()
        };
    }

    /// Apply an input event. Only meaningful while Editing.
    pub fn change(&mut self, change: FieldChange) {
        if self.view() != ModalView::Editing {
            return;
        }
        self.form.apply(change);
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.view() != ModalView::Editing {
            return SubmitAttempt::Ignored;
        }
        if self.in_flight {
            debug!(session = self.session, "submit ignored, request pending");
            return SubmitAttempt::Busy;
        }
        if !self.form.is_complete() {
            self.error = Some(FormError::Validation);
            return SubmitAttempt::Invalid;
        }

        self.in_flight = true;
        info!(session = self.session, "submitting lead");
        SubmitAttempt::Send(SubmitTicket {
            session: self.session,
            lead: self.form.to_lead(),
        })
    }

    /// Record the outcome of a request. Returns false when the outcome
    /// belongs to an earlier session and was dropped.
    pub fn finish_submit(&mut self, session: u64, outcome: SubmitOutcome) -> bool {
        if !self.open || session != self.session {
            debug!(
                stale = session,
                current = self.session,
                ?outcome,
                "dropping outcome from a closed session"
            );
            return false;
        }

        self.in_flight = false;
        match outcome {
            SubmitOutcome::Accepted => {
                self.error = None;
                self.submitted = true;
            }
            SubmitOutcome::Rejected => self.error = Some(FormError::Rejected),
            SubmitOutcome::TransportFailed => self.error = Some(FormError::Transport),
        }
        true
    }
}
