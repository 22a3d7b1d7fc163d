//! Session-level controller tying the form to the appointment book.
//!
//! The single owner of the collection and the transient UI flags. The
//! presentation layer renders from the read accessors and forwards every
//! user event into one of the operations here; it holds no state of its
//! own.

use tracing::instrument;

use crate::book::AppointmentBook;
use crate::form::{FormController, Submission};
use crate::models::Appointment;
use crate::validation::FieldErrors;

/// Notification shown after a successful booking.
pub const MSG_BOOKED: &str = "Appointment booked successfully!";
/// Notification shown after a successful edit.
pub const MSG_UPDATED: &str = "Appointment updated successfully!";
/// Notification shown after a confirmed cancellation.
pub const MSG_CANCELLED: &str = "Appointment cancelled";

/// What a submit did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was appended.
    Created { id: String },
    /// An existing record was updated in place.
    Updated { id: String },
    /// The edit's target no longer exists; the collection is unchanged.
    Miss,
}

/// One user's booking session: the appointment book, the active form,
/// the transient one-line notification and the pending cancel prompt.
#[derive(Debug, Default)]
pub struct Session {
    book: AppointmentBook,
    form: FormController,
    notification: Option<String>,
    pending_cancel: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The booked appointments, in display order.
    pub fn appointments(&self) -> &[Appointment] {
        self.book.list()
    }

    pub fn book(&self) -> &AppointmentBook {
        &self.book
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Mutable form access for forwarding field edits and blurs.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// Swap the form into an Edit cycle for the given record, seeding
    /// the draft from it. Returns false and leaves the form alone when
    /// the id is unknown.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.book.get(id) {
            Some(appointment) => {
                self.form = FormController::edit(appointment);
                true
            }
            None => false,
        }
    }

    /// Submit the form and apply the finalized value to the book. A
    /// Create submission appends; an Edit submission merges into its
    /// target by id. Field errors abort before the book is touched.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<SubmitOutcome, FieldErrors> {
        match self.form.submit()? {
            Submission::Booked(appointment) => {
                let id = appointment.id.clone();
                self.book.create(appointment);
                self.notification = Some(MSG_BOOKED.to_string());
                Ok(SubmitOutcome::Created { id })
            }
            Submission::Updated { target_id, patch } => {
                if self.book.update(&target_id, &patch) {
                    self.notification = Some(MSG_UPDATED.to_string());
                    Ok(SubmitOutcome::Updated { id: target_id })
                } else {
                    Ok(SubmitOutcome::Miss)
                }
            }
        }
    }

    /// Stage a cancellation; the record is only removed once the user
    /// confirms.
    pub fn request_cancel(&mut self, id: &str) {
        self.pending_cancel = Some(id.to_string());
    }

    /// Id awaiting cancel confirmation, if any.
    pub fn pending_cancel(&self) -> Option<&str> {
        self.pending_cancel.as_deref()
    }

    /// Execute the staged cancellation. Returns whether a record was
    /// removed.
    #[instrument(skip(self))]
    pub fn confirm_cancel(&mut self) -> bool {
        let Some(id) = self.pending_cancel.take() else {
            return false;
        };
        let removed = self.book.cancel(&id);
        if removed {
            self.notification = Some(MSG_CANCELLED.to_string());
        }
        removed
    }

    /// Drop the staged cancellation without touching the book.
    pub fn dismiss_cancel(&mut self) {
        self.pending_cancel = None;
    }

    /// Current notification, if one is pending display.
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Take the transient notification, clearing it.
    pub fn take_notification(&mut self) -> Option<String> {
        self.notification.take()
    }
}
