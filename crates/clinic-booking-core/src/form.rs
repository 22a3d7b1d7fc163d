//! Form state controller for the booking form.
//!
//! Owns the draft for one create/edit cycle plus the touched set that
//! gates error display. Validation itself lives in [`crate::validation`];
//! this module decides when it runs and what a successful submit produces.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, AppointmentPatch, BookingDraft, Field, VisitType};
use crate::roster;
use crate::validation::{self, FieldErrors};

/// Which kind of cycle the form is driving. Chosen by the caller when
/// the controller is built and never changed implicitly mid-cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormMode {
    /// Fresh booking; the draft started blank.
    Create,
    /// Editing a stored record. The draft was seeded from it and the
    /// target id rides along, so submit never re-derives identity from
    /// mutable fields.
    Edit { target_id: String },
}

/// A field write rejected at input time. The draft keeps its previous
/// value; nothing is marked touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("appointment date must be after today")]
    DateNotInFuture,
    #[error("appointment time must fall within clinic hours (09:00-17:00)")]
    OutsideClinicHours,
    #[error("symptoms text is limited to 200 characters")]
    SymptomsTooLong,
}

/// Typed field writes accepted by [`FormController::update_field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    PatientName(String),
    Phone(String),
    Email(String),
    /// Also re-derives the department from the roster.
    Doctor(String),
    Department(String),
    Date(NaiveDate),
    Time(NaiveTime),
    VisitType(VisitType),
    Symptoms(String),
    Consent(bool),
}

/// Finalized value produced by a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A new appointment, ready to append to the book.
    Booked(Appointment),
    /// Field updates for the record the edit cycle targeted.
    Updated {
        target_id: String,
        patch: AppointmentPatch,
    },
}

/// State machine driving the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    mode: FormMode,
    draft: BookingDraft,
    touched: BTreeSet<Field>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::create()
    }
}

impl FormController {
    /// Controller for a fresh booking.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: BookingDraft::blank(),
            touched: BTreeSet::new(),
        }
    }

    /// Controller editing an existing record.
    pub fn edit(appointment: &Appointment) -> Self {
        Self {
            mode: FormMode::Edit {
                target_id: appointment.id.clone(),
            },
            draft: BookingDraft::seeded(appointment),
            touched: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Overwrite one draft field. Date, time and symptoms writes are
    /// gated by the booking rules; a rejected write leaves the draft
    /// unchanged.
    pub fn update_field(&mut self, update: FieldUpdate) -> Result<(), InputError> {
        match update {
            FieldUpdate::PatientName(value) => self.draft.patient_name = value,
            FieldUpdate::Phone(value) => self.draft.phone = value,
            FieldUpdate::Email(value) => self.draft.email = value,
            FieldUpdate::Doctor(name) => self.select_doctor(&name),
            FieldUpdate::Department(value) => self.draft.department = value,
            FieldUpdate::Date(date) => {
                if !validation::is_future_date(date) {
                    return Err(InputError::DateNotInFuture);
                }
                self.draft.date = Some(date);
            }
            FieldUpdate::Time(time) => {
                if !validation::within_clinic_hours(time) {
                    return Err(InputError::OutsideClinicHours);
                }
                self.draft.time = Some(time);
            }
            FieldUpdate::VisitType(visit_type) => self.draft.visit_type = visit_type,
            FieldUpdate::Symptoms(text) => {
                if text.chars().count() > validation::SYMPTOMS_MAX_CHARS {
                    return Err(InputError::SymptomsTooLong);
                }
                self.draft.symptoms = text;
            }
            FieldUpdate::Consent(granted) => self.draft.consent = granted,
        }
        Ok(())
    }

    /// Record a blur-equivalent interaction; errors for the field are
    /// surfaced from here on.
    pub fn mark_touched(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Set the doctor and derive the department from the roster. Names
    /// not on the roster keep the text but clear the department.
    pub fn select_doctor(&mut self, name: &str) {
        self.draft.doctor = name.to_string();
        self.draft.department = roster::department_for(name).unwrap_or("").to_string();
    }

    /// Live submit-eligibility, recomputed from the current draft.
    pub fn is_submittable(&self) -> bool {
        validation::is_submittable(&self.draft)
    }

    /// Full error map for the current draft.
    pub fn errors(&self) -> FieldErrors {
        validation::validate(&self.draft)
    }

    /// Errors for touched fields only; what the display layer surfaces.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors()
            .into_iter()
            .filter(|(field, _)| self.touched.contains(field))
            .collect()
    }

    /// Finalize the draft. Marks every field touched and validates; any
    /// error aborts with the full (now visible) error map. On success the
    /// finalized value is returned and the controller resets to a blank
    /// Create draft.
    pub fn submit(&mut self) -> Result<Submission, FieldErrors> {
        self.touched.extend(Field::ALL);

        let errors = validation::validate(&self.draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let (date, time) = match (self.draft.date, self.draft.time) {
            (Some(date), Some(time)) => (date, time),
            _ => return Err(errors),
        };

        let submission = match &self.mode {
            FormMode::Create => Submission::Booked(self.draft.finalize_booking(date, time)),
            FormMode::Edit { target_id } => Submission::Updated {
                target_id: target_id.clone(),
                patch: self.draft.finalize_patch(date, time),
            },
        };

        self.reset();
        Ok(submission)
    }

    /// Clear back to a blank Create draft: empty fields, nothing touched.
    pub fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.draft = BookingDraft::blank();
        self.touched.clear();
    }
}
