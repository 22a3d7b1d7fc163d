//! The in-progress booking draft for a single create/edit cycle.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::appointment::{Appointment, AppointmentPatch, AppointmentStatus, VisitType};

/// A single form field, used to key the error map and the touched set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PatientName,
    Phone,
    Email,
    Doctor,
    Department,
    Date,
    Time,
    VisitType,
    Symptoms,
    Consent,
}

impl Field {
    /// Every form field, in display order.
    pub const ALL: [Field; 10] = [
        Field::PatientName,
        Field::Phone,
        Field::Email,
        Field::Doctor,
        Field::Department,
        Field::Date,
        Field::Time,
        Field::VisitType,
        Field::Symptoms,
        Field::Consent,
    ];

    /// Stable field key for the display layer.
    pub fn name(&self) -> &'static str {
        match self {
            Field::PatientName => "patient_name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Doctor => "doctor",
            Field::Department => "department",
            Field::Date => "date",
            Field::Time => "time",
            Field::VisitType => "visit_type",
            Field::Symptoms => "symptoms",
            Field::Consent => "consent",
        }
    }
}

/// Mutable working copy of the booking form. Dates and times stay unset
/// until chosen; empty email/symptoms text means absent. The consent
/// flag exists only here, never on the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor: String,
    pub department: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub visit_type: VisitType,
    pub symptoms: String,
    pub consent: bool,
}

impl BookingDraft {
    /// Blank draft for a fresh booking.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Draft pre-filled from a stored record for an edit cycle. Consent
    /// starts granted; the record was already booked under policy.
    pub fn seeded(appointment: &Appointment) -> Self {
        Self {
            patient_name: appointment.patient_name.clone(),
            phone: appointment.phone.clone(),
            email: appointment.email.clone().unwrap_or_default(),
            doctor: appointment.doctor.clone(),
            department: appointment.department.clone(),
            date: Some(appointment.date),
            time: Some(appointment.time),
            visit_type: appointment.visit_type,
            symptoms: appointment.symptoms.clone().unwrap_or_default(),
            consent: true,
        }
    }

    /// Build the booked record for a validated Create draft.
    pub fn finalize_booking(&self, date: NaiveDate, time: NaiveTime) -> Appointment {
        let now = chrono::Utc::now().to_rfc3339();
        Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            patient_name: self.patient_name.clone(),
            phone: self.phone.clone(),
            email: none_if_empty(&self.email),
            doctor: self.doctor.clone(),
            department: self.department.clone(),
            date,
            time,
            visit_type: self.visit_type,
            symptoms: none_if_empty(&self.symptoms),
            status: AppointmentStatus::Booked,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Build the field-update payload for a validated Edit draft.
    pub fn finalize_patch(&self, date: NaiveDate, time: NaiveTime) -> AppointmentPatch {
        AppointmentPatch {
            patient_name: self.patient_name.clone(),
            phone: self.phone.clone(),
            email: none_if_empty(&self.email),
            doctor: self.doctor.clone(),
            department: self.department.clone(),
            date,
            time,
            visit_type: self.visit_type,
            symptoms: none_if_empty(&self.symptoms),
        }
    }
}

fn none_if_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
