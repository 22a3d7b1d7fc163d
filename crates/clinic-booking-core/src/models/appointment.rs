//! Appointment records and the patch payload an edit produces.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Type of visit being booked.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum VisitType {
    #[default]
    New,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl VisitType {
    /// Display label, matching the booking form's radio options.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::New => "New",
            VisitType::FollowUp => "Follow-up",
        }
    }
}

/// Lifecycle status of a stored appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Booked,
    Cancelled,
}

impl AppointmentStatus {
    /// Display label for the status chip.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "Booked",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// A booked appointment as stored and displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Opaque identifier, generated at booking time. Immutable for the
    /// record's lifetime.
    pub id: String,
    /// Patient name
    pub patient_name: String,
    /// Contact phone, exactly 10 decimal digits
    pub phone: String,
    /// Optional contact email
    pub email: Option<String>,
    /// Doctor display name from the roster
    pub doctor: String,
    /// Department derived from the doctor selection
    pub department: String,
    /// Appointment date, strictly after the booking date
    pub date: NaiveDate,
    /// Appointment time within clinic hours
    pub time: NaiveTime,
    /// New visit or follow-up
    pub visit_type: VisitType,
    /// Optional symptoms/notes text, at most 200 characters
    pub symptoms: Option<String>,
    /// Lifecycle status
    pub status: AppointmentStatus,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// Field updates produced by an edit submit. Merged onto an existing
/// record; the record's id and status are never part of a patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentPatch {
    pub patient_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub doctor: String,
    pub department: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub visit_type: VisitType,
    pub symptoms: Option<String>,
}

impl Appointment {
    /// Merge edited fields into this record. The id and status survive
    /// unchanged; updated_at is touched.
    pub fn apply_patch(&mut self, patch: &AppointmentPatch) {
        self.patient_name = patch.patient_name.clone();
        self.phone = patch.phone.clone();
        self.email = patch.email.clone();
        self.doctor = patch.doctor.clone();
        self.department = patch.department.clone();
        self.date = patch.date;
        self.time = patch.time;
        self.visit_type = patch.visit_type;
        self.symptoms = patch.symptoms.clone();
        self.touch();
    }

    /// Touch the updated_at timestamp.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}
