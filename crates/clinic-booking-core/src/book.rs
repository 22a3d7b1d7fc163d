//! The booked-appointment collection and its reconciliation operations.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Appointment, AppointmentPatch};

/// Lookup key for re-locating a record when the caller holds no id,
/// matching patient name and phone together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityKey {
    pub patient_name: String,
    pub phone: String,
}

impl IdentityKey {
    /// Key of an existing record.
    pub fn of(appointment: &Appointment) -> Self {
        Self {
            patient_name: appointment.patient_name.clone(),
            phone: appointment.phone.clone(),
        }
    }

    /// Whether a record carries this name and phone pair.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        appointment.patient_name == self.patient_name && appointment.phone == self.phone
    }
}

/// Result of an identity-keyed update. Anything but `Updated` leaves the
/// collection untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Exactly one record matched and was updated.
    Updated { id: String },
    /// No record carries the (name, phone) pair.
    NoMatch,
    /// Several records carry the pair; the target is ambiguous.
    Ambiguous { matches: usize },
}

/// Ordered collection of booked appointments. Insertion order is the
/// display order; there is no filtering, sorting or pagination.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly booked appointment.
    pub fn create(&mut self, appointment: Appointment) {
        info!(id = %appointment.id, doctor = %appointment.doctor, "appointment booked");
        self.appointments.push(appointment);
    }

    /// Merge edited fields into the record with the given id, preserving
    /// its id and status. Returns false when the id is unknown.
    pub fn update(&mut self, id: &str, patch: &AppointmentPatch) -> bool {
        match self.appointments.iter_mut().find(|a| a.id == id) {
            Some(appointment) => {
                appointment.apply_patch(patch);
                info!(id = %id, "appointment updated");
                true
            }
            None => false,
        }
    }

    /// Merge edited fields into the record matching the key's patient
    /// name and phone. The merge only happens on a unique match; zero or
    /// several matches leave every record as it was.
    pub fn update_by_identity(
        &mut self,
        key: &IdentityKey,
        patch: &AppointmentPatch,
    ) -> ReconcileOutcome {
        let matched: Vec<usize> = self
            .appointments
            .iter()
            .enumerate()
            .filter(|(_, appointment)| key.matches(appointment))
            .map(|(index, _)| index)
            .collect();

        match matched.as_slice() {
            [index] => {
                let appointment = &mut self.appointments[*index];
                appointment.apply_patch(patch);
                info!(id = %appointment.id, "appointment reconciled and updated");
                ReconcileOutcome::Updated {
                    id: appointment.id.clone(),
                }
            }
            [] => {
                debug!(patient = %key.patient_name, "edit payload matches no record");
                ReconcileOutcome::NoMatch
            }
            several => {
                debug!(
                    patient = %key.patient_name,
                    matches = several.len(),
                    "edit payload matches several records"
                );
                ReconcileOutcome::Ambiguous {
                    matches: several.len(),
                }
            }
        }
    }

    /// Remove the record with the given id outright. Returns whether a
    /// record was removed.
    pub fn cancel(&mut self, id: &str) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|appointment| appointment.id != id);
        let removed = self.appointments.len() < before;
        if removed {
            info!(id = %id, "appointment cancelled");
        }
        removed
    }

    /// The collection in insertion order.
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Record with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
