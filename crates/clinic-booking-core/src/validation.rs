//! Field validation for booking drafts.
//!
//! Every check is a pure function over the draft. Results come back as
//! data; nothing here panics or returns an error type. The error map is
//! recomputed in full on every pass, and the messages are the literal
//! text surfaced to the user.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};

use crate::models::{BookingDraft, Field};

/// Per-field error messages keyed by form field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Hard cap on the symptoms/notes text, in characters.
pub const SYMPTOMS_MAX_CHARS: usize = 200;

/// First bookable hour of the day (inclusive).
pub const CLINIC_OPENS_HOUR: u32 = 9;

/// Last bookable hour of the day (inclusive).
pub const CLINIC_CLOSES_HOUR: u32 = 17;

pub const ERR_NAME_REQUIRED: &str = "Patient name is required";
pub const ERR_PHONE_REQUIRED: &str = "Phone number is required";
pub const ERR_PHONE_FORMAT: &str = "Phone number must be 10 digits";
pub const ERR_EMAIL_FORMAT: &str = "Invalid email format";
pub const ERR_DOCTOR_REQUIRED: &str = "Please select a doctor";
pub const ERR_DEPARTMENT_REQUIRED: &str = "Please select a department";
pub const ERR_DATE_REQUIRED: &str = "Appointment date is required";
pub const ERR_TIME_REQUIRED: &str = "Appointment time is required";
pub const ERR_CONSENT_REQUIRED: &str = "You must agree to clinic policies";

/// True iff the text is exactly 10 ASCII decimal digits, no separators.
pub fn phone_is_valid(text: &str) -> bool {
    text.len() == 10 && text.bytes().all(|b| b.is_ascii_digit())
}

/// True for empty text (the field is optional) or a local@domain.tld
/// shape: one '@', at least one '.' after it with non-empty segments on
/// both sides, no whitespace anywhere.
pub fn email_is_valid(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// True iff the date is strictly after the current local date.
pub fn is_future_date(date: NaiveDate) -> bool {
    date > Local::now().date_naive()
}

/// True iff the time falls within clinic hours, both bounds inclusive.
pub fn within_clinic_hours(time: NaiveTime) -> bool {
    let secs = time.num_seconds_from_midnight();
    (CLINIC_OPENS_HOUR * 3600..=CLINIC_CLOSES_HOUR * 3600).contains(&secs)
}

/// Run every field check over the draft. The checks are independent and
/// unconditional; an empty map means the draft is valid.
pub fn validate(draft: &BookingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.patient_name.trim().is_empty() {
        errors.insert(Field::PatientName, ERR_NAME_REQUIRED.to_string());
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, ERR_PHONE_REQUIRED.to_string());
    } else if !phone_is_valid(&draft.phone) {
        errors.insert(Field::Phone, ERR_PHONE_FORMAT.to_string());
    }

    if !draft.email.is_empty() && !email_is_valid(&draft.email) {
        errors.insert(Field::Email, ERR_EMAIL_FORMAT.to_string());
    }

    if draft.doctor.is_empty() {
        errors.insert(Field::Doctor, ERR_DOCTOR_REQUIRED.to_string());
    }

    if draft.department.is_empty() {
        errors.insert(Field::Department, ERR_DEPARTMENT_REQUIRED.to_string());
    }

    if draft.date.is_none() {
        errors.insert(Field::Date, ERR_DATE_REQUIRED.to_string());
    }

    if draft.time.is_none() {
        errors.insert(Field::Time, ERR_TIME_REQUIRED.to_string());
    }

    if !draft.consent {
        errors.insert(Field::Consent, ERR_CONSENT_REQUIRED.to_string());
    }

    errors
}

/// Live submit-eligibility for the draft. Agrees with [`validate`] by
/// construction.
pub fn is_submittable(draft: &BookingDraft) -> bool {
    validate(draft).is_empty()
}
