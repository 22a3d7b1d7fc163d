//! End-to-end booking flow tests: create, edit, reconcile, cancel.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use clinic_booking_core::{
    AppointmentBook, AppointmentStatus, BookingDraft, FieldUpdate, FormMode, IdentityKey,
    ReconcileOutcome, Session, SubmitOutcome,
};

fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn fill_jane_doe(session: &mut Session) {
    let form = session.form_mut();
    form.update_field(FieldUpdate::PatientName("Jane Doe".into())).unwrap();
    form.update_field(FieldUpdate::Phone("9876543210".into())).unwrap();
    form.update_field(FieldUpdate::Doctor("Dr. Rao – Cardiology".into())).unwrap();
    form.update_field(FieldUpdate::Date(tomorrow())).unwrap();
    form.update_field(FieldUpdate::Time(at(10, 0))).unwrap();
    form.update_field(FieldUpdate::Consent(true)).unwrap();
}

#[test]
fn create_flow_books_and_resets_the_form() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    assert_eq!(session.form().draft().department, "Cardiology");
    assert!(session.form().is_submittable());

    let outcome = session.submit().unwrap();
    let id = match outcome {
        SubmitOutcome::Created { id } => id,
        other => panic!("expected a creation, got {:?}", other),
    };

    assert_eq!(session.appointments().len(), 1);
    let appointment = &session.appointments()[0];
    assert!(!appointment.id.is_empty());
    assert_eq!(appointment.id, id);
    assert_eq!(appointment.status, AppointmentStatus::Booked);
    assert_eq!(appointment.patient_name, "Jane Doe");
    assert_eq!(appointment.phone, "9876543210");
    assert_eq!(appointment.department, "Cardiology");
    assert_eq!(appointment.time, at(10, 0));

    // Form is back to a blank Create draft; the notification is staged.
    assert_eq!(session.form().mode(), &FormMode::Create);
    assert_eq!(session.form().draft(), &BookingDraft::blank());
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Appointment booked successfully!")
    );
}

#[test]
fn invalid_submit_leaves_the_collection_alone() {
    let mut session = Session::new();
    session
        .form_mut()
        .update_field(FieldUpdate::PatientName("Jane Doe".into()))
        .unwrap();

    let errors = session.submit().unwrap_err();
    assert!(!errors.is_empty());
    assert!(session.appointments().is_empty());
    assert!(session.take_notification().is_none());
}

#[test]
fn edit_flow_updates_in_place() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    session.submit().unwrap();
    let original = session.appointments()[0].clone();

    assert!(session.begin_edit(&original.id));
    // Seeded draft carries the record's fields and a granted consent.
    assert_eq!(session.form().draft().patient_name, "Jane Doe");
    assert!(session.form().draft().consent);

    session
        .form_mut()
        .update_field(FieldUpdate::Time(at(14, 0)))
        .unwrap();
    let outcome = session.submit().unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated { id: original.id.clone() });

    assert_eq!(session.appointments().len(), 1);
    let updated = &session.appointments()[0];
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.status, original.status);
    assert_eq!(updated.time, at(14, 0));
    assert_eq!(
        session.take_notification().as_deref(),
        Some("Appointment updated successfully!")
    );
}

#[test]
fn edit_whose_target_vanished_is_a_miss() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    session.submit().unwrap();
    let id = session.appointments()[0].id.clone();

    assert!(session.begin_edit(&id));
    session.request_cancel(&id);
    assert!(session.confirm_cancel());
    session.take_notification();

    session
        .form_mut()
        .update_field(FieldUpdate::Time(at(14, 0)))
        .unwrap();
    let outcome = session.submit().unwrap();
    assert_eq!(outcome, SubmitOutcome::Miss);
    assert!(session.appointments().is_empty());
    assert!(session.take_notification().is_none());
}

#[test]
fn identity_reconciliation_updates_the_matching_record() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    session.submit().unwrap();
    let original = session.appointments()[0].clone();

    // An edit payload arriving without an id is matched on (name, phone).
    let mut draft = BookingDraft::seeded(&original);
    draft.time = Some(at(14, 0));
    let patch = draft.finalize_patch(original.date, at(14, 0));
    let key = IdentityKey {
        patient_name: "Jane Doe".into(),
        phone: "9876543210".into(),
    };

    let mut book = AppointmentBook::new();
    book.create(original.clone());
    let outcome = book.update_by_identity(&key, &patch);
    assert_eq!(outcome, ReconcileOutcome::Updated { id: original.id.clone() });

    let updated = book.get(&original.id).unwrap();
    assert_eq!(updated.status, original.status);
    assert_eq!(updated.time, at(14, 0));
}

#[test]
fn identity_reconciliation_miss_leaves_collection_unchanged() {
    let mut book = AppointmentBook::new();
    let draft = BookingDraft {
        patient_name: "Jane Doe".into(),
        phone: "9876543210".into(),
        doctor: "Dr. Rao – Cardiology".into(),
        department: "Cardiology".into(),
        consent: true,
        ..BookingDraft::blank()
    };
    let patch = draft.finalize_patch(tomorrow(), at(14, 0));
    let key = IdentityKey {
        patient_name: "Jane Doe".into(),
        phone: "9876543210".into(),
    };

    assert_eq!(book.update_by_identity(&key, &patch), ReconcileOutcome::NoMatch);
    assert!(book.is_empty());
}

#[test]
fn cancel_flow_removes_exactly_one_record() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    session.submit().unwrap();
    session.take_notification();

    fill_jane_doe(&mut session);
    session
        .form_mut()
        .update_field(FieldUpdate::PatientName("John Roe".into()))
        .unwrap();
    session
        .form_mut()
        .update_field(FieldUpdate::Phone("1234567890".into()))
        .unwrap();
    session.submit().unwrap();
    session.take_notification();
    assert_eq!(session.appointments().len(), 2);

    let doomed = session.appointments()[0].id.clone();
    let survivor = session.appointments()[1].clone();

    session.request_cancel(&doomed);
    assert_eq!(session.pending_cancel(), Some(doomed.as_str()));
    assert!(session.confirm_cancel());

    assert_eq!(session.appointments().len(), 1);
    assert_eq!(session.appointments()[0], survivor);
    assert!(session.pending_cancel().is_none());
    assert_eq!(session.take_notification().as_deref(), Some("Appointment cancelled"));
}

#[test]
fn dismissed_cancel_keeps_the_record() {
    let mut session = Session::new();
    fill_jane_doe(&mut session);
    session.submit().unwrap();
    let id = session.appointments()[0].id.clone();

    session.request_cancel(&id);
    session.dismiss_cancel();
    assert!(!session.confirm_cancel());
    assert_eq!(session.appointments().len(), 1);
}
