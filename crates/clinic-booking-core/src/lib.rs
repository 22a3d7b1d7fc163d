//! Clinic appointment booking core.
//!
//! Client-side booking logic with in-memory state only: field validation,
//! a form state controller that finalizes drafts into records, and the
//! appointment book that owns the displayed collection.
//!
//! # Architecture
//!
//! ```text
//! field edits ──► FormController ──► submit ──► Submission
//!                      │                            │
//!              validation (live)           ┌────────▼────────┐
//!                                          │ AppointmentBook │
//!                                          │ create / update │
//!                                          │ cancel / list   │
//!                                          └────────┬────────┘
//!                                                   │
//!                                            display layer
//! ```
//!
//! The `Session` type wires the pieces together and is the single thing
//! a presentation layer needs to hold.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, BookingDraft, patches)
//! - [`validation`]: Pure field checks and the error map
//! - [`roster`]: Static doctor and department reference data
//! - [`form`]: Draft ownership, touched state, submit finalization
//! - [`book`]: Ordered collection with id- and identity-keyed updates
//! - [`session`]: Single owner wiring form, book and UI flags together

pub mod book;
pub mod form;
pub mod models;
pub mod roster;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use book::{AppointmentBook, IdentityKey, ReconcileOutcome};
pub use form::{FieldUpdate, FormController, FormMode, InputError, Submission};
pub use models::{
    Appointment, AppointmentPatch, AppointmentStatus, BookingDraft, Field, VisitType,
};
pub use session::{Session, SubmitOutcome};
pub use validation::{email_is_valid, is_submittable, phone_is_valid, validate, FieldErrors};
