//! # Lead Form Client
//!
//! Client side of the lead form: field state, validation, submission and
//! user notifications. The terminal front end in `main.rs` drives it.
//!
//! ## Fields
//! - name: required, at least 2 characters after trimming
//! - phone: required, `^[+]?[0-9\s\-()]{10,}$` after trimming
//! - consultation: required, `дом` or `квартира`
//!
//! ## Flow
//! - Editing a field clears its error, it does not re-validate
//! - Submit validates all fields at once so every error shows together
//! - Invalid form: errors plus a notification, no request is sent
//! - Valid form: trimmed name and phone, consultation and a ru-RU timestamp go out as JSON
//! - 2xx with a `success: true` body ends the form, anything else shows a
//!   retry notification and keeps the entered data
//! - Notifications disappear after 5 seconds or when dismissed
//!
//! ## Notes
//! - Only one submission is in flight at a time
//! - Restarting and submitting again creates a second row, the server does not dedupe

pub mod form;
pub mod notification;
pub mod transport;
pub mod validate;

pub use form::{FormClient, SubmitOutcome};
pub use notification::{Notification, NotificationKind};
pub use transport::{HttpTransport, SubmitError, Transport};
pub use validate::{Field, FieldErrors, FormData, Validation, validate};
