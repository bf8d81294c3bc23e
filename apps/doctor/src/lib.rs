//! Arogya Doctor App
//!
//! Headless flow logic for the doctor-facing app of the Kerala migrant
//! workers health portal: two-factor doctor login, consent-gated access
//! to a patient's medical history, and the prescription form with its
//! auto-suggestion catalogs.
//!
//! Unlike the patient app, screen labels here live in typed per-screen
//! tables rather than a key-value lookup.

pub mod access;
pub mod history;
pub mod i18n;
pub mod login;
pub mod prescription;
pub mod session;

pub use login::DoctorLogin;
pub use session::{DoctorScreen, DoctorSession};
