//! Arogya Patient App
//!
//! Headless flow logic for the patient-facing app of the Kerala migrant
//! workers health portal: screen routing, the OTP + face-scan login
//! machine, the four-step registration wizard, the health-scheme catalog
//! and application flow, family member management, profile reference
//! data, and the keyword-matching health assistant.
//!
//! Everything is in-memory for the lifetime of a session; rendering and
//! real authentication/speech live outside this crate.

pub mod auth;
pub mod chatbot;
pub mod family;
pub mod profile;
pub mod registration;
pub mod schemes;
pub mod session;

pub use auth::{AuthEvent, AuthStep, LoginFlow};
pub use session::{Screen, Session};
