//! Arogya Test Suite
//!
//! End-to-end scenario tests across both apps:
//! - Patient login, registration, and navigation flows
//! - Health scheme application walks
//! - Health assistant conversations under virtual time
//! - Doctor login, consent-gated history access, and prescriptions

pub mod doctor_flow;
pub mod patient_flow;
pub mod scheme_flow;
