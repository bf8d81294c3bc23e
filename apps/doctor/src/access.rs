//! Consent-gated access to a patient's records.
//!
//! The doctor asks for an OTP to be sent to the patient's phone and
//! enters the code the patient reads back. The demo accepts the fixed
//! code `123456` or any six characters; anything shorter raises the
//! invalid-OTP error until the next send.

use arogya_shared::notify::NotificationLog;

const PHONE_MAX: usize = 15;
const OTP_MAX: usize = 6;

/// Fixed consent code the demo always accepts.
pub const DEMO_OTP: &str = "123456";

/// Preview card shown while waiting for the patient's code.
#[derive(Clone, Copy, Debug)]
pub struct PatientPreview {
    pub name: &'static str,
    pub age: u8,
    pub worker_id: &'static str,
}

pub static PREVIEW: PatientPreview = PatientPreview {
    name: "രാജു കുമാർ (Raju Kumar)",
    age: 32,
    worker_id: "KL-MW-2024-1234",
};

#[derive(Clone, Debug, Default)]
pub struct PatientAccess {
    phone: String,
    otp_sent: bool,
    otp: String,
    invalid_otp: bool,
    granted: bool,
}

impl PatientAccess {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn set_phone(&mut self, input: &str) {
        self.phone = input.chars().take(PHONE_MAX).collect();
    }

    pub fn set_otp(&mut self, input: &str) {
        self.otp = input.chars().take(OTP_MAX).collect();
    }

    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    /// The preview card is only shown once the request went out.
    pub fn preview(&self) -> Option<&'static PatientPreview> {
        self.otp_sent.then_some(&PREVIEW)
    }

    pub fn can_send_otp(&self) -> bool {
        !self.phone.is_empty()
    }

    /// Send the consent request. Clears a previous invalid-OTP error.
    pub fn send_otp(&mut self, notices: &mut NotificationLog) -> bool {
        if !self.can_send_otp() {
            return false;
        }
        self.otp_sent = true;
        self.invalid_otp = false;
        notices.success("OTP sent to patient");
        true
    }

    pub fn invalid_otp(&self) -> bool {
        self.invalid_otp
    }

    /// Check the entered code; grants history access on success.
    pub fn request_access(&mut self) -> bool {
        if !self.otp_sent || self.otp.is_empty() {
            return false;
        }
        if self.otp == DEMO_OTP || self.otp.chars().count() == 6 {
            self.granted = true;
            self.invalid_otp = false;
        } else {
            self.invalid_otp = true;
        }
        self.granted
    }

    pub fn is_granted(&self) -> bool {
        self.granted
    }
}
