//! Two-factor doctor login: credentials, OTP entry, and a short face
//! scan, with the login button gated on both factors.
//!
//! Credentials here are presence-checked only; the doctor login screen
//! accepts formatted input (spaces, +91 prefixes) rather than filtering
//! to digits, so the gates check non-emptiness, not length.

use arogya_shared::sim::{Delay, Millis};

const AADHAAR_MAX: usize = 14;
const MOBILE_MAX: usize = 15;
const OTP_MAX: usize = 6;

/// The doctor face scan is a single fixed pause, not a progress bar.
pub const FACE_SCAN_MS: Millis = 2000;

#[derive(Clone, Debug, Default)]
pub struct DoctorLogin {
    aadhaar: String,
    mobile: String,
    otp_sent: bool,
    otp: String,
    scan: Option<Delay>,
    scan_complete: bool,
    logged_in: bool,
}

fn truncated(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

impl DoctorLogin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aadhaar(&self) -> &str {
        &self.aadhaar
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    pub fn set_aadhaar(&mut self, input: &str) {
        self.aadhaar = truncated(input, AADHAAR_MAX);
    }

    pub fn set_mobile(&mut self, input: &str) {
        self.mobile = truncated(input, MOBILE_MAX);
    }

    pub fn set_otp(&mut self, input: &str) {
        self.otp = truncated(input, OTP_MAX);
    }

    pub fn otp_sent(&self) -> bool {
        self.otp_sent
    }

    pub fn can_send_otp(&self) -> bool {
        !self.aadhaar.is_empty() && !self.mobile.is_empty()
    }

    pub fn send_otp(&mut self) -> bool {
        if !self.can_send_otp() {
            return false;
        }
        self.otp_sent = true;
        true
    }

    /// The scan button unlocks once an OTP has been entered.
    pub fn can_start_scan(&self) -> bool {
        self.otp_sent && !self.otp.is_empty() && !self.scan_complete
    }

    pub fn start_scan(&mut self) {
        if self.can_start_scan() {
            self.scan = Some(Delay::new(FACE_SCAN_MS));
        }
    }

    pub fn scan_running(&self) -> bool {
        self.scan.is_some()
    }

    pub fn scan_complete(&self) -> bool {
        self.scan_complete
    }

    /// Consume virtual time; the scan completes after [`FACE_SCAN_MS`].
    pub fn elapse(&mut self, ms: Millis) {
        if let Some(scan) = self.scan.as_mut() {
            if scan.elapse(ms) {
                self.scan = None;
                self.scan_complete = true;
            }
        }
    }

    pub fn can_login(&self) -> bool {
        self.otp_sent && !self.otp.is_empty() && self.scan_complete
    }

    pub fn login(&mut self) -> bool {
        if self.can_login() {
            self.logged_in = true;
        }
        self.logged_in
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}
