//! Simulated login: credentials, OTP, then a face scan.
//!
//! The flow is a one-way ladder of steps. Inputs are digit-filtered as
//! they arrive, each gate checks length only (there is no backend to
//! verify against) and the face scan is the virtual-time simulation from
//! the shared crate.

use arogya_shared::i18n::{translate, Language};
use arogya_shared::notify::NotificationLog;
use arogya_shared::sim::{FaceScan, ScanEvent, ScanState};
use arogya_shared::validate::{digits_only, is_exact_digits, AADHAAR_LEN, MOBILE_LEN, OTP_LEN};

/// Where the login flow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStep {
    /// Collecting Aadhaar and mobile number.
    #[default]
    Credentials,
    /// OTP sent; collecting the six digits.
    Otp,
    /// OTP accepted; the scan simulation is running.
    FaceScan,
    /// Scan succeeded. Terminal.
    Authenticated,
}

/// Observable outcome of a login action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Nothing user-visible happened.
    Idle,
    /// An OTP was (re)issued to the entered mobile number.
    OtpSent,
    /// Face scan progress percentage.
    ScanProgress(u8),
    /// Login finished. Fires exactly once per flow.
    Authenticated,
}

/// The patient login machine.
#[derive(Clone, Debug, Default)]
pub struct LoginFlow {
    step: AuthStep,
    aadhaar: String,
    mobile: String,
    otp: String,
    scan: Option<FaceScan>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AuthStep {
        self.step
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

    /// Replace the Aadhaar field with the digits of `input`, at most 12.
    pub fn set_aadhaar(&mut self, input: &str) {
        self.aadhaar = digits_only(input, AADHAAR_LEN);
    }

    /// Replace the mobile field with the digits of `input`, at most 10.
    pub fn set_mobile(&mut self, input: &str) {
        self.mobile = digits_only(input, MOBILE_LEN);
    }

    /// Replace the OTP field with the digits of `input`, at most 6.
    pub fn set_otp(&mut self, input: &str) {
        self.otp = digits_only(input, OTP_LEN);
    }

    /// The send button enables only on a full 12-digit Aadhaar and
    /// 10-digit mobile number.
    pub fn can_send_otp(&self) -> bool {
        self.step == AuthStep::Credentials
            && is_exact_digits(&self.aadhaar, AADHAAR_LEN)
            && is_exact_digits(&self.mobile, MOBILE_LEN)
    }

    pub fn send_otp(&mut self, language: Language, notices: &mut NotificationLog) -> AuthEvent {
        if !self.can_send_otp() {
            return AuthEvent::Idle;
        }
        self.step = AuthStep::Otp;
        notices.success(translate("otpSent", language));
        AuthEvent::OtpSent
    }

    /// Reissue the OTP without leaving the OTP step. Unthrottled, like
    /// the send button itself, and the entered code stays in place.
    pub fn resend_otp(&mut self, language: Language, notices: &mut NotificationLog) -> AuthEvent {
        if self.step != AuthStep::Otp {
            return AuthEvent::Idle;
        }
        notices.success(translate("otpSent", language));
        AuthEvent::OtpSent
    }

    pub fn can_verify_otp(&self) -> bool {
        self.step == AuthStep::Otp && is_exact_digits(&self.otp, OTP_LEN)
    }

    /// Accept the OTP and start the face scan. Any six digits pass; the
    /// issued code is never checked against the entry.
    pub fn verify_otp(&mut self, notices: &mut NotificationLog) -> bool {
        if !self.can_verify_otp() {
            return false;
        }
        self.step = AuthStep::FaceScan;
        self.scan = Some(FaceScan::start());
        notices.success("OTP verified! Please complete face authentication.");
        true
    }

    pub fn scan_progress(&self) -> u8 {
        self.scan.as_ref().map_or(0, FaceScan::progress)
    }

    /// Advance the running scan by one 50 ms tick.
    pub fn tick_scan(&mut self, notices: &mut NotificationLog) -> AuthEvent {
        let Some(scan) = self.scan.as_mut() else {
            return AuthEvent::Idle;
        };
        match scan.tick() {
            ScanEvent::Progress(p) => AuthEvent::ScanProgress(p),
            ScanEvent::Completed { success: true } => {
                self.step = AuthStep::Authenticated;
                notices.success("Authentication successful!");
                AuthEvent::Authenticated
            }
            ScanEvent::Completed { success: false } | ScanEvent::Idle => AuthEvent::Idle,
        }
    }

    /// Abort the scan and fall back to the OTP step. A no-op once
    /// authenticated.
    pub fn cancel_scan(&mut self) {
        if self.step != AuthStep::FaceScan {
            return;
        }
        if let Some(scan) = self.scan.as_mut() {
            scan.cancel();
            if scan.state() == ScanState::Cancelled {
                self.scan = None;
                self.step = AuthStep::Otp;
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.step == AuthStep::Authenticated
    }

    /// The number the OTP screen says the code went to, grouped the way
    /// Indian mobile numbers are printed.
    pub fn formatted_mobile(&self) -> String {
        if self.mobile.len() == MOBILE_LEN {
            format!("+91 {} {}", &self.mobile[..5], &self.mobile[5..])
        } else {
            format!("+91 {}", self.mobile)
        }
    }

    /// Translation key for the spoken prompt of the current step.
    pub fn guidance_key(&self) -> &'static str {
        match self.step {
            AuthStep::Credentials => "aadhaarNumber",
            AuthStep::Otp => "enterOtp",
            AuthStep::FaceScan => "faceRegistration",
            AuthStep::Authenticated => "welcome",
        }
    }
}
