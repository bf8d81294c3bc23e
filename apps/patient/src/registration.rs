//! Four-step registration wizard.
//!
//! Basic information, contact details, Aadhaar verification, then face
//! registration. The draft is held by the shared [`Wizard`], which only
//! advances while the current step's gate holds, and completion is
//! one-way.

use arogya_shared::notify::NotificationLog;
use arogya_shared::sim::{FaceScan, ScanEvent};
use arogya_shared::validate::{digits_only, is_exact_digits, AADHAAR_LEN, MOBILE_LEN};
use arogya_shared::wizard::{Advance, Wizard, WizardStep};

use crate::family::Gender;

/// Everything the wizard collects.
#[derive(Clone, Debug, Default)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub mobile: String,
    pub alternate_number: String,
    pub email: String,
    pub current_address: String,
    pub permanent_address: String,
    pub aadhaar: String,
    pub name_as_per_aadhaar: String,
    face_captured: bool,
}

fn basic_info_complete(draft: &RegistrationDraft) -> bool {
    !draft.full_name.trim().is_empty()
        && !draft.date_of_birth.trim().is_empty()
        && draft.gender.is_some()
}

fn contact_details_complete(draft: &RegistrationDraft) -> bool {
    is_exact_digits(&draft.mobile, MOBILE_LEN) && !draft.current_address.trim().is_empty()
}

fn aadhaar_complete(draft: &RegistrationDraft) -> bool {
    is_exact_digits(&draft.aadhaar, AADHAAR_LEN)
}

fn face_captured(draft: &RegistrationDraft) -> bool {
    draft.face_captured
}

fn steps() -> Vec<WizardStep<RegistrationDraft>> {
    vec![
        WizardStep {
            title_key: "basicInfo",
            is_valid: basic_info_complete,
        },
        WizardStep {
            title_key: "contactDetails",
            is_valid: contact_details_complete,
        },
        WizardStep {
            title_key: "aadhaarVerification",
            is_valid: aadhaar_complete,
        },
        WizardStep {
            title_key: "faceRegistration",
            is_valid: face_captured,
        },
    ]
}

pub struct Registration {
    wizard: Wizard<RegistrationDraft>,
    scan: Option<FaceScan>,
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}

impl Registration {
    pub fn new() -> Self {
        Self {
            wizard: Wizard::new(RegistrationDraft::default(), steps()),
            scan: None,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        self.wizard.draft()
    }

    pub fn draft_mut(&mut self) -> &mut RegistrationDraft {
        self.wizard.draft_mut()
    }

    /// 1-based step number for the progress header.
    pub fn step_number(&self) -> usize {
        self.wizard.step_number()
    }

    pub fn step_count(&self) -> usize {
        self.wizard.step_count()
    }

    pub fn step_title_key(&self) -> &'static str {
        self.wizard.current_step().title_key
    }

    /// Spoken guidance for the current step.
    pub fn voice_guidance(&self) -> &'static str {
        match self.wizard.step_number() {
            1 => "Please enter your basic information including full name, date of birth, and gender.",
            2 => "Now provide your contact details including mobile number and address information.",
            3 => "Enter your Aadhaar card details for identity verification.",
            _ => "Finally, we need to register your face for secure authentication.",
        }
    }

    pub fn can_advance(&self) -> bool {
        self.wizard.current_step_valid()
    }

    pub fn advance(&mut self) -> Advance {
        self.wizard.advance()
    }

    pub fn retreat(&mut self) {
        self.wizard.retreat();
    }

    pub fn is_complete(&self) -> bool {
        self.wizard.is_complete()
    }

    pub fn set_mobile(&mut self, input: &str) {
        self.draft_mut().mobile = digits_only(input, MOBILE_LEN);
    }

    pub fn set_alternate_number(&mut self, input: &str) {
        self.draft_mut().alternate_number = digits_only(input, MOBILE_LEN);
    }

    pub fn set_aadhaar(&mut self, input: &str) {
        self.draft_mut().aadhaar = digits_only(input, AADHAAR_LEN);
    }

    /// Copy the current address into the permanent address field.
    pub fn use_current_as_permanent(&mut self) {
        let draft = self.draft_mut();
        draft.permanent_address = draft.current_address.clone();
    }

    /// Begin (or restart) the face capture on the final step.
    pub fn start_face_capture(&mut self) {
        if self.wizard.step_number() == self.wizard.step_count() && !self.is_complete() {
            self.scan = Some(FaceScan::start());
        }
    }

    pub fn capture_progress(&self) -> u8 {
        self.scan.as_ref().map_or(0, FaceScan::progress)
    }

    /// Advance the running capture; marks the draft once it succeeds.
    pub fn tick_capture(&mut self, notices: &mut NotificationLog) {
        if let Some(scan) = self.scan.as_mut() {
            if let ScanEvent::Completed { success: true } = scan.tick() {
                self.wizard.draft_mut().face_captured = true;
                notices.success("Face registration completed successfully!");
            }
        }
    }

    pub fn cancel_capture(&mut self) {
        if let Some(scan) = self.scan.as_mut() {
            scan.cancel();
        }
        self.scan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_basic_info(reg: &mut Registration) {
        let draft = reg.draft_mut();
        draft.full_name = "Raju Kumar".into();
        draft.date_of_birth = "1992-04-15".into();
        draft.gender = Some(Gender::Male);
    }

    fn fill_contact(reg: &mut Registration) {
        reg.set_mobile("9876543210");
        reg.draft_mut().current_address = "Labour Camp, Perumbavoor, Ernakulam".into();
    }

    fn fill_aadhaar(reg: &mut Registration) {
        reg.set_aadhaar("123456789012");
        reg.draft_mut().name_as_per_aadhaar = "Raju Kumar".into();
    }

    #[test]
    fn advance_blocks_until_the_step_is_filled() {
        let mut reg = Registration::new();
        assert_eq!(reg.advance(), Advance::Blocked);
        assert_eq!(reg.step_number(), 1);
        fill_basic_info(&mut reg);
        assert_eq!(reg.advance(), Advance::Moved);
        assert_eq!(reg.step_title_key(), "contactDetails");
    }

    #[test]
    fn contact_step_requires_a_full_mobile_number() {
        let mut reg = Registration::new();
        fill_basic_info(&mut reg);
        reg.advance();
        reg.set_mobile("98765");
        reg.draft_mut().current_address = "Perumbavoor".into();
        assert_eq!(reg.advance(), Advance::Blocked);
        reg.set_mobile("9876543210");
        assert_eq!(reg.advance(), Advance::Moved);
    }

    #[test]
    fn full_wizard_run_completes_once() {
        let mut reg = Registration::new();
        fill_basic_info(&mut reg);
        reg.advance();
        fill_contact(&mut reg);
        reg.advance();
        fill_aadhaar(&mut reg);
        reg.advance();
        assert_eq!(reg.step_title_key(), "faceRegistration");
        assert!(reg.voice_guidance().contains("register your face"));
        assert_eq!(reg.advance(), Advance::Blocked);

        reg.start_face_capture();
        let mut notices = NotificationLog::new();
        for _ in 0..200 {
            reg.tick_capture(&mut notices);
        }
        assert!(reg.can_advance());
        assert_eq!(
            notices.latest().map(|n| n.message.as_str()),
            Some("Face registration completed successfully!")
        );
        assert_eq!(reg.advance(), Advance::Completed);
        assert!(reg.is_complete());
        assert_eq!(reg.advance(), Advance::Blocked);
    }

    #[test]
    fn cancelled_capture_leaves_the_step_blocked() {
        let mut reg = Registration::new();
        fill_basic_info(&mut reg);
        reg.advance();
        fill_contact(&mut reg);
        reg.advance();
        fill_aadhaar(&mut reg);
        reg.advance();
        reg.start_face_capture();
        let mut notices = NotificationLog::new();
        for _ in 0..10 {
            reg.tick_capture(&mut notices);
        }
        reg.cancel_capture();
        assert!(notices.notices().is_empty());
        assert_eq!(reg.capture_progress(), 0);
        assert_eq!(reg.advance(), Advance::Blocked);
    }

    #[test]
    fn retreat_walks_back_without_losing_the_draft() {
        let mut reg = Registration::new();
        fill_basic_info(&mut reg);
        reg.advance();
        fill_contact(&mut reg);
        reg.retreat();
        assert_eq!(reg.step_title_key(), "basicInfo");
        assert_eq!(reg.draft().mobile, "9876543210");
    }

    #[test]
    fn permanent_address_can_mirror_current() {
        let mut reg = Registration::new();
        reg.draft_mut().current_address = "Perumbavoor, Ernakulam".into();
        reg.use_current_as_permanent();
        assert_eq!(reg.draft().permanent_address, "Perumbavoor, Ernakulam");
    }
}
