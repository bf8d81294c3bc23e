//! Doctor App Flow Tests
//!
//! Login with both factors, consent-gated history access, and the
//! prescription form from blank to submitted.

#[cfg(test)]
mod tests {
    use arogya_doctor::access::{PatientAccess, DEMO_OTP};
    use arogya_doctor::history::PATIENT_RECORD;
    use arogya_doctor::login::{DoctorLogin, FACE_SCAN_MS};
    use arogya_doctor::prescription::{suggest, PrescriptionForm, SuggestionKind};
    use arogya_doctor::session::{DoctorScreen, DoctorSession};

    #[test]
    fn doctor_login_to_home_and_back() {
        let mut session = DoctorSession::new();
        let mut login = DoctorLogin::new();

        login.set_aadhaar("1234 5678 9012");
        login.set_mobile("+91 98765 43210");
        assert!(login.send_otp());
        login.set_otp("123456");
        login.start_scan();
        login.elapse(FACE_SCAN_MS);
        assert!(login.login());

        session.complete_login();
        assert_eq!(session.screen(), DoctorScreen::Home);
        session.logout();
        assert_eq!(session.screen(), DoctorScreen::Login);
    }

    #[test]
    fn consent_flow_opens_the_history_screen() {
        let mut session = DoctorSession::new();
        session.complete_login();
        session.navigate(DoctorScreen::PatientAccess);

        let mut access = PatientAccess::new();
        access.set_phone("+91 91234 56780");
        assert!(access.send_otp(&mut session.notices));
        assert_eq!(
            session.notices.latest().map(|n| n.message.as_str()),
            Some("OTP sent to patient")
        );
        assert_eq!(access.preview().map(|p| p.name), Some(PATIENT_RECORD.name));

        access.set_otp("999");
        assert!(!access.request_access());
        assert!(access.invalid_otp());

        access.set_otp(DEMO_OTP);
        assert!(access.request_access());
        session.navigate(DoctorScreen::PatientHistory);
        assert_eq!(session.screen(), DoctorScreen::PatientHistory);
        assert_eq!(PATIENT_RECORD.visits.len(), 3);
    }

    #[test]
    fn prescription_via_suggestions_submits_once() {
        let mut session = DoctorSession::new();
        session.complete_login();
        let mut form = PrescriptionForm::new();
        form.patient_name = "Raju Kumar".into();
        form.age = "32".into();

        let symptom = suggest(SuggestionKind::Symptom, "fever with")[0];
        form.symptoms = symptom.into();
        let diagnosis = suggest(SuggestionKind::Diagnosis, "viral")[0];
        form.diagnosis = diagnosis.into();

        form.current_medicine.name = suggest(SuggestionKind::Medicine, "paracetamol 65")[0].into();
        form.current_medicine.dosage = "650mg".into();
        form.current_medicine.frequency = suggest(SuggestionKind::Frequency, "three")[0].into();
        form.current_medicine.duration = suggest(SuggestionKind::Duration, "5 d")[0].into();
        assert!(form.add_medicine());

        assert!(form.submit(&mut session.notices));
        assert!(form.is_submitted());
        assert_eq!(form.medicines()[0].name, "Paracetamol 650mg");
        assert_eq!(
            session.notices.latest().map(|n| n.message.as_str()),
            Some("Prescription submitted successfully!")
        );
        assert!(form.submit(&mut session.notices));
        assert_eq!(session.notices.notices().len(), 1);
    }

    #[test]
    fn language_cycles_on_every_screen() {
        let mut session = DoctorSession::new();
        let start = session.language();
        session.cycle_language();
        session.cycle_language();
        session.cycle_language();
        assert_eq!(session.language(), start);
    }
}
