//! Patient App Flow Tests
//!
//! Full sessions driven end to end: login with OTP and face scan,
//! registration through the wizard, and the chatbot under virtual time.

#[cfg(test)]
mod tests {
    use arogya_patient::auth::{AuthEvent, AuthStep, LoginFlow};
    use arogya_patient::chatbot::{self, ChatSession, Topic};
    use arogya_patient::family::Gender;
    use arogya_patient::registration::Registration;
    use arogya_patient::session::{Screen, Session};
    use arogya_shared::i18n::Language;
    use arogya_shared::sim::Delay;
    use arogya_shared::wizard::Advance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// The walkthrough scenario: credentials, OTP, scan, home screen.
    #[test]
    fn full_patient_login_session() {
        let mut session = Session::new();
        let mut login = LoginFlow::new();

        login.set_aadhaar("123456789012");
        login.set_mobile("9876543210");
        let language = session.language();
        assert_eq!(
            login.send_otp(language, &mut session.notices),
            AuthEvent::OtpSent
        );
        assert_eq!(login.formatted_mobile(), "+91 98765 43210");

        login.set_otp("654321");
        assert!(login.verify_otp(&mut session.notices));
        assert_eq!(login.step(), AuthStep::FaceScan);

        let mut authenticated = 0;
        for _ in 0..200 {
            if login.tick_scan(&mut session.notices) == AuthEvent::Authenticated {
                authenticated += 1;
                session.complete_login();
            }
        }
        assert_eq!(authenticated, 1);
        assert_eq!(session.screen(), Screen::Home);
        let milestones: Vec<&str> = session
            .notices
            .notices()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            milestones,
            vec![
                "OTP sent successfully!",
                "OTP verified! Please complete face authentication.",
                "Authentication successful!",
            ]
        );

        session.navigate(Screen::Chatbot);
        assert_eq!(session.screen(), Screen::Chatbot);
        session.logout();
        assert_eq!(session.screen(), Screen::Login);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn registration_end_to_end_returns_to_login() {
        let mut session = Session::new();
        session.go_to_register();

        let mut reg = Registration::new();
        {
            let draft = reg.draft_mut();
            draft.full_name = "Sunita Devi".into();
            draft.date_of_birth = "1996-08-02".into();
            draft.gender = Some(Gender::Female);
        }
        assert_eq!(reg.advance(), Advance::Moved);

        reg.set_mobile("9123456780");
        reg.draft_mut().current_address = "Aluva, Ernakulam".into();
        reg.use_current_as_permanent();
        assert_eq!(reg.advance(), Advance::Moved);

        reg.set_aadhaar("987654321098");
        reg.draft_mut().name_as_per_aadhaar = "Sunita Devi".into();
        assert_eq!(reg.advance(), Advance::Moved);

        reg.start_face_capture();
        for _ in 0..200 {
            reg.tick_capture(&mut session.notices);
        }
        assert_eq!(reg.advance(), Advance::Completed);

        session.complete_registration();
        assert_eq!(session.screen(), Screen::Login);
        assert!(!session.is_authenticated());
        let milestones: Vec<&str> = session
            .notices
            .notices()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(
            milestones,
            vec![
                "Face registration completed successfully!",
                "Registration completed successfully!",
            ]
        );
    }

    #[test]
    fn chatbot_conversation_across_languages() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut chat = ChatSession::new(Language::Hi);
        assert_eq!(chat.messages()[0].text, chatbot::welcome(Language::Hi));

        chat.set_input("आपातकाल में क्या करें");
        assert!(chat.send(Language::Hi, &mut rng));
        assert!(chat.is_typing());
        let delivered = chat.elapse(Delay::THINKING_MAX_MS);
        assert_eq!(
            delivered,
            Some(chatbot::reply(Topic::Emergency, Language::Hi))
        );

        // language switch applies to the next exchange only
        chat.set_input("scheme details please");
        chat.send(Language::Ml, &mut rng);
        assert_eq!(
            chat.elapse(Delay::THINKING_MAX_MS),
            Some(chatbot::reply(Topic::Schemes, Language::Ml))
        );
        assert_eq!(chat.messages().len(), 5);
    }

    #[test]
    fn session_state_survives_serialization() {
        let mut session = Session::new();
        session.set_language(Language::Ml);
        session.complete_login();
        session.open_scheme(4);
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.screen(), Screen::SchemeDetails);
        assert_eq!(restored.selected_scheme(), 4);
        assert_eq!(restored.language(), Language::Ml);
    }
}
