//! Screen routing and session state for the patient app.

use arogya_shared::i18n::Language;
use arogya_shared::notify::NotificationLog;
use serde::{Deserialize, Serialize};

/// Every screen the patient app can show. Navigation is a plain enum
/// transition, so an unknown destination is unrepresentable.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Home,
    Policies,
    SchemeDetails,
    Profile,
    Family,
    Chatbot,
}

/// One in-memory patient session. Nothing survives it; logging out
/// returns to the login screen with authentication cleared but keeps
/// the chosen language.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Session {
    language: Language,
    screen: Screen,
    authenticated: bool,
    selected_scheme: u32,
    pub notices: NotificationLog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            selected_scheme: 1,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Cycle English -> Hindi -> Malayalam -> English.
    pub fn cycle_language(&mut self) {
        self.language = self.language.cycle();
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn selected_scheme(&self) -> u32 {
        self.selected_scheme
    }

    /// Successful login lands on the home screen.
    pub fn complete_login(&mut self) {
        self.authenticated = true;
        self.screen = Screen::Home;
    }

    /// A finished registration returns to the login screen; the new
    /// user still logs in with their credentials.
    pub fn complete_registration(&mut self) {
        self.authenticated = false;
        self.screen = Screen::Login;
        self.notices.success("Registration completed successfully!");
    }

    pub fn go_to_register(&mut self) {
        if !self.authenticated {
            self.screen = Screen::Register;
        }
    }

    pub fn back_to_login(&mut self) {
        if !self.authenticated {
            self.screen = Screen::Login;
        }
    }

    /// In-app navigation. Ignored until authenticated, so deep screens
    /// are unreachable from the login flow.
    pub fn navigate(&mut self, screen: Screen) {
        if self.authenticated {
            self.screen = screen;
        }
    }

    /// Open one scheme's detail screen.
    pub fn open_scheme(&mut self, scheme_id: u32) {
        if self.authenticated {
            self.selected_scheme = scheme_id;
            self.screen = Screen::SchemeDetails;
        }
    }

    /// Drop authentication and return to login. Language survives.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.screen = Screen::Login;
    }
}
