//! Screen routing for the doctor app.

use arogya_shared::i18n::Language;
use arogya_shared::notify::NotificationLog;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoctorScreen {
    #[default]
    Login,
    Home,
    PatientAccess,
    PatientHistory,
    PrescriptionForm,
}

/// One in-memory doctor session. The language button cycles through all
/// three languages from any screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DoctorSession {
    language: Language,
    screen: DoctorScreen,
    logged_in: bool,
    pub notices: NotificationLog,
}

impl DoctorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn cycle_language(&mut self) {
        self.language = self.language.cycle();
    }

    pub fn screen(&self) -> DoctorScreen {
        self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn complete_login(&mut self) {
        self.logged_in = true;
        self.screen = DoctorScreen::Home;
    }

    /// In-app navigation; ignored before login.
    pub fn navigate(&mut self, screen: DoctorScreen) {
        if self.logged_in {
            self.screen = screen;
        }
    }

    pub fn back_to_home(&mut self) {
        if self.logged_in {
            self.screen = DoctorScreen::Home;
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.screen = DoctorScreen::Login;
    }
}
