//! Seams for the optional speech collaborators.
//!
//! Real recognition and synthesis live outside this workspace. Screens
//! hold these traits as optional collaborators; when a capability is
//! absent the feature is disabled behind a single notice, never retried.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SpeechError {
    /// The runtime offers no recognition capability.
    #[error("Voice input not supported on this device.")]
    Unsupported,
    /// Recognition started but produced no transcript.
    #[error("Voice recognition failed. Please try again.")]
    Recognition,
}

/// Text-to-speech collaborator. `locale_tag` is a BCP 47 tag such as
/// `hi-IN`, chosen from the active language.
pub trait SpeechOutput {
    fn speak(&mut self, text: &str, locale_tag: &str);
}

/// Speech-to-text collaborator.
pub trait SpeechInput {
    fn transcribe(&mut self, locale_tag: &str) -> Result<String, SpeechError>;
}
