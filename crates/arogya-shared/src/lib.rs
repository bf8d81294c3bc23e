//! Arogya Shared Utilities
//!
//! This crate provides common flow logic for both Arogya apps:
//! - Localization tables with fallback-to-key lookup
//! - Input sanitization and validation results
//! - Generic multi-step wizard
//! - Virtual-time simulations (face scan, bounded delays)
//! - Notification log
//! - Speech collaborator seams

pub mod i18n;
pub mod notify;
pub mod sim;
pub mod speech;
pub mod validate;
pub mod wizard;

// Re-export commonly used items
pub use i18n::{translate, Language};
pub use notify::{Notice, NoticeKind, NotificationLog};
pub use validate::{digits_only, Validity};
pub use wizard::{Advance, Wizard, WizardStep};
