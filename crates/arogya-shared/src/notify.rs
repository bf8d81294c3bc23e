//! Transient user-facing notices (toasts).
//!
//! Notices never block input; screens append and move on. The log is
//! append-only for the lifetime of a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NotificationLog {
    notices: Vec<Notice>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    fn push(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
            at: Utc::now(),
        });
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_append_only_and_ordered() {
        let mut log = NotificationLog::new();
        log.success("OTP sent successfully!");
        log.error("Voice recognition failed. Please try again.");
        let kinds: Vec<NoticeKind> = log.notices().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Error]);
        assert_eq!(
            log.latest().map(|n| n.message.as_str()),
            Some("Voice recognition failed. Please try again.")
        );
    }

    #[test]
    fn notices_serialize() {
        let mut log = NotificationLog::new();
        log.success("Registration completed successfully!");
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("Registration completed successfully!"));
    }
}
