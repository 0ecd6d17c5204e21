// src/jobs/notify.rs
//! User-facing alerts raised by the save and delete flows

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-facing alert: title, text and an icon level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.to_string(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.to_string(),
            level: NotificationLevel::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
