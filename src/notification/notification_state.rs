//! Notification state management
//!
//! One toast at a time. A newer notification replaces the current one.

use ratatui::layout::Rect;
use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme::notification as colors;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Short duration (1.5s), for confirmations like "Saved"
    #[default]
    Info,
    /// Long duration (10s), for things like an invalid config
    Warning,
    /// Permanent until dismissed, for failed loads and saves
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(1500)),
            NotificationType::Warning => Some(Duration::from_secs(10)),
            NotificationType::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: colors::INFO_FG,
                bg: colors::INFO_BG,
                border: colors::INFO_BORDER,
            },
            NotificationType::Warning => NotificationStyle {
                fg: colors::WARNING_FG,
                bg: colors::WARNING_BG,
                border: colors::WARNING_BORDER,
            },
            NotificationType::Error => NotificationStyle {
                fg: colors::ERROR_FG,
                bg: colors::ERROR_BG,
                border: colors::ERROR_BORDER,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = permanent
}

impl Notification {
    pub fn new(message: &str) -> Self {
        Self::with_type(message, NotificationType::Info)
    }

    pub fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.saturating_duration_since(self.created_at) > d,
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
    /// Screen area of the last paint, for click dismissal
    rect: Option<Rect>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (1.5s)
    pub fn show(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Info);
    }

    pub fn show_with_type(&mut self, message: &str, notification_type: NotificationType) {
        #[cfg(debug_assertions)]
        log::debug!("Notification ({:?}): {}", notification_type, message);

        self.current = Some(Notification::with_type(message, notification_type));
        self.rect = None;
    }

    /// Show a warning notification (10s)
    pub fn show_warning(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Warning);
    }

    /// Show an error notification (permanent until dismissed)
    pub fn show_error(&mut self, message: &str) {
        self.show_with_type(message, NotificationType::Error);
    }

    /// Dismiss the current notification, returns true if one was showing
    pub fn dismiss(&mut self) -> bool {
        self.rect = None;
        self.current.take().is_some()
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.dismiss();
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// True while a permanent error is showing
    pub fn has_error(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|n| n.notification_type == NotificationType::Error)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }

    /// Whether a screen cell lies on the painted notification
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.current.is_some()
            && self.rect.is_some_and(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
