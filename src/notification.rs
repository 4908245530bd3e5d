//! Notification module for remedit
//!
//! Transient toasts for save results and config warnings, plus permanent
//! error toasts that stay until dismissed with Esc or a click.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
