//! remedit library - terminal editor for files served over HTTP
//!
//! This library exposes the core functionality of remedit for testing purposes.

pub mod app;
pub mod chrome;
pub mod config;
pub mod editor;
pub mod error;
pub mod layout;
pub mod notification;
pub mod remote;
pub mod search;
pub mod session;
pub mod surface;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use editor::TextEditor;
pub use error::EditorError;
pub use session::EditorSession;
