//! Remote file service
//!
//! The files being edited live behind a small HTTP service. `FileClient`
//! speaks its JSON protocol, and `RemoteFiles` runs the client on a worker
//! thread so loads and saves never block the UI loop.

pub mod client;
pub mod protocol;
pub mod worker;

pub use client::FileClient;
pub use worker::{FileRequest, FileResponse, RemoteFiles};
