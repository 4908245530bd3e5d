//! File service worker thread
//!
//! Runs `FileClient` on a dedicated thread with its own single-threaded
//! tokio runtime. The UI sends `FileRequest`s over a channel and polls
//! `FileResponse`s without blocking, once per event-loop cycle.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::client::FileClient;
use crate::error::EditorError;

#[derive(Debug, Clone, PartialEq)]
pub enum FileRequest {
    Load { path: String },
    Save { path: String, content: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileResponse {
    Loaded {
        path: String,
        result: Result<String, EditorError>,
    },
    Saved {
        path: String,
        result: Result<(), EditorError>,
    },
}

/// Spawn the worker thread
///
/// The thread exits when the request channel closes. If the client cannot
/// be built (bad server URL) every request is answered with that error.
pub fn spawn_worker(
    server: &str,
    request_rx: Receiver<FileRequest>,
    response_tx: Sender<FileResponse>,
) {
    let client = FileClient::new(server);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("File worker: failed to create tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(worker_loop(client, request_rx, response_tx));
    });
}

/// Process requests until the channel is closed
///
/// Blocking `recv()` is fine here since this is a dedicated thread.
async fn worker_loop(
    client: Result<FileClient, EditorError>,
    request_rx: Receiver<FileRequest>,
    response_tx: Sender<FileResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            break;
        }
    }
}

async fn handle_request(
    client: &Result<FileClient, EditorError>,
    request: FileRequest,
) -> FileResponse {
    match request {
        FileRequest::Load { path } => {
            let result = match client {
                Ok(client) => client.load(&path).await,
                Err(e) => Err(e.clone()),
            };
            if let Err(e) = &result {
                log::error!("File worker: load of {} failed: {}", path, e);
            }
            FileResponse::Loaded { path, result }
        }
        FileRequest::Save { path, content } => {
            let result = match client {
                Ok(client) => client.save(&path, &content).await,
                Err(e) => Err(e.clone()),
            };
            if let Err(e) = &result {
                log::error!("File worker: save of {} failed: {}", path, e);
            }
            FileResponse::Saved { path, result }
        }
    }
}

/// UI-side handle to the worker
pub struct RemoteFiles {
    request_tx: Sender<FileRequest>,
    response_rx: Receiver<FileResponse>,
    in_flight: usize,
}

impl RemoteFiles {
    pub fn spawn(server: &str) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(server, request_rx, response_tx);
        Self::from_channels(request_tx, response_rx)
    }

    /// Wrap existing channels, for driving the handle without a thread
    pub fn from_channels(
        request_tx: Sender<FileRequest>,
        response_rx: Receiver<FileResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            in_flight: 0,
        }
    }

    pub fn request_load(&mut self, path: &str) -> Result<(), EditorError> {
        self.send(FileRequest::Load {
            path: path.to_string(),
        })
    }

    pub fn request_save(&mut self, path: &str, content: String) -> Result<(), EditorError> {
        self.send(FileRequest::Save {
            path: path.to_string(),
            content,
        })
    }

    fn send(&mut self, request: FileRequest) -> Result<(), EditorError> {
        #[cfg(debug_assertions)]
        log::debug!("RemoteFiles: sending {:?}", request_kind(&request));

        self.request_tx
            .send(request)
            .map_err(|_| EditorError::WorkerDisconnected)?;
        self.in_flight += 1;
        Ok(())
    }

    /// Next finished request, if any
    pub fn poll(&mut self) -> Option<FileResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if self.in_flight > 0 {
                    log::error!(
                        "RemoteFiles: worker gone with {} requests pending",
                        self.in_flight
                    );
                    self.in_flight = 0;
                }
                None
            }
        }
    }

    /// True while a request has been sent but not answered
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(debug_assertions)]
fn request_kind(request: &FileRequest) -> String {
    match request {
        FileRequest::Load { path } => format!("load {}", path),
        FileRequest::Save { path, content } => format!("save {} ({} bytes)", path, content.len()),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
