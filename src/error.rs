use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Error reported by the file service in its JSON body
    #[error("{0}")]
    Server(String),

    #[error("Unexpected response: {0}")]
    Protocol(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("File service worker disconnected")]
    WorkerDisconnected,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for EditorError {
    fn from(err: reqwest::Error) -> Self {
        EditorError::Network(err.to_string())
    }
}
