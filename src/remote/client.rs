//! Async HTTP client for the file service

use reqwest::{Client, Url};

#[cfg(debug_assertions)]
use log::debug;

use super::protocol::{
    LoadResponse, SaveRequest, SaveResponse, interpret_load, interpret_save, parse_body,
};
use crate::error::EditorError;

#[derive(Debug, Clone)]
pub struct FileClient {
    client: Client,
    base: Url,
}

impl FileClient {
    /// Create a client for the service at `server`, e.g. `http://127.0.0.1:8088`
    pub fn new(server: &str) -> Result<Self, EditorError> {
        let base = Url::parse(server)
            .map_err(|e| EditorError::InvalidUrl(format!("{}: {}", server, e)))?;
        if base.cannot_be_a_base() {
            return Err(EditorError::InvalidUrl(server.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    /// Endpoint for a file; the whole path is one percent-encoded segment
    pub fn file_url(&self, path: &str) -> Result<Url, EditorError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| EditorError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("api")
            .push("explorer")
            .push(path);
        Ok(url)
    }

    pub async fn load(&self, path: &str) -> Result<String, EditorError> {
        let url = self.file_url(path)?;

        #[cfg(debug_assertions)]
        debug!("FileClient: GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_load(parse_body::<LoadResponse>(status, &body)?)
    }

    pub async fn save(&self, path: &str, content: &str) -> Result<(), EditorError> {
        let url = self.file_url(path)?;

        #[cfg(debug_assertions)]
        debug!("FileClient: POST {} ({} bytes)", url, content.len());

        let response = self
            .client
            .post(url)
            .json(&SaveRequest { content })
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_save(parse_body::<SaveResponse>(status, &body)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
