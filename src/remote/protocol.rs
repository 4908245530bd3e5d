//! Wire format of the file service
//!
//! Both endpoints answer with a JSON object. A load returns
//! `{"type": "file", "content": ...}`, a save returns `{"success": true}`,
//! and either may instead carry `{"error": ...}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Body of a save request
#[derive(Debug, Serialize)]
pub struct SaveRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoadResponse {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

/// Turn a load response into file contents
pub fn interpret_load(response: LoadResponse) -> Result<String, EditorError> {
    match response {
        LoadResponse {
            kind: Some(kind),
            content: Some(content),
            ..
        } if kind == "file" => Ok(content),
        LoadResponse {
            error: Some(error), ..
        } => Err(EditorError::Server(error)),
        LoadResponse { kind, .. } => Err(EditorError::Protocol(match kind {
            Some(kind) => format!("unexpected '{}' response", kind),
            None => "response has neither content nor error".to_string(),
        })),
    }
}

pub fn interpret_save(response: SaveResponse) -> Result<(), EditorError> {
    if response.success {
        return Ok(());
    }
    Err(EditorError::Server(
        response.error.unwrap_or_else(|| "unknown error".to_string()),
    ))
}

/// Parse a response body, falling back to the HTTP status when the body is
/// not the JSON we expect
///
/// The service reports its own errors in the body even on non-2xx statuses,
/// so the body wins whenever it parses.
pub fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, EditorError> {
    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..300).contains(&status) => Err(EditorError::Http {
            status,
            message: body.trim().to_string(),
        }),
        Err(e) => Err(EditorError::Protocol(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(body: &str) -> Result<String, EditorError> {
        parse_body::<LoadResponse>(200, body).and_then(interpret_load)
    }

    fn save(status: u16, body: &str) -> Result<(), EditorError> {
        parse_body::<SaveResponse>(status, body).and_then(interpret_save)
    }

    #[test]
    fn test_load_file_content() {
        assert_eq!(
            load(r#"{"type":"file","content":"print('hi')\n"}"#),
            Ok("print('hi')\n".to_string())
        );
    }

    #[test]
    fn test_load_empty_file() {
        assert_eq!(load(r#"{"type":"file","content":""}"#), Ok(String::new()));
    }

    #[test]
    fn test_load_server_error() {
        assert_eq!(
            load(r#"{"error":"File not found"}"#),
            Err(EditorError::Server("File not found".to_string()))
        );
    }

    #[test]
    fn test_load_directory_is_protocol_error() {
        let err = load(r#"{"type":"dir","entries":[]}"#).unwrap_err();
        assert!(matches!(err, EditorError::Protocol(msg) if msg.contains("dir")));
    }

    #[test]
    fn test_load_empty_object_is_protocol_error() {
        assert!(matches!(load("{}"), Err(EditorError::Protocol(_))));
    }

    #[test]
    fn test_save_success() {
        assert_eq!(save(200, r#"{"success":true}"#), Ok(()));
    }

    #[test]
    fn test_save_error_message() {
        assert_eq!(
            save(500, r#"{"error":"disk full"}"#),
            Err(EditorError::Server("disk full".to_string()))
        );
    }

    #[test]
    fn test_save_false_without_message() {
        assert_eq!(
            save(200, r#"{"success":false}"#),
            Err(EditorError::Server("unknown error".to_string()))
        );
    }

    #[test]
    fn test_non_json_error_status_uses_http_error() {
        assert_eq!(
            save(502, "Bad Gateway\n"),
            Err(EditorError::Http {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
        );
    }

    #[test]
    fn test_non_json_success_is_protocol_error() {
        assert!(matches!(save(200, "<html>"), Err(EditorError::Protocol(_))));
    }

    #[test]
    fn test_save_request_body() {
        let body = serde_json::to_string(&SaveRequest { content: "a\"b" }).unwrap();
        assert_eq!(body, r#"{"content":"a\"b"}"#);
    }
}
