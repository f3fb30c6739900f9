//! HTTP client for the unlock service.
//!
//! Packages the selection and shared password into one multipart request
//! and hands back the response body untouched.

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;

use crate::types::{AppError, SelectedFile};

/// Structured error body the service sends on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Sends `files` and `password` to the unlock endpoint.
///
/// One `files` part per file plus a single `password` part, POSTed to
/// `{backend_url}/unlock/`. No retries. On success the body is returned as
/// opaque bytes; the caller treats it as an archive without parsing it.
pub async fn unlock_files(
    files: &[SelectedFile],
    password: &str,
    backend_url: &str,
) -> Result<Vec<u8>, AppError> {
    let form_data =
        FormData::new().map_err(|e| AppError::Browser(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob("files", &file.handle)
            .map_err(|e| AppError::Browser(format!("Failed to append file: {:?}", e)))?;
    }
    form_data
        .append_with_str("password", password)
        .map_err(|e| AppError::Browser(format!("Failed to append password: {:?}", e)))?;

    let url = format!("{}/unlock/", backend_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Browser(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Service(error_message(
            response.status(),
            &response.status_text(),
            &body,
        )));
    }

    response
        .binary()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))
}

/// Maps a failure response to a non-empty user-facing message.
///
/// Prefers the service's `detail` field, then the HTTP status text, then a
/// generic line carrying the status code.
fn error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            if !detail.is_empty() {
                return detail;
            }
        }
    }
    if !status_text.is_empty() {
        return status_text.to_string();
    }
    format!("Request failed with status {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        let msg = error_message(400, "Bad Request", r#"{"detail": "bad password"}"#);
        assert_eq!(msg, "bad password");
    }

    #[test]
    fn unparseable_body_falls_back_to_status_text() {
        let msg = error_message(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(msg, "Internal Server Error");
    }

    #[test]
    fn body_without_detail_falls_back_to_status_text() {
        let msg = error_message(422, "Unprocessable Entity", r#"{"error": "nope"}"#);
        assert_eq!(msg, "Unprocessable Entity");
    }

    #[test]
    fn message_is_never_empty() {
        let msg = error_message(502, "", "");
        assert_eq!(msg, "Request failed with status 502");
    }

    #[test]
    fn empty_detail_is_not_used() {
        let msg = error_message(400, "Bad Request", r#"{"detail": ""}"#);
        assert_eq!(msg, "Bad Request");
    }
}
