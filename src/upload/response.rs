//! Interpretation of the file host's upload response
//!
//! The host's response shape is not firmly documented; the download
//! locator has been observed under several key names, so each is tried
//! in order and the first non-empty value wins.

use anyhow::{Context, Result};
use serde_json::Value;

/// Candidate keys for the download locator, in the order they are tried
const LOCATOR_FIELDS: [&str; 3] = ["url", "download_url", "file_url"];

/// What the operator is told after a completed request
#[derive(Debug)]
pub enum UploadOutcome {
    /// 2xx response; `locator` is None when no recognized field was present
    Success { locator: Option<String>, body: Value },
    /// Non-2xx response; reported, never escalated to an error
    Failure { status: u16 },
}

/// Map an HTTP status and body into an operator-facing outcome.
///
/// A success body that fails to parse as JSON is an error; a non-2xx
/// status is a reportable outcome and its body is not inspected.
pub fn interpret_response(status: u16, body: &str) -> Result<UploadOutcome> {
    if !(200..300).contains(&status) {
        return Ok(UploadOutcome::Failure { status });
    }

    let parsed: Value =
        serde_json::from_str(body).context("Failed to parse upload response as JSON")?;
    let locator = extract_locator(&parsed);

    Ok(UploadOutcome::Success {
        locator,
        body: parsed,
    })
}

/// First non-empty locator value among the candidate fields
fn extract_locator(body: &Value) -> Option<String> {
    LOCATOR_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_field_wins() {
        let body = json!({"url": "https://host/a", "download_url": "https://host/b"});
        assert_eq!(extract_locator(&body).as_deref(), Some("https://host/a"));
    }

    #[test]
    fn test_fallback_order() {
        let body = json!({"download_url": "https://host/b"});
        assert_eq!(extract_locator(&body).as_deref(), Some("https://host/b"));

        let body = json!({"file_url": "https://host/c"});
        assert_eq!(extract_locator(&body).as_deref(), Some("https://host/c"));
    }

    #[test]
    fn test_empty_url_falls_through() {
        let body = json!({"url": "", "file_url": "https://host/c"});
        assert_eq!(extract_locator(&body).as_deref(), Some("https://host/c"));
    }

    #[test]
    fn test_no_recognized_field() {
        let body = json!({"id": "abc", "ok": true});
        assert_eq!(extract_locator(&body), None);
    }

    #[test]
    fn test_success_without_locator_keeps_body() {
        let outcome = interpret_response(200, r#"{"id":"abc"}"#).unwrap();
        match outcome {
            UploadOutcome::Success { locator, body } => {
                assert!(locator.is_none());
                assert_eq!(body["id"], "abc");
            }
            UploadOutcome::Failure { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_non_2xx_is_failure_not_error() {
        let outcome = interpret_response(503, "Service Unavailable").unwrap();
        assert!(matches!(outcome, UploadOutcome::Failure { status: 503 }));
    }

    #[test]
    fn test_unparseable_success_body_is_error() {
        assert!(interpret_response(200, "<html>ok</html>").is_err());
    }
}
