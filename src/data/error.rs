//! Errors surfaced by market-data requests.

use serde_json::Value;
use thiserror::Error;

const GENERIC_MESSAGE: &str = "Failed to fetch data from CoinGecko API";
const UNPARSEABLE_MESSAGE: &str = "Failed to parse error response";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx response. `message` is what the provider said, or a generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body did not decode.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Rejected before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Picks the human-readable message out of a failed response body.
///
/// Understands `{"error": "..."}` and the rate-limit shape
/// `{"status": {"error_code": 429, "error_message": "..."}}`.
pub fn error_message_from_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return UNPARSEABLE_MESSAGE.to_string();
    };
    non_blank(value.get("error"))
        .or_else(|| non_blank(value.pointer("/status/error_message")))
        .unwrap_or(GENERIC_MESSAGE)
        .to_string()
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

impl FetchError {
    pub fn from_status(status: u16, body: &str) -> Self {
        FetchError::Status {
            status,
            message: error_message_from_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins() {
        let body = r#"{"error":"coin not found"}"#;
        assert_eq!(error_message_from_body(body), "coin not found");
    }

    #[test]
    fn rate_limit_shape_is_understood() {
        let body = r#"{"status":{"error_code":429,"error_message":"You've exceeded the Rate Limit."}}"#;
        assert_eq!(
            error_message_from_body(body),
            "You've exceeded the Rate Limit."
        );
    }

    #[test]
    fn json_without_message_falls_back_to_generic() {
        assert_eq!(error_message_from_body(r#"{"foo":1}"#), GENERIC_MESSAGE);
        assert_eq!(error_message_from_body(r#"{"error":42}"#), GENERIC_MESSAGE);
        assert_eq!(error_message_from_body("[]"), GENERIC_MESSAGE);
    }

    #[test]
    fn blank_message_falls_back_to_generic() {
        assert_eq!(error_message_from_body(r#"{"error":""}"#), GENERIC_MESSAGE);
        assert_eq!(error_message_from_body(r#"{"error":"  "}"#), GENERIC_MESSAGE);
        let body = r#"{"error":"","status":{"error_message":"Rate limited"}}"#;
        assert_eq!(error_message_from_body(body), "Rate limited");
        let body = r#"{"status":{"error_code":429,"error_message":""}}"#;
        assert_eq!(error_message_from_body(body), GENERIC_MESSAGE);
    }

    #[test]
    fn non_json_body() {
        assert_eq!(
            error_message_from_body("<html>Bad Gateway</html>"),
            UNPARSEABLE_MESSAGE
        );
        assert_eq!(error_message_from_body(""), UNPARSEABLE_MESSAGE);
    }

    #[test]
    fn status_error_displays_only_the_message() {
        let err = FetchError::from_status(404, r#"{"error":"coin not found"}"#);
        assert_eq!(err.to_string(), "coin not found");
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }
}
