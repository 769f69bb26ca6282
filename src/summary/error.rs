//! Summary provider error types

use thiserror::Error;

/// Errors raised while fetching the dashboard summary.
///
/// Every variant is a remote call failure: the caller keeps its
/// last-known-good state.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Request exceeded the configured timeout
    #[error("Summary request timed out")]
    Timeout,

    /// Backend could not be reached
    #[error("Summary provider unavailable")]
    Unavailable,

    /// Transport-level failure
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Backend answered with a JSON-RPC error payload
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response body did not match the summary shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        SummaryError::Malformed(err.to_string())
    }
}

pub type SummaryResult<T> = Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::Rpc {
            code: 200,
            message: "Odoo Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error 200: Odoo Server Error");

        let err = SummaryError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let err: SummaryError = json_err.into();
        assert!(matches!(err, SummaryError::Malformed(_)));
    }
}
