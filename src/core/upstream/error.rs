//! Upstream error types.

use thiserror::Error;

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Classified failures of an upstream call.
///
/// Messages are shown to clients verbatim, so none of them carries the
/// upstream response body.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No API key is configured. Checked before any network activity.
    #[error(
        "{0} environment variable is not set. \
         Request an API key from the Bank of Thailand API portal and export it as {0}."
    )]
    MissingCredential(String),

    /// The call did not finish before the deadline. The upstream outcome is unknown.
    #[error("API request timed out")]
    Timeout,

    /// Upstream answered with a non-2xx status.
    #[error("API request failed with status {0}")]
    Status(u16),

    /// Transport fault below HTTP, or a body that is not valid JSON.
    #[error("API request failed: {0}")]
    Network(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl UpstreamError {
    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Short classification used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredential(_) => "configuration",
            Self::Timeout => "timeout",
            Self::Status(_) => "upstream_status",
            Self::Network(_) => "network",
            Self::Client(_) => "client",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            Self::Network(format!("connection failed: {e}"))
        } else if e.is_decode() {
            Self::Network(format!("invalid response body: {e}"))
        } else {
            Self::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let message = UpstreamError::MissingCredential("BOT_API_KEY".to_string()).to_string();
        assert!(message.starts_with("BOT_API_KEY environment variable is not set"));
    }

    #[test]
    fn test_status_message_carries_only_code() {
        assert_eq!(
            UpstreamError::Status(404).to_string(),
            "API request failed with status 404"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert_eq!(UpstreamError::Timeout.kind(), "timeout");
        assert_ne!(UpstreamError::Timeout.kind(), UpstreamError::network("x").kind());
    }
}
