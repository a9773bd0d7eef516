use reqwest::StatusCode;
use thiserror::Error;

/// Every way the upstream weather provider can let us down.
///
/// None of these reach the tool caller; the alert service turns all of them
/// into the same soft-failure message.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failure, timeout, or an unreadable body.
    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse weather provider JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("weather provider response has no `main` section")]
    MissingMain,
}

impl UpstreamError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, UpstreamError::Transport(err) if err.is_timeout())
    }
}
