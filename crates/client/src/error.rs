/// Errors from the admin API client layer.
///
/// Every failure origin collapses into this one shape so callers have a
/// single handling path; the variants stay distinguishable for the cases
/// that care (HTTP status vs. nothing-on-the-wire).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text, when readable.
        message: String,
    },

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, if the failure came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Transport(err.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
