use thiserror::Error;

/// Failures talking to the review service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service answered with status {status}")]
    Rejected { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Request(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}
