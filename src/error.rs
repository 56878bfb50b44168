use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DashmatchError {
    /// The store's response is missing the expected hit-list shape. This is
    /// a programmer error (wrong request shape), not a recoverable
    /// condition: propagate, do not retry.
    #[error("Malformed store response: missing `{path}`")]
    MalformedResponse { path: &'static str },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store rejected request with {status}: {body}")]
    StoreRejected { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashmatchError>;

impl From<serde_json::Error> for DashmatchError {
    fn from(e: serde_json::Error) -> Self {
        DashmatchError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for DashmatchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DashmatchError::Json(e.to_string())
        } else {
            DashmatchError::StoreUnavailable(e.to_string())
        }
    }
}

impl DashmatchError {
    /// True for failures raised locally from a response we already hold,
    /// as opposed to failures reaching or using the store.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            DashmatchError::MalformedResponse { .. } | DashmatchError::Json(_)
        )
    }
}
