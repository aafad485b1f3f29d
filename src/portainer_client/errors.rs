/// Errors that can occur while talking to a Portainer instance
#[derive(Debug, thiserror::Error)]
pub enum PortainerError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found: ({url})")]
    NotFound { url: String },
    #[error("internal server error: ({url})")]
    InternalServerError { url: String },
    #[error("already started: ({url})")]
    AlreadyStarted { url: String },
    #[error("unhandled error {status}: ({url})")]
    UnhandledStatus { status: u16, url: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}
