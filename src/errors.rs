use std::fmt;
use std::fmt::Formatter;

/// Failure of the external generation-estimate call. There is no retry and
/// no fallback data: the caller must surface the failure instead of
/// rendering an empty or zeroed table.
#[derive(Debug)]
pub enum PvgisError {
    /// Transport-level failure (DNS, connect, timeout).
    Http(String),
    /// The service answered with a non-success HTTP status.
    Status(String),
    /// The response body did not match the expected document shape.
    Document(String),
}

impl fmt::Display for PvgisError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PvgisError::Http(e)     => write!(f, "PvgisError::Http: {}", e),
            PvgisError::Status(e)   => write!(f, "PvgisError::Status: {}", e),
            PvgisError::Document(e) => write!(f, "PvgisError::Document: {}", e),
        }
    }
}

impl std::error::Error for PvgisError {}

impl From<reqwest::Error> for PvgisError {
    fn from(e: reqwest::Error) -> PvgisError {
        PvgisError::Http(e.to_string())
    }
}

impl From<serde_json::Error> for PvgisError {
    fn from(e: serde_json::Error) -> PvgisError {
        PvgisError::Document(e.to_string())
    }
}
