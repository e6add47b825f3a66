//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The resource path could not be parsed or resolved against the base URL.
    /// Raised before any network I/O happens.
    #[error("Invalid resource path {path:?}")]
    Path {
        path: String,
        #[source]
        source: PathError,
    },
    /// The request never produced a response (DNS, connection, timeout,
    /// unusable base URL) or the body could not be read.
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a 5xx status.
    #[error("Teamweek API experienced an internal error ({0}). Please try again later.")]
    Server(u16),
    /// The API answered with 400.
    #[error("Malformed request sent.")]
    MalformedRequest,
    /// The API answered with 401 or 403.
    #[error("Authorization error. Please check credentials and/or reauthenticate.")]
    Authorization,
    /// Any other status the classifier does not accept.
    #[error("Teamweek API returned an unexpected status code: {0}")]
    UnexpectedStatus(u16),
    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode response")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The HTTP status this error was classified from, when it is known.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server(code) => Some(*code),
            Error::MalformedRequest => Some(400),
            Error::UnexpectedStatus(code) => Some(*code),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the caller should re-authenticate before trying again.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Error::Authorization)
    }
}

/// Reasons a resource path is rejected before it is resolved.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    #[error("invalid control character in URL")]
    InvalidControlCharacter,
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}
