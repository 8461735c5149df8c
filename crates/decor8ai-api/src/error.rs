use reqwest::StatusCode;

/// Broad category of an [`Error`], for callers that only care about what went wrong at a
/// high level (for example to decide whether to fix configuration or try again later).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client could not be constructed. Nothing can be sent until this is fixed.
    Configuration,
    /// A required request field was empty. Raised before any network activity.
    InvalidRequest,
    /// The input image could not be read from disk or downloaded.
    SourceFetch,
    /// The API call itself failed at the network or HTTP layer.
    Transport,
    /// The API answered, but reported an error in the response body.
    Api,
}

/// Errors returned by the Decor8 AI client.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
    /// A required request field was missing or empty.
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    /// The input image could not be obtained.
    #[error("failed to read input image from {location}")]
    SourceFetch {
        /// The path or URL that was being read.
        location: String,
        /// Why reading it failed.
        #[source]
        source: SourceFetchError,
    },
    /// The request could not be sent or the response could not be read.
    #[error("request to the Decor8 AI API failed")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status and no API error in the body.
    #[error("got error code: {status}, message text: {body}")]
    Status {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
    /// The API answered with a success status but the body was not valid response JSON.
    #[error("parsing response failed")]
    InvalidResponse(#[from] serde_json::Error),
    /// The API reported an error in the response body.
    #[error("API error {error}: {}", message.as_deref().unwrap_or("no message"))]
    Api {
        /// The HTTP status of the response, usually `200 OK`.
        status: StatusCode,
        /// The `error` field of the response.
        error: String,
        /// The `message` field of the response, if any.
        message: Option<String>,
    },
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) | Error::ClientBuild(_) => ErrorKind::Configuration,
            Error::MissingField(_) => ErrorKind::InvalidRequest,
            Error::SourceFetch { .. } => ErrorKind::SourceFetch,
            Error::Transport(_) | Error::Status { .. } | Error::InvalidResponse(_) => {
                ErrorKind::Transport
            }
            Error::Api { .. } => ErrorKind::Api,
        }
    }
}

/// Reasons an input image could not be obtained.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SourceFetchError {
    /// The local file could not be opened or inspected.
    #[error("failed to open file")]
    Io(#[from] std::io::Error),
    /// The download request failed.
    #[error("failed to download image")]
    Request(#[from] reqwest::Error),
    /// The image host answered with a non-success status.
    #[error("image host returned {0}")]
    Status(StatusCode),
}

/// A string that does not name any variant of a parameter enum such as [`crate::SkyType`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {field} `{value}`, expected one of: {}", expected.join(", "))]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_message() {
        let err = Error::Api {
            status: StatusCode::OK,
            error: "InvalidInput".to_string(),
            message: Some("Invalid room type".to_string()),
        };
        assert_eq!(err.to_string(), "API error InvalidInput: Invalid room type");
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn status_error_is_transport() {
        let err = Error::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn source_fetch_keeps_cause() {
        let err = Error::SourceFetch {
            location: "missing.jpg".to_string(),
            source: SourceFetchError::Io(std::io::Error::from(std::io::ErrorKind::NotFound)),
        };
        assert_eq!(err.kind(), ErrorKind::SourceFetch);
        assert!(std::error::Error::source(&err).is_some());
    }
}
