//! Error types for the refheap API client.
//!
//! # Design
//! `Service` gets a dedicated variant because refheap reports its failures as
//! well-formed JSON bodies with an `error` field, independent of the HTTP
//! status; callers match on it to tell "the service refused" from "the
//! response never arrived or made no sense." Transport and decode failures
//! keep their underlying error values so nothing is lost to stringification;
//! `source()` exposes them.

use std::fmt;

/// Errors returned by `PasteClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// Refheap answered with a JSON body whose `error` field was non-empty.
    /// Carries the service's message verbatim.
    Service(String),

    /// A delete came back with a status other than 204 and a body that
    /// parsed as JSON but carried no service error.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    Deserialization(serde_json::Error),

    /// The HTTP round trip itself failed before a body could be read.
    Transport(ureq::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Service(message) => write!(f, "{message}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(err) => {
                write!(f, "deserialization failed: {err}")
            }
            ApiError::Transport(err) => {
                write!(f, "transport failed: {err}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Deserialization(err) => Some(err),
            ApiError::Transport(err) => Some(err),
            ApiError::Service(_) | ApiError::Http { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Deserialization(err)
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err)
    }
}

/// Returned by `Config::from_args` when the argument count fits none of the
/// four accepted shapes. Carries the arguments that were refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The full argument list as it was passed in.
    pub args: Vec<String>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config could not be constructed from these args: {:?}",
            self.args
        )
    }
}

impl std::error::Error for ConfigError {}
