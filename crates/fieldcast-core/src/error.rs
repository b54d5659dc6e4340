//! Error types for the fieldcast core library
//!
//! The projection engine itself is infallible: a well-typed select spec
//! produces some output for every record. Errors only arise at the
//! boundary, when a spec or record batch is parsed from serialized form.

use thiserror::Error;

/// Main error type for fieldcast operations
#[derive(Error, Debug)]
pub enum Error {
    /// Select spec validation errors
    #[error("Invalid select spec: {message}")]
    Spec {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a spec error from a plain message
    pub fn spec(message: impl Into<String>) -> Self {
        Error::Spec {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
