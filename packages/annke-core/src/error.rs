//! Error types for device communication.
//!
//! Two kinds are reported by the device layer itself: a missing construction
//! parameter, and an unexpected HTTP status from the device. Everything lower
//! level (URL parsing, transport, XML codec) is wrapped with the stage that
//! failed and the operation it belonged to.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required connection parameter was empty. Raised before any network I/O.
    #[error("error initializing connection, missing parameter: {0}")]
    MissingParameter(&'static str),

    /// The device answered with a non-success status.
    #[error("received unexpected response from: {path} status: {status} payload: {body}")]
    Remote {
        status: u16,
        body: String,
        path: String,
    },

    #[error("error preparing {operation} request: {source}")]
    Prepare {
        operation: String,
        source: RequestError,
    },

    #[error("error executing {operation} request: {source}")]
    Execute {
        operation: String,
        source: reqwest::Error,
    },

    #[error("error decoding {operation} response: {source}")]
    Decode {
        operation: String,
        source: RequestError,
    },
}

/// Underlying cause of a failed request stage.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("url cannot carry credentials")]
    Credentials,

    #[error(transparent)]
    Serialize(#[from] quick_xml::SeError),

    #[error(transparent)]
    Deserialize(#[from] quick_xml::DeError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn prepare(operation: impl Into<String>, source: impl Into<RequestError>) -> Self {
        Error::Prepare {
            operation: operation.into(),
            source: source.into(),
        }
    }

    pub(crate) fn execute(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Execute {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn decode(operation: impl Into<String>, source: impl Into<RequestError>) -> Self {
        Error::Decode {
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// HTTP status reported by the device, if this is a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Request path of a remote error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Remote { path, .. } => Some(path),
            _ => None,
        }
    }
}
