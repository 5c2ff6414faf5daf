use std::io;

use thiserror::Error;

/// Error for when a request can't be built.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The URI could not be decomposed into components.
    #[error("the URI provided was malformed: {uri:?} ({reason})")]
    MalformedUri {
        /// The URI as it was given.
        uri: String,
        /// What the URI parser objected to.
        reason: String,
    },
    /// The declared body length exceeds the limit.
    #[error("request body of {length} bytes exceeds the limit of {limit} bytes")]
    BodyTooLarge {
        /// The declared length.
        length: u64,
        /// The largest body that is read.
        limit: u64,
    },
    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    Io(#[from] io::Error),
}

impl RequestError {
    pub(crate) fn malformed(uri: &str, reason: impl ToString) -> RequestError {
        RequestError::MalformedUri { uri: uri.to_string(), reason: reason.to_string() }
    }
}
